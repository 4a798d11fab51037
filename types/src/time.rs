//! Timestamp type used for proposal phase boundaries.
//!
//! Timestamps are Unix epoch seconds (UTC) as reported by the execution
//! environment's clock; the engine never reads the system clock itself.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A Unix timestamp in seconds since epoch (UTC).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The epoch (time zero).
    pub const EPOCH: Self = Self(0);

    pub fn new(secs: u64) -> Self {
        Self(secs)
    }

    pub fn as_secs(&self) -> u64 {
        self.0
    }

    /// This timestamp shifted forward by `secs` (saturating).
    pub fn offset(&self, secs: u64) -> Self {
        Self(self.0.saturating_add(secs))
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offset_adds_seconds() {
        assert_eq!(Timestamp::new(100).offset(50), Timestamp::new(150));
    }

    #[test]
    fn offset_saturates() {
        assert_eq!(Timestamp::new(u64::MAX).offset(1), Timestamp::new(u64::MAX));
    }

    #[test]
    fn ordering() {
        assert!(Timestamp::EPOCH < Timestamp::new(1));
    }
}
