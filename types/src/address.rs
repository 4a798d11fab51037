//! Account address type with `0x` prefix.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A member account address: `0x` followed by 40 hex digits.
///
/// Addresses are compared case-insensitively; the Merkle leaf encoding is
/// the lowercase hex body without the `0x` prefix.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MemberAddress(String);

impl MemberAddress {
    /// The standard prefix for all member addresses.
    pub const PREFIX: &'static str = "0x";

    /// Create a new address from a raw string.
    ///
    /// # Panics
    /// Panics if the string does not start with `0x`.
    pub fn new(raw: impl Into<String>) -> Self {
        let s = raw.into();
        assert!(s.starts_with(Self::PREFIX), "address must start with 0x");
        Self(s)
    }

    /// Return the raw address string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The lowercase hex body without the `0x` prefix.
    ///
    /// This is the canonical form hashed into a Merkle leaf.
    pub fn normalized(&self) -> String {
        self.0[Self::PREFIX.len()..].to_ascii_lowercase()
    }

    /// Validate that this address is well-formed.
    pub fn is_valid(&self) -> bool {
        let body = &self.0[Self::PREFIX.len()..];
        body.len() == 40 && body.chars().all(|c| c.is_ascii_hexdigit())
    }
}

impl PartialEq for MemberAddress {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl Eq for MemberAddress {}

impl std::hash::Hash for MemberAddress {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for MemberAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for MemberAddress {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}
