//! Interface to the external ledger/execution environment.

use thiserror::Error;
use veil_types::MemberAddress;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EnvError {
    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u128, available: u128 },
}

/// The value-holding environment a passed proposal spends from.
///
/// Implementations must provide all-or-nothing transfer semantics: a
/// returned error means no balance moved.
pub trait ExecutionEnv {
    /// Funds currently available for proposal execution.
    fn available_balance(&self) -> u128;

    /// Transfer `amount` to `to`, optionally invoking `payload` on the
    /// target. Atomic with respect to failure.
    fn transfer_value(
        &mut self,
        to: &MemberAddress,
        amount: u128,
        payload: &[u8],
    ) -> Result<(), EnvError>;
}
