//! Reputation ledger for the veil governance engine.
//!
//! An ERC20-like balance store whose only upward mutation path is `mint`,
//! and `mint` is open only to holders of a [`MintCapability`], the
//! unforgeable token the ledger issues when the factory registers a spawned
//! proposal or airdrop. Balances double as voting-weight input
//! (`weight = 1 + balance`) and as the participation incentive currency.

pub mod error;
pub mod ledger;

pub use error::ReputationError;
pub use ledger::{MintCapability, ReputationLedger};
