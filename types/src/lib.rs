//! Fundamental types for the veil governance engine.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: account addresses, 256-bit hashes, timestamps, and proposal
//! identifiers.

pub mod address;
pub mod hash;
pub mod time;

pub use address::MemberAddress;
pub use hash::Hash256;
pub use time::Timestamp;

/// Sequential identifier assigned to each spawned proposal or airdrop.
pub type ProposalId = u64;
