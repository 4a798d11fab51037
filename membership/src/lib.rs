//! Membership registry for the veil governance engine.
//!
//! A single Merkle root stands in for the full member set: candidates prove
//! membership with an O(log n) sibling path instead of the registry storing
//! an O(n) allow-list. The administrator rotates the root to add or remove
//! members; proofs against the old root die with it.

pub mod error;
pub mod registry;

pub use error::MembershipError;
pub use registry::MembershipRegistry;
