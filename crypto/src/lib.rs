//! Cryptographic primitives for the veil governance engine.
//!
//! Keccak-256 hashing, sorted-pair Merkle trees for membership proofs,
//! commit-reveal commitment hashing, and the opaque ciphertext handle plus
//! the `EncryptionEngine` capability trait that the proposal state machine
//! accumulates encrypted tallies through.

pub mod commitment;
pub mod encryption;
pub mod hash;
pub mod merkle;

pub use commitment::commitment_hash;
pub use encryption::{Ciphertext, EncryptionEngine};
pub use hash::{address_leaf, keccak256, keccak256_multi};
pub use merkle::MerkleTree;
