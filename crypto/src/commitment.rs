//! Commitment hashing for the commit-reveal protocol.

use crate::encryption::Ciphertext;
use crate::hash::keccak256_multi;
use veil_types::Hash256;

/// `keccak256(ciphertext_handle || salt)`, the value a voter commits to.
///
/// The commitment hides both the vote and the ciphertext handle until the
/// reveal phase; the salt prevents dictionary attacks over the small handle
/// space a voter might reuse.
pub fn commitment_hash(handle: &Ciphertext, salt: &Hash256) -> Hash256 {
    Hash256::new(keccak256_multi(&[
        handle.handle().as_bytes(),
        salt.as_bytes(),
    ]))
}
