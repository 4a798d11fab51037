//! Keccak-256 hashing for Merkle leaves, tree nodes, and commitments.

use sha3::{Digest, Keccak256};
use veil_types::{Hash256, MemberAddress};

/// Compute a Keccak-256 hash of arbitrary data.
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    hasher.update(data);
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash multiple byte slices in sequence (avoids concatenation allocation).
pub fn keccak256_multi(parts: &[&[u8]]) -> [u8; 32] {
    let mut hasher = Keccak256::new();
    for part in parts {
        hasher.update(part);
    }
    let result = hasher.finalize();
    let mut output = [0u8; 32];
    output.copy_from_slice(&result);
    output
}

/// Hash a member address into its Merkle leaf.
///
/// The leaf encoding is `keccak256` of the lowercase hex address body
/// without the `0x` prefix, so off-system tree builders and this engine
/// agree byte-for-byte.
pub fn address_leaf(address: &MemberAddress) -> Hash256 {
    Hash256::new(keccak256(address.normalized().as_bytes()))
}
