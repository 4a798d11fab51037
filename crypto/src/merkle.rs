//! Sorted-pair Merkle trees for membership proofs.
//!
//! Sibling pairs are hashed smaller-hash-first, so a proof is just an
//! ordered sequence of sibling hashes with no left/right direction bits.
//! An odd node at the end of a level is promoted to the next level
//! unhashed (no duplication).

use crate::hash::keccak256_multi;
use veil_types::Hash256;

/// Combine two nodes into their parent, smaller hash first.
pub fn combine(a: Hash256, b: Hash256) -> Hash256 {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    Hash256::new(keccak256_multi(&[lo.as_bytes(), hi.as_bytes()]))
}

/// Recompute the root from a leaf and its sibling path, and compare.
///
/// An empty proof is valid only for a single-leaf tree (root == leaf).
pub fn verify_proof(proof: &[Hash256], leaf: Hash256, root: Hash256) -> bool {
    let mut node = leaf;
    for sibling in proof {
        node = combine(node, *sibling);
    }
    node == root
}

/// An in-memory sorted-pair Merkle tree.
///
/// Used by registry administrators and tests to build roots and proofs;
/// the engine itself only ever verifies.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// `levels[0]` is the leaf layer; the last level holds the root.
    levels: Vec<Vec<Hash256>>,
}

impl MerkleTree {
    /// Build a tree over the given leaves (order preserved).
    pub fn from_leaves(leaves: Vec<Hash256>) -> Self {
        let mut levels = vec![leaves];
        while levels.last().map(Vec::len).unwrap_or(0) > 1 {
            let current = levels.last().unwrap();
            let mut next = Vec::with_capacity(current.len().div_ceil(2));
            for pair in current.chunks(2) {
                match pair {
                    [a, b] => next.push(combine(*a, *b)),
                    [odd] => next.push(*odd),
                    _ => unreachable!(),
                }
            }
            levels.push(next);
        }
        Self { levels }
    }

    /// The root hash. `Hash256::ZERO` for an empty tree.
    pub fn root(&self) -> Hash256 {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or(Hash256::ZERO)
    }

    /// The sibling path for the first occurrence of `leaf`.
    ///
    /// Returns `None` if the leaf is not in the tree. Promoted odd nodes
    /// contribute no sibling, so proofs can be shorter than the tree depth.
    pub fn proof_for(&self, leaf: Hash256) -> Option<Vec<Hash256>> {
        let mut index = self.levels.first()?.iter().position(|l| *l == leaf)?;
        let mut proof = Vec::new();
        for level in &self.levels[..self.levels.len().saturating_sub(1)] {
            let sibling = index ^ 1;
            if sibling < level.len() {
                proof.push(level[sibling]);
            }
            index /= 2;
        }
        Some(proof)
    }

    /// Number of leaves.
    pub fn leaf_count(&self) -> usize {
        self.levels.first().map(Vec::len).unwrap_or(0)
    }
}
