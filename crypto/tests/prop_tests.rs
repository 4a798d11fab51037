use proptest::prelude::*;

use veil_crypto::hash::keccak256;
use veil_crypto::merkle::{combine, verify_proof, MerkleTree};
use veil_types::Hash256;

fn leaves(count: usize, seed: u64) -> Vec<Hash256> {
    (0..count)
        .map(|i| Hash256::new(keccak256(format!("{seed}:{i}").as_bytes())))
        .collect()
}

proptest! {
    /// Every leaf of every tree must verify against the tree's root.
    #[test]
    fn merkle_proofs_sound(count in 1usize..64, seed in 0u64..1_000) {
        let leaves = leaves(count, seed);
        let tree = MerkleTree::from_leaves(leaves.clone());
        for leaf in &leaves {
            let proof = tree.proof_for(*leaf).expect("leaf must have a proof");
            prop_assert!(verify_proof(&proof, *leaf, tree.root()));
        }
    }

    /// A proof for one leaf must never verify a different leaf.
    #[test]
    fn merkle_proofs_not_transferable(count in 2usize..64, seed in 0u64..1_000) {
        let leaves = leaves(count, seed);
        let tree = MerkleTree::from_leaves(leaves.clone());
        let proof = tree.proof_for(leaves[0]).unwrap();
        let outsider = Hash256::new(keccak256(format!("outsider:{seed}").as_bytes()));
        prop_assert!(!verify_proof(&proof, outsider, tree.root()));
    }

    /// Sorted-pair combination is symmetric.
    #[test]
    fn combine_symmetric(a in any::<[u8; 32]>(), b in any::<[u8; 32]>()) {
        let (a, b) = (Hash256::new(a), Hash256::new(b));
        prop_assert_eq!(combine(a, b), combine(b, a));
    }

    /// Tampering with any single proof element breaks verification.
    #[test]
    fn tampered_proof_fails(count in 2usize..32, seed in 0u64..1_000, flip in any::<u8>()) {
        let leaves = leaves(count, seed);
        let tree = MerkleTree::from_leaves(leaves.clone());
        let mut proof = tree.proof_for(leaves[0]).unwrap();
        if !proof.is_empty() {
            let idx = flip as usize % proof.len();
            let mut bytes = *proof[idx].as_bytes();
            bytes[0] ^= 0x01;
            proof[idx] = Hash256::new(bytes);
            prop_assert!(!verify_proof(&proof, leaves[0], tree.root()));
        }
    }
}
