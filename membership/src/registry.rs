//! The Merkle-root registry itself.

use crate::error::MembershipError;
use serde::{Deserialize, Serialize};
use veil_crypto::hash::address_leaf;
use veil_crypto::merkle::verify_proof;
use veil_types::{Hash256, MemberAddress};

/// Registry of eligible participants, represented by one Merkle root.
///
/// Membership is always evaluated against the *current* root; a proof
/// computed against a rotated-out root is invalid immediately, with no
/// grace period.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MembershipRegistry {
    root: Hash256,
    admin: MemberAddress,
}

impl MembershipRegistry {
    /// Create a registry with an initial root; `admin` is the only address
    /// allowed to rotate it.
    pub fn new(root: Hash256, admin: MemberAddress) -> Self {
        Self { root, admin }
    }

    /// The current Merkle root.
    pub fn root(&self) -> Hash256 {
        self.root
    }

    /// The registry administrator.
    pub fn admin(&self) -> &MemberAddress {
        &self.admin
    }

    /// Check a membership proof for `address` against the current root.
    ///
    /// Recomputes the path from `keccak256(normalized address)` through the
    /// sorted-pair siblings in `proof`. No side effects.
    pub fn verify(&self, proof: &[Hash256], address: &MemberAddress) -> bool {
        verify_proof(proof, address_leaf(address), self.root)
    }

    /// Replace the root. Administrator only.
    pub fn update_root(
        &mut self,
        caller: &MemberAddress,
        new_root: Hash256,
    ) -> Result<(), MembershipError> {
        if *caller != self.admin {
            return Err(MembershipError::Unauthorized(caller.to_string()));
        }
        self.root = new_root;
        tracing::info!(root = %new_root, "membership root updated");
        Ok(())
    }
}
