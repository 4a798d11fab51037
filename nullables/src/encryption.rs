//! Nullable encryption backend: an in-memory handle-to-plaintext table.
//!
//! Handles are opaque hashes derived from a counter, never from the
//! plaintext, so a handle leaks nothing about the value it stands for,
//! the same observable property as a real encryption backend. Thread-safe
//! so a single backend can be shared with a [`NullOracle`](crate::NullOracle).

use std::collections::HashMap;
use std::sync::Mutex;

use veil_crypto::hash::keccak256_multi;
use veil_crypto::{Ciphertext, EncryptionEngine};
use veil_types::{Hash256, MemberAddress, ProposalId};

/// A deterministic encryption backend for testing.
pub struct NullEncryption {
    plaintexts: Mutex<HashMap<Hash256, u128>>,
    counter: Mutex<u64>,
}

impl NullEncryption {
    pub fn new() -> Self {
        Self {
            plaintexts: Mutex::new(HashMap::new()),
            counter: Mutex::new(0),
        }
    }

    fn fresh(&self, value: u128) -> Ciphertext {
        let mut counter = self.counter.lock().unwrap();
        *counter += 1;
        let handle = Hash256::new(keccak256_multi(&[b"null-ciphertext", &counter.to_le_bytes()]));
        self.plaintexts.lock().unwrap().insert(handle, value);
        Ciphertext::from_handle(handle)
    }

    fn value_of(&self, ct: &Ciphertext) -> u128 {
        self.plaintexts
            .lock()
            .unwrap()
            .get(ct.handle())
            .copied()
            .unwrap_or(0)
    }

    /// Client-side encryption: produce a ciphertext handle bound to a
    /// proposal and caller, plus the input proof attesting that binding.
    pub fn encrypt_input(
        &self,
        proposal: ProposalId,
        caller: &MemberAddress,
        value: u128,
    ) -> (Ciphertext, Vec<u8>) {
        let handle = self.fresh(value);
        let proof = Self::input_proof(&handle, proposal, caller);
        (handle, proof)
    }

    /// Decrypt a handle. This is the oracle's side of the capability; the
    /// governance engine never calls it.
    pub fn decrypt(&self, ct: &Ciphertext) -> u128 {
        self.value_of(ct)
    }

    fn input_proof(handle: &Ciphertext, proposal: ProposalId, caller: &MemberAddress) -> Vec<u8> {
        keccak256_multi(&[
            handle.handle().as_bytes(),
            &proposal.to_le_bytes(),
            caller.normalized().as_bytes(),
        ])
        .to_vec()
    }
}

impl Default for NullEncryption {
    fn default() -> Self {
        Self::new()
    }
}

impl EncryptionEngine for NullEncryption {
    fn zero(&self) -> Ciphertext {
        self.fresh(0)
    }

    fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Ciphertext {
        self.fresh(self.value_of(a).saturating_add(self.value_of(b)))
    }

    fn weighted_split(&self, ballot: &Ciphertext, weight: u128) -> (Ciphertext, Ciphertext) {
        // Support is an encrypted 0/1; anything nonzero counts as yes.
        let support = self.value_of(ballot).min(1);
        (
            self.fresh(weight.saturating_mul(support)),
            self.fresh(weight.saturating_mul(1 - support)),
        )
    }

    fn verify_input(
        &self,
        handle: &Ciphertext,
        input_proof: &[u8],
        proposal: ProposalId,
        caller: &MemberAddress,
    ) -> bool {
        Self::input_proof(handle, proposal, caller) == input_proof
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn addr(n: u8) -> MemberAddress {
        MemberAddress::new(format!("0x{:040x}", n))
    }

    #[test]
    fn handles_are_opaque_and_distinct() {
        let enc = NullEncryption::new();
        let (a, _) = enc.encrypt_input(1, &addr(1), 7);
        let (b, _) = enc.encrypt_input(1, &addr(1), 7);
        assert_ne!(a, b);
        assert_eq!(enc.decrypt(&a), 7);
        assert_eq!(enc.decrypt(&b), 7);
    }

    #[test]
    fn homomorphic_add() {
        let enc = NullEncryption::new();
        let (a, _) = enc.encrypt_input(1, &addr(1), 2);
        let (b, _) = enc.encrypt_input(1, &addr(2), 3);
        assert_eq!(enc.decrypt(&enc.add(&a, &b)), 5);
        assert_eq!(enc.decrypt(&enc.zero()), 0);
    }

    #[test]
    fn weighted_split_routes_support() {
        let enc = NullEncryption::new();
        let (yes_ballot, _) = enc.encrypt_input(1, &addr(1), 1);
        let (yes, no) = enc.weighted_split(&yes_ballot, 3);
        assert_eq!((enc.decrypt(&yes), enc.decrypt(&no)), (3, 0));

        let (no_ballot, _) = enc.encrypt_input(1, &addr(1), 0);
        let (yes, no) = enc.weighted_split(&no_ballot, 2);
        assert_eq!((enc.decrypt(&yes), enc.decrypt(&no)), (0, 2));
    }

    #[test]
    fn input_proof_binds_proposal_and_caller() {
        let enc = NullEncryption::new();
        let (handle, proof) = enc.encrypt_input(1, &addr(1), 1);
        assert!(enc.verify_input(&handle, &proof, 1, &addr(1)));
        assert!(!enc.verify_input(&handle, &proof, 2, &addr(1)));
        assert!(!enc.verify_input(&handle, &proof, 1, &addr(2)));
        assert!(!enc.verify_input(&handle, b"junk", 1, &addr(1)));
    }
}
