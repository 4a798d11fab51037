//! Opaque ciphertext handles and the encryption capability seam.
//!
//! Ballots are encrypted client-side; the engine only ever holds 32-byte
//! handles and combines them through an [`EncryptionEngine`], so no code in
//! this workspace observes a plaintext vote before the decryption oracle
//! delivers the final totals.

use serde::{Deserialize, Serialize};
use veil_types::{Hash256, MemberAddress, ProposalId};

/// An opaque handle to an externally held ciphertext.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Ciphertext(Hash256);

impl Ciphertext {
    pub fn from_handle(handle: Hash256) -> Self {
        Self(handle)
    }

    pub fn handle(&self) -> &Hash256 {
        &self.0
    }
}

/// Homomorphic operations over ciphertext handles.
///
/// Implementations wrap whatever encryption backend actually holds the
/// ciphertexts. The engine requires only an additive monoid plus a
/// select-and-scale primitive, and never branches on plaintext.
pub trait EncryptionEngine {
    /// A fresh encryption of zero (the empty tally).
    fn zero(&self) -> Ciphertext;

    /// Homomorphic addition of two ciphertexts.
    fn add(&self, a: &Ciphertext, b: &Ciphertext) -> Ciphertext;

    /// Split an encrypted support bit into its weighted yes/no parts:
    /// `(weight * support, weight * (1 - support))`, both still encrypted.
    fn weighted_split(&self, ballot: &Ciphertext, weight: u128) -> (Ciphertext, Ciphertext);

    /// Validate that `handle` was produced by the backend for exactly this
    /// proposal and caller (the client-side input proof).
    fn verify_input(
        &self,
        handle: &Ciphertext,
        input_proof: &[u8],
        proposal: ProposalId,
        caller: &MemberAddress,
    ) -> bool;
}
