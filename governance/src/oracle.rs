//! Interface to the external decryption oracle.

use veil_crypto::Ciphertext;

/// Identifier the oracle assigns to a decryption request.
pub type RequestId = u64;

/// Adapter to the trusted decryption service.
///
/// `request_decryption` fires and forgets; the plaintexts come back later
/// through an independent call to
/// [`Proposal::decryption_fulfilled`](crate::Proposal::decryption_fulfilled)
/// quoting the returned id. No timeout is enforced: an oracle that never
/// responds is a liveness failure, not a correctness one.
pub trait DecryptionOracle {
    fn request_decryption(&mut self, handles: &[Ciphertext]) -> RequestId;
}
