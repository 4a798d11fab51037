//! Nullable decryption oracle: queues requests, fulfills on demand.

use std::collections::VecDeque;
use std::sync::Arc;

use veil_crypto::Ciphertext;
use veil_governance::{DecryptionOracle, RequestId};

use crate::encryption::NullEncryption;

/// A deterministic decryption oracle for testing.
///
/// Requests queue up until the test drains them with [`fulfill_next`];
/// decryption goes through the shared [`NullEncryption`] backend, the same
/// trust relationship a real relayer has with its coprocessor.
///
/// [`fulfill_next`]: NullOracle::fulfill_next
pub struct NullOracle {
    backend: Arc<NullEncryption>,
    next_id: RequestId,
    pending: VecDeque<(RequestId, Vec<Ciphertext>)>,
}

impl NullOracle {
    pub fn new(backend: Arc<NullEncryption>) -> Self {
        Self {
            backend,
            next_id: 0,
            pending: VecDeque::new(),
        }
    }

    /// Number of requests waiting for fulfillment.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Decrypt the oldest outstanding request and hand back
    /// `(request_id, plaintexts)` for delivery to the proposal.
    pub fn fulfill_next(&mut self) -> Option<(RequestId, Vec<u128>)> {
        let (id, handles) = self.pending.pop_front()?;
        let plaintexts = handles.iter().map(|h| self.backend.decrypt(h)).collect();
        Some((id, plaintexts))
    }
}

impl DecryptionOracle for NullOracle {
    fn request_decryption(&mut self, handles: &[Ciphertext]) -> RequestId {
        self.next_id += 1;
        self.pending.push_back((self.next_id, handles.to_vec()));
        self.next_id
    }
}
