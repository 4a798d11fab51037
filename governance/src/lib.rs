//! Proposal lifecycle engine for veil governance.
//!
//! The state machine at the center of the system: members commit hashed
//! encrypted ballots, reveal them during the reveal window (homomorphically
//! accumulated, no plaintext on this side), anyone requests oracle
//! decryption after the windows close, and anyone executes a passed
//! proposal exactly once.
//!
//! Collaborators are passed in explicitly: the membership registry gates
//! participation, the reputation ledger supplies voting weight and receives
//! incentive mints, the encryption engine combines ciphertext handles, the
//! decryption oracle and execution environment sit behind traits.

pub mod airdrop;
pub mod env;
pub mod error;
pub mod factory;
pub mod oracle;
pub mod proposal;

pub use airdrop::Airdrop;
pub use env::{EnvError, ExecutionEnv};
pub use error::GovernanceError;
pub use factory::ProposalFactory;
pub use oracle::{DecryptionOracle, RequestId};
pub use proposal::{Proposal, ProposalParams, ProposalPhase, EXECUTOR_BONUS, REVEAL_REWARD};
