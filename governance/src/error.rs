use crate::env::EnvError;
use crate::oracle::RequestId;
use thiserror::Error;
use veil_reputation::ReputationError;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GovernanceError {
    #[error("only members can participate")]
    NotMember,

    #[error("commit period ended")]
    CommitClosed,

    #[error("proposal not active")]
    ProposalNotActive,

    #[error("caller has already committed a vote")]
    AlreadyCommitted,

    #[error("caller has already revealed")]
    AlreadyRevealed,

    #[error("caller has no commitment to reveal")]
    NotCommitted,

    #[error("reveal does not match the stored commitment")]
    InvalidReveal,

    #[error("ciphertext input proof rejected")]
    InvalidInputProof,

    #[error("tally already decrypted")]
    AlreadyDecrypted,

    #[error("no outstanding decryption request with id {0}")]
    UnknownRequest(RequestId),

    #[error("proposal did not pass")]
    ProposalNotPassed,

    #[error("proposal already executed")]
    AlreadyExecuted,

    #[error("address has already claimed this airdrop")]
    AlreadyClaimed,

    #[error("insufficient funds: need {needed}, have {available}")]
    InsufficientFunds { needed: u128, available: u128 },

    #[error("voting period {0}s cannot form distinct commit and reveal windows")]
    InvalidVotingPeriod(u64),

    #[error(transparent)]
    Reputation(#[from] ReputationError),
}

impl From<EnvError> for GovernanceError {
    fn from(err: EnvError) -> Self {
        match err {
            EnvError::InsufficientFunds { needed, available } => {
                Self::InsufficientFunds { needed, available }
            }
        }
    }
}
