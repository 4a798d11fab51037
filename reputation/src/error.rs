use thiserror::Error;
use veil_types::ProposalId;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReputationError {
    #[error("capability for proposal {0} is not registered with this ledger")]
    Unauthorized(ProposalId),

    #[error("balance overflow while minting")]
    Overflow,
}
