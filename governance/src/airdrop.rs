//! One-shot membership-gated claims.
//!
//! The lightweight sibling of a proposal: same registry gate, same ledger
//! payout path, no voting machinery. One claim per address, forever.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use veil_membership::MembershipRegistry;
use veil_reputation::{MintCapability, ReputationLedger};
use veil_types::{Hash256, MemberAddress, ProposalId};

use crate::error::GovernanceError;

#[derive(Debug, Serialize, Deserialize)]
pub struct Airdrop {
    id: ProposalId,
    claim_amount: u128,
    claimed: HashSet<MemberAddress>,
    mint_cap: MintCapability,
}

impl Airdrop {
    pub(crate) fn new(id: ProposalId, claim_amount: u128, mint_cap: MintCapability) -> Self {
        Self {
            id,
            claim_amount,
            claimed: HashSet::new(),
            mint_cap,
        }
    }

    pub fn id(&self) -> ProposalId {
        self.id
    }

    pub fn claim_amount(&self) -> u128 {
        self.claim_amount
    }

    pub fn has_claimed(&self, address: &MemberAddress) -> bool {
        self.claimed.contains(address)
    }

    /// Claim the airdrop: membership-gated, once per address.
    pub fn claim(
        &mut self,
        registry: &MembershipRegistry,
        ledger: &mut ReputationLedger,
        caller: &MemberAddress,
        proof: &[Hash256],
    ) -> Result<(), GovernanceError> {
        if !registry.verify(proof, caller) {
            return Err(GovernanceError::NotMember);
        }
        if self.claimed.contains(caller) {
            return Err(GovernanceError::AlreadyClaimed);
        }
        self.claimed.insert(caller.clone());
        ledger.mint(&self.mint_cap, caller, self.claim_amount)?;
        tracing::info!(airdrop = self.id, claimer = %caller, amount = self.claim_amount, "airdrop claimed");
        Ok(())
    }
}
