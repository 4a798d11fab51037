//! Spawns proposals and airdrops bound to a registry/ledger pair.

use veil_crypto::EncryptionEngine;
use veil_membership::MembershipRegistry;
use veil_reputation::ReputationLedger;
use veil_types::{Hash256, MemberAddress, ProposalId, Timestamp};

use crate::airdrop::Airdrop;
use crate::error::GovernanceError;
use crate::proposal::{Proposal, ProposalParams};

/// Factory assigning sequential ids to spawned proposals and airdrops.
///
/// Creation is itself membership-gated: the caller must prove they are in
/// the registry before anything is spawned. The factory registers each
/// spawn with the reputation ledger, which hands back the mint capability
/// the new instance will use for incentive payouts.
#[derive(Debug)]
pub struct ProposalFactory {
    next_id: ProposalId,
}

impl ProposalFactory {
    pub fn new() -> Self {
        Self { next_id: 1 }
    }

    /// Id the next spawn will receive.
    pub fn next_id(&self) -> ProposalId {
        self.next_id
    }

    /// Verify membership and spawn a new proposal.
    ///
    /// The voting period is split evenly: commits close at
    /// `now + period/2`, reveals at `now + period`.
    pub fn create_proposal(
        &mut self,
        registry: &MembershipRegistry,
        ledger: &mut ReputationLedger,
        enc: &dyn EncryptionEngine,
        caller: &MemberAddress,
        proof: &[Hash256],
        params: ProposalParams,
        now: Timestamp,
    ) -> Result<Proposal, GovernanceError> {
        if !registry.verify(proof, caller) {
            return Err(GovernanceError::NotMember);
        }
        let id = self.take_id();
        let cap = ledger.authorize(id);
        let proposal = Proposal::new(id, params, cap, enc, now)?;
        tracing::info!(proposal = id, creator = %caller, "proposal created");
        Ok(proposal)
    }

    /// Verify membership and spawn a new airdrop.
    pub fn create_airdrop(
        &mut self,
        registry: &MembershipRegistry,
        ledger: &mut ReputationLedger,
        caller: &MemberAddress,
        proof: &[Hash256],
        claim_amount: u128,
    ) -> Result<Airdrop, GovernanceError> {
        if !registry.verify(proof, caller) {
            return Err(GovernanceError::NotMember);
        }
        let id = self.take_id();
        let cap = ledger.authorize(id);
        tracing::info!(airdrop = id, creator = %caller, claim_amount, "airdrop created");
        Ok(Airdrop::new(id, claim_amount, cap))
    }

    fn take_id(&mut self) -> ProposalId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }
}

impl Default for ProposalFactory {
    fn default() -> Self {
        Self::new()
    }
}
