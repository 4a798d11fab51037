//! The balance store and its mint capability.

use crate::error::ReputationError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use veil_types::{MemberAddress, ProposalId};

/// Unforgeable mint authorization held by a spawned proposal or airdrop.
///
/// Deliberately not `Clone` and with private fields: the only way to obtain
/// one is [`ReputationLedger::authorize`], and the ledger checks the nonce
/// against its registered-handle table on every mint. This is the in-process
/// equivalent of a ledger that only accepts mints from contract addresses it
/// itself deployed.
#[derive(Debug, Serialize, Deserialize)]
pub struct MintCapability {
    proposal_id: ProposalId,
    nonce: u64,
}

impl MintCapability {
    /// The proposal this capability was issued for.
    pub fn proposal_id(&self) -> ProposalId {
        self.proposal_id
    }
}

/// Balance-per-address store with capability-gated minting.
#[derive(Debug, Serialize, Deserialize)]
pub struct ReputationLedger {
    name: String,
    symbol: String,
    decimals: u8,
    balances: HashMap<MemberAddress, u128>,
    /// proposal id -> expected capability nonce.
    registered: HashMap<ProposalId, u64>,
    next_nonce: u64,
}

impl ReputationLedger {
    pub fn new() -> Self {
        Self {
            name: "Gov Token".to_string(),
            symbol: "GT".to_string(),
            decimals: 1,
            balances: HashMap::new(),
            registered: HashMap::new(),
            next_nonce: 1,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn decimals(&self) -> u8 {
        self.decimals
    }

    /// Current balance of an address. Pure read; unknown addresses are 0.
    pub fn balance_of(&self, address: &MemberAddress) -> u128 {
        self.balances.get(address).copied().unwrap_or(0)
    }

    /// Effective voting weight of a member: `1 + balance`.
    ///
    /// Callers must read this *before* minting the reveal's own incentive,
    /// so reputation earned by a reveal never inflates that same vote.
    pub fn voting_weight(&self, address: &MemberAddress) -> u128 {
        1 + self.balance_of(address)
    }

    /// Register a spawned proposal and issue its mint capability.
    ///
    /// Re-registering a proposal id rotates the nonce, so a previously
    /// issued capability for the same id stops working.
    pub fn authorize(&mut self, proposal_id: ProposalId) -> MintCapability {
        let nonce = self.next_nonce;
        self.next_nonce += 1;
        self.registered.insert(proposal_id, nonce);
        MintCapability { proposal_id, nonce }
    }

    /// Increase `to`'s balance by `amount`. Capability holders only.
    pub fn mint(
        &mut self,
        cap: &MintCapability,
        to: &MemberAddress,
        amount: u128,
    ) -> Result<(), ReputationError> {
        match self.registered.get(&cap.proposal_id) {
            Some(nonce) if *nonce == cap.nonce => {}
            _ => return Err(ReputationError::Unauthorized(cap.proposal_id)),
        }
        let balance = self.balances.entry(to.clone()).or_insert(0);
        *balance = balance
            .checked_add(amount)
            .ok_or(ReputationError::Overflow)?;
        tracing::debug!(proposal = cap.proposal_id, to = %to, amount, "reputation minted");
        Ok(())
    }
}

impl Default for ReputationLedger {
    fn default() -> Self {
        Self::new()
    }
}
