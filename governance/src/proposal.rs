//! The proposal state machine.
//!
//! Lifecycle: `CommitOpen → RevealOpen → AwaitingDecryption → Decided →
//! Executed`, with phase boundaries derived from the creation-time
//! timestamps. Windows are half-open: commits in `[created_at, commit_end)`,
//! reveals in `[commit_end, reveal_end)`.
//!
//! Guard order within each operation is part of the contract: phase first,
//! then membership/ownership, then duplication, then integrity. Callers
//! depend on receiving the phase error when both a phase and a membership
//! violation apply.

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use veil_crypto::{commitment_hash, Ciphertext, EncryptionEngine};
use veil_membership::MembershipRegistry;
use veil_reputation::{MintCapability, ReputationLedger};
use veil_types::{Hash256, MemberAddress, ProposalId, Timestamp};

use crate::env::ExecutionEnv;
use crate::error::GovernanceError;
use crate::oracle::{DecryptionOracle, RequestId};

/// Reputation minted to a voter for a successful reveal.
pub const REVEAL_REWARD: u128 = 1;
/// Reputation minted to whoever drives a passed proposal through `execute`.
pub const EXECUTOR_BONUS: u128 = 1;

/// Immutable creation parameters for a proposal.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ProposalParams {
    pub description: String,
    /// Recipient of the value transfer on execution.
    pub target: MemberAddress,
    /// Amount transferred to `target` on execution.
    pub value: u128,
    /// Opaque calldata forwarded to the target with the transfer.
    pub payload: Vec<u8>,
    /// Total voting window in seconds; split evenly into commit and reveal.
    pub voting_period: u64,
}

/// Observable lifecycle phase, derived from state and the current time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProposalPhase {
    /// Members may commit hashed ballots.
    CommitOpen,
    /// Members may reveal committed ballots.
    RevealOpen,
    /// Windows closed; tally still encrypted.
    AwaitingDecryption,
    /// Oracle delivered the plaintext totals.
    Decided { passed: bool },
    /// Value transferred, executor bonus minted. Terminal.
    Executed,
}

/// A single proposal: commit/reveal bookkeeping, the encrypted tally, and
/// the execution parameters. Never destroyed; terminal state is retained
/// for audit.
#[derive(Debug, Serialize, Deserialize)]
pub struct Proposal {
    id: ProposalId,
    description: String,
    target: MemberAddress,
    value: u128,
    payload: Vec<u8>,
    created_at: Timestamp,
    commit_end: Timestamp,
    reveal_end: Timestamp,
    /// One commitment per member, write-once.
    committed: HashMap<MemberAddress, Hash256>,
    /// Members who have revealed, write-once.
    revealed: HashSet<MemberAddress>,
    encrypted_yes: Ciphertext,
    encrypted_no: Ciphertext,
    pending_request: Option<RequestId>,
    decrypted_yes: Option<u128>,
    decrypted_no: Option<u128>,
    decrypted: bool,
    executed: bool,
    mint_cap: MintCapability,
}

impl Proposal {
    /// Construct a proposal. Called by the factory, which has already
    /// verified the creator's membership and registered `mint_cap`.
    pub(crate) fn new(
        id: ProposalId,
        params: ProposalParams,
        mint_cap: MintCapability,
        enc: &dyn EncryptionEngine,
        now: Timestamp,
    ) -> Result<Self, GovernanceError> {
        if params.voting_period < 2 {
            return Err(GovernanceError::InvalidVotingPeriod(params.voting_period));
        }
        let commit_end = now.offset(params.voting_period / 2);
        let reveal_end = now.offset(params.voting_period);
        Ok(Self {
            id,
            description: params.description,
            target: params.target,
            value: params.value,
            payload: params.payload,
            created_at: now,
            commit_end,
            reveal_end,
            committed: HashMap::new(),
            revealed: HashSet::new(),
            encrypted_yes: enc.zero(),
            encrypted_no: enc.zero(),
            pending_request: None,
            decrypted_yes: None,
            decrypted_no: None,
            decrypted: false,
            executed: false,
            mint_cap,
        })
    }

    pub fn id(&self) -> ProposalId {
        self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn target(&self) -> &MemberAddress {
        &self.target
    }

    pub fn value(&self) -> u128 {
        self.value
    }

    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn commit_end(&self) -> Timestamp {
        self.commit_end
    }

    pub fn reveal_end(&self) -> Timestamp {
        self.reveal_end
    }

    pub fn has_committed(&self, address: &MemberAddress) -> bool {
        self.committed.contains_key(address)
    }

    pub fn has_revealed(&self, address: &MemberAddress) -> bool {
        self.revealed.contains(address)
    }

    pub fn decrypted(&self) -> bool {
        self.decrypted
    }

    pub fn decrypted_yes(&self) -> Option<u128> {
        self.decrypted_yes
    }

    pub fn decrypted_no(&self) -> Option<u128> {
        self.decrypted_no
    }

    pub fn executed(&self) -> bool {
        self.executed
    }

    /// Whether the voting windows are still open.
    pub fn is_active(&self, now: Timestamp) -> bool {
        now < self.reveal_end
    }

    /// Current lifecycle phase.
    pub fn phase(&self, now: Timestamp) -> ProposalPhase {
        if self.executed {
            ProposalPhase::Executed
        } else if self.decrypted {
            ProposalPhase::Decided {
                passed: self.passed(),
            }
        } else if now < self.commit_end {
            ProposalPhase::CommitOpen
        } else if now < self.reveal_end {
            ProposalPhase::RevealOpen
        } else {
            ProposalPhase::AwaitingDecryption
        }
    }

    fn passed(&self) -> bool {
        match (self.decrypted_yes, self.decrypted_no) {
            (Some(yes), Some(no)) => yes > no,
            _ => false,
        }
    }

    /// Store a member's vote commitment: `keccak256(handle || salt)`.
    ///
    /// Valid only while `now < commit_end`. The commitment hides both the
    /// vote and the ciphertext handle until reveal, so late committers
    /// learn nothing from earlier ones.
    pub fn commit_vote(
        &mut self,
        registry: &MembershipRegistry,
        caller: &MemberAddress,
        proof: &[Hash256],
        commitment: Hash256,
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        if !self.is_active(now) {
            return Err(GovernanceError::ProposalNotActive);
        }
        if now >= self.commit_end {
            return Err(GovernanceError::CommitClosed);
        }
        if !registry.verify(proof, caller) {
            return Err(GovernanceError::NotMember);
        }
        if self.committed.contains_key(caller) {
            return Err(GovernanceError::AlreadyCommitted);
        }
        self.committed.insert(caller.clone(), commitment);
        tracing::info!(proposal = self.id, voter = %caller, "vote committed");
        Ok(())
    }

    /// Reveal a committed ballot and fold it into the encrypted tally.
    ///
    /// Valid only while `commit_end <= now < reveal_end`. The weighted
    /// ballot is split homomorphically into yes/no parts; the engine never
    /// sees which side it lands on. Voting weight is read *before* the
    /// reveal reward is minted, so a reveal cannot inflate its own vote.
    pub fn reveal_vote(
        &mut self,
        enc: &dyn EncryptionEngine,
        ledger: &mut ReputationLedger,
        caller: &MemberAddress,
        handle: Ciphertext,
        salt: Hash256,
        input_proof: &[u8],
        now: Timestamp,
    ) -> Result<(), GovernanceError> {
        if now < self.commit_end || now >= self.reveal_end {
            return Err(GovernanceError::ProposalNotActive);
        }
        let commitment = *self
            .committed
            .get(caller)
            .ok_or(GovernanceError::NotCommitted)?;
        if self.revealed.contains(caller) {
            return Err(GovernanceError::AlreadyRevealed);
        }
        if commitment_hash(&handle, &salt) != commitment {
            return Err(GovernanceError::InvalidReveal);
        }
        if !enc.verify_input(&handle, input_proof, self.id, caller) {
            return Err(GovernanceError::InvalidInputProof);
        }

        let weight = ledger.voting_weight(caller);
        let (yes_part, no_part) = enc.weighted_split(&handle, weight);
        self.encrypted_yes = enc.add(&self.encrypted_yes, &yes_part);
        self.encrypted_no = enc.add(&self.encrypted_no, &no_part);
        self.revealed.insert(caller.clone());
        ledger.mint(&self.mint_cap, caller, REVEAL_REWARD)?;
        tracing::info!(proposal = self.id, voter = %caller, weight, "vote revealed");
        Ok(())
    }

    /// Forward the encrypted tallies to the decryption oracle.
    ///
    /// Callable by anyone once `now >= reveal_end`. Idempotent while a
    /// request is outstanding: the outstanding id is returned and no second
    /// request is issued.
    pub fn request_decryption(
        &mut self,
        oracle: &mut dyn DecryptionOracle,
        now: Timestamp,
    ) -> Result<RequestId, GovernanceError> {
        if self.is_active(now) {
            return Err(GovernanceError::ProposalNotActive);
        }
        if self.decrypted {
            return Err(GovernanceError::AlreadyDecrypted);
        }
        if let Some(id) = self.pending_request {
            return Ok(id);
        }
        let id = oracle
            .request_decryption(&[self.encrypted_yes.clone(), self.encrypted_no.clone()]);
        self.pending_request = Some(id);
        tracing::info!(proposal = self.id, request = id, "tally decryption requested");
        Ok(id)
    }

    /// Oracle callback delivering the plaintext totals.
    ///
    /// Accepted only when `request_id` matches this proposal's single
    /// outstanding request; anything else is a replay or a cross-proposal
    /// delivery and is rejected with state untouched.
    pub fn decryption_fulfilled(
        &mut self,
        request_id: RequestId,
        yes: u128,
        no: u128,
    ) -> Result<(), GovernanceError> {
        if self.decrypted {
            return Err(GovernanceError::AlreadyDecrypted);
        }
        match self.pending_request {
            Some(id) if id == request_id => {}
            _ => {
                tracing::warn!(
                    proposal = self.id,
                    request = request_id,
                    "rejected decryption callback with no matching request"
                );
                return Err(GovernanceError::UnknownRequest(request_id));
            }
        }
        self.decrypted_yes = Some(yes);
        self.decrypted_no = Some(no);
        self.decrypted = true;
        self.pending_request = None;
        tracing::info!(proposal = self.id, yes, no, "tally decrypted");
        Ok(())
    }

    /// Execute a passed proposal: transfer `value` to the target, mint the
    /// executor bonus. Callable by anyone, exactly once.
    ///
    /// An undecrypted proposal can never pass (the totals are unknown), so
    /// oracle non-response leaves execution permanently blocked rather than
    /// wrong.
    pub fn execute(
        &mut self,
        env: &mut dyn ExecutionEnv,
        ledger: &mut ReputationLedger,
        caller: &MemberAddress,
    ) -> Result<(), GovernanceError> {
        if self.executed {
            return Err(GovernanceError::AlreadyExecuted);
        }
        if !self.decrypted || !self.passed() {
            return Err(GovernanceError::ProposalNotPassed);
        }
        let available = env.available_balance();
        if available < self.value {
            return Err(GovernanceError::InsufficientFunds {
                needed: self.value,
                available,
            });
        }
        // The bonus mint must not be able to fail after the transfer has
        // gone through, or all-or-nothing breaks.
        if ledger.balance_of(caller).checked_add(EXECUTOR_BONUS).is_none() {
            return Err(GovernanceError::Reputation(
                veil_reputation::ReputationError::Overflow,
            ));
        }
        env.transfer_value(&self.target, self.value, &self.payload)?;
        self.executed = true;
        ledger.mint(&self.mint_cap, caller, EXECUTOR_BONUS)?;
        tracing::info!(
            proposal = self.id,
            target = %self.target,
            value = self.value,
            executor = %caller,
            "proposal executed"
        );
        Ok(())
    }
}
