use std::sync::Arc;

use proptest::prelude::*;

use veil_crypto::hash::{address_leaf, keccak256};
use veil_crypto::merkle::MerkleTree;
use veil_crypto::commitment_hash;
use veil_governance::{GovernanceError, Proposal, ProposalFactory, ProposalParams};
use veil_membership::MembershipRegistry;
use veil_nullables::NullEncryption;
use veil_reputation::ReputationLedger;
use veil_types::{Hash256, MemberAddress, Timestamp};

const PERIOD: u64 = 1_000;

fn addr(n: u8) -> MemberAddress {
    MemberAddress::new(format!("0x{:040x}", n))
}

struct Setup {
    registry: MembershipRegistry,
    tree: MerkleTree,
    ledger: ReputationLedger,
    enc: Arc<NullEncryption>,
    proposal: Proposal,
}

/// Three members, proposal created at t=0 with commit_end=500, reveal_end=1000.
fn setup() -> Setup {
    let members: Vec<MemberAddress> = (1..=3).map(addr).collect();
    let tree = MerkleTree::from_leaves(members.iter().map(address_leaf).collect());
    let registry = MembershipRegistry::new(tree.root(), addr(1));
    let mut ledger = ReputationLedger::new();
    let enc = Arc::new(NullEncryption::new());
    let mut factory = ProposalFactory::new();
    let proof = tree.proof_for(address_leaf(&addr(1))).unwrap();
    let proposal = factory
        .create_proposal(
            &registry,
            &mut ledger,
            enc.as_ref(),
            &addr(1),
            &proof,
            ProposalParams {
                description: "p".into(),
                target: addr(9),
                value: 0,
                payload: Vec::new(),
                voting_period: PERIOD,
            },
            Timestamp::EPOCH,
        )
        .unwrap();
    Setup {
        registry,
        tree,
        ledger,
        enc,
        proposal,
    }
}

proptest! {
    /// A member's commit succeeds iff `now < commit_end`, for any time.
    #[test]
    fn commit_phase_monotonic(now in 0u64..2_000) {
        let mut s = setup();
        let proof = s.tree.proof_for(address_leaf(&addr(2))).unwrap();
        let result = s.proposal.commit_vote(
            &s.registry,
            &addr(2),
            &proof,
            Hash256::new(keccak256(b"commitment")),
            Timestamp::new(now),
        );
        if now < PERIOD / 2 {
            prop_assert!(result.is_ok());
        } else if now < PERIOD {
            prop_assert_eq!(result, Err(GovernanceError::CommitClosed));
        } else {
            prop_assert_eq!(result, Err(GovernanceError::ProposalNotActive));
        }
    }

    /// Membership validity never overrides the phase guard.
    #[test]
    fn phase_error_wins_for_non_members(now in 500u64..2_000) {
        let mut s = setup();
        let result = s.proposal.commit_vote(
            &s.registry,
            &addr(7),
            &[],
            Hash256::new(keccak256(b"commitment")),
            Timestamp::new(now),
        );
        let expected = if now < PERIOD {
            GovernanceError::CommitClosed
        } else {
            GovernanceError::ProposalNotActive
        };
        prop_assert_eq!(result, Err(expected));
    }

    /// A second commit always fails `AlreadyCommitted` while the window is
    /// open, regardless of timing or commitment content.
    #[test]
    fn no_double_commit(t1 in 0u64..499, t2 in 0u64..499, seed in any::<[u8; 32]>()) {
        let mut s = setup();
        let (t1, t2) = (t1.min(t2), t1.max(t2));
        let proof = s.tree.proof_for(address_leaf(&addr(2))).unwrap();
        s.proposal
            .commit_vote(&s.registry, &addr(2), &proof, Hash256::new(seed), Timestamp::new(t1))
            .unwrap();
        let second = s.proposal.commit_vote(
            &s.registry,
            &addr(2),
            &proof,
            Hash256::new(keccak256(&seed)),
            Timestamp::new(t2),
        );
        prop_assert_eq!(second, Err(GovernanceError::AlreadyCommitted));
    }

    /// Reveal integrity: only the committed (handle, salt) pair reveals;
    /// any mismatched salt fails `InvalidReveal` and mints nothing.
    #[test]
    fn reveal_requires_exact_preimage(salt in any::<[u8; 32]>(), wrong in any::<[u8; 32]>()) {
        prop_assume!(salt != wrong);
        let mut s = setup();
        let salt = Hash256::new(salt);
        let (handle, input_proof) = s.enc.encrypt_input(s.proposal.id(), &addr(2), 1);
        let proof = s.tree.proof_for(address_leaf(&addr(2))).unwrap();
        s.proposal
            .commit_vote(
                &s.registry,
                &addr(2),
                &proof,
                commitment_hash(&handle, &salt),
                Timestamp::new(10),
            )
            .unwrap();

        let bad = s.proposal.reveal_vote(
            s.enc.as_ref(),
            &mut s.ledger,
            &addr(2),
            handle.clone(),
            Hash256::new(wrong),
            &input_proof,
            Timestamp::new(600),
        );
        prop_assert_eq!(bad, Err(GovernanceError::InvalidReveal));
        prop_assert_eq!(s.ledger.balance_of(&addr(2)), 0);

        let good = s.proposal.reveal_vote(
            s.enc.as_ref(),
            &mut s.ledger,
            &addr(2),
            handle,
            salt,
            &input_proof,
            Timestamp::new(600),
        );
        prop_assert!(good.is_ok());
        prop_assert_eq!(s.ledger.balance_of(&addr(2)), 1);
    }
}
