//! End-to-end kernel evaluation tests for both variants.

#![allow(
    clippy::unwrap_used,
    clippy::arithmetic_side_effects,
    reason = "integration test"
)]

use ff::Field as _;
use pasta_curves::pallas;
use rand::rngs::OsRng;
use rand_core::SeedableRng as _;
use rand_xorshift::XorShiftRng;
use reddsa::SigningKey;
use reddsa::orchard::SpendAuth;
use zcred_core::base::Amount;
use zcred_kernel::commitments::{commit, hash1, hash3, identity_commitment, rate_commitment};
use zcred_kernel::membership::node_hash;
use zcred_kernel::refund::refund_ticket_hash;
use zcred_kernel::{
    KernelError, RefundWitness, TicketWitness, evaluate, evaluate_with_refund,
};

/// The shared concrete scenario: an identity whose rate commitment is itself
/// the published root (empty sibling path).
fn base_witness() -> TicketWitness {
    TicketWitness {
        identity_secret: pallas::Base::from(42_u64),
        ticket_index: pallas::Base::from(3_u64),
        x: pallas::Base::from(12345_u64),
        scope: pallas::Base::from(32_u64),
        user_message_limit: 32,
        deposit: Amount::from_u128(1000),
        class_price: Amount::from_u128(100),
        merkle_root: rate_commitment(identity_commitment(pallas::Base::from(42_u64)), 32),
        merkle_proof: Vec::new(),
    }
}

fn signed_refund(
    witness: &TicketWitness,
    commitment_prev: pallas::Base,
    amount: pallas::Base,
) -> RefundWitness {
    let signing_key: SigningKey<SpendAuth> = SigningKey::new(OsRng);
    let ticket_hash =
        refund_ticket_hash(commitment_prev, amount, witness.ticket_index, witness.scope);
    let message = ticket_hash_repr(ticket_hash);
    let signature = signing_key.sign(OsRng, &message);
    RefundWitness {
        commitment_prev,
        amount,
        commitment_next_expected: commit(commitment_prev, amount),
        remask_nonce: pallas::Base::from(9_u64),
        server_key: (&signing_key).into(),
        signature,
    }
}

fn ticket_hash_repr(hash: pallas::Base) -> [u8; 32] {
    use ff::PrimeField as _;
    hash.to_repr()
}

#[test]
fn concrete_scenario_succeeds_with_expected_outputs() {
    let witness = base_witness();
    let outputs = evaluate(&witness).unwrap();

    let a1 = hash3(
        pallas::Base::from(42_u64),
        pallas::Base::from(32_u64),
        pallas::Base::from(3_u64),
    );
    assert_eq!(
        outputs.y,
        pallas::Base::from(42_u64) + a1 * pallas::Base::from(12345_u64)
    );
    assert_eq!(outputs.nullifier, hash1(a1));
    assert_eq!(outputs.x, pallas::Base::from(12345_u64));
    assert_eq!(outputs.merkle_root, witness.merkle_root);
}

#[test]
fn share_relation_holds_for_random_witnesses() {
    let mut rng = XorShiftRng::from_seed([0x5a; 16]);
    for _ in 0..8 {
        let mut witness = base_witness();
        witness.identity_secret = pallas::Base::random(&mut rng);
        witness.x = pallas::Base::random(&mut rng);
        witness.scope = pallas::Base::random(&mut rng);
        witness.merkle_root =
            rate_commitment(identity_commitment(witness.identity_secret), 32);

        let outputs = evaluate(&witness).unwrap();
        let a1 = hash3(witness.identity_secret, witness.scope, witness.ticket_index);
        assert_eq!(outputs.y - witness.identity_secret, a1 * witness.x);
        assert_eq!(outputs.nullifier, hash1(a1));
    }
}

#[test]
fn nullifier_is_stable_across_blinding_values() {
    let mut first = base_witness();
    first.x = pallas::Base::from(111_u64);
    let mut second = base_witness();
    second.x = pallas::Base::from(222_u64);

    let out_first = evaluate(&first).unwrap();
    let out_second = evaluate(&second).unwrap();
    assert_eq!(out_first.nullifier, out_second.nullifier);
    assert_ne!(out_first.y, out_second.y);
}

#[test]
fn membership_gates_non_members() {
    let mut witness = base_witness();
    witness.merkle_root = pallas::Base::from(1_u64);
    assert_eq!(evaluate(&witness), Err(KernelError::InvalidMerkleProof));

    // A one-level tree built with the canonical pair hash verifies.
    let mut with_path = base_witness();
    let sibling = pallas::Base::from(777_u64);
    with_path.merkle_proof = vec![sibling];
    with_path.merkle_root = node_hash(
        rate_commitment(identity_commitment(with_path.identity_secret), 32),
        sibling,
    );
    assert!(evaluate(&with_path).is_ok());
}

#[test]
fn ticket_index_range_boundaries() {
    let mut last_valid = base_witness();
    last_valid.ticket_index = pallas::Base::from(31_u64);
    // Keep the deposit solvent for index 31: (31 + 1) * 100 = 3200.
    last_valid.deposit = Amount::from_u128(3200);
    assert!(evaluate(&last_valid).is_ok());

    let mut exhausted = base_witness();
    exhausted.ticket_index = pallas::Base::from(32_u64);
    exhausted.deposit = Amount::from_u128(10_000);
    assert_eq!(
        evaluate(&exhausted),
        Err(KernelError::TicketIndexOutOfRange {
            index: 32,
            limit: 32
        })
    );
}

#[test]
fn oversized_ticket_index_fails_conversion() {
    let mut witness = base_witness();
    witness.ticket_index = pallas::Base::from(1_u64 << 40);
    assert_eq!(
        evaluate(&witness),
        Err(KernelError::TicketIndexConversionFailed)
    );
}

#[test]
fn solvency_floor_boundaries() {
    let mut exact = base_witness();
    exact.deposit = Amount::from_u128(400);
    assert!(evaluate(&exact).is_ok());

    let mut short = base_witness();
    short.deposit = Amount::from_u128(399);
    assert_eq!(evaluate(&short), Err(KernelError::InsufficientDeposit));
}

#[test]
fn refund_transition_succeeds_and_remasks() {
    let witness = base_witness();
    let refund = signed_refund(&witness, pallas::Base::from(0x7b_u64), pallas::Base::from(1_u64));

    let (outputs, refund_outputs) = evaluate_with_refund(&witness, &refund).unwrap();
    assert_eq!(outputs, evaluate(&witness).unwrap());
    assert_eq!(
        refund_outputs.updated,
        commit(pallas::Base::from(0x7b_u64), pallas::Base::from(1_u64))
    );
    assert_eq!(
        refund_outputs.remasked,
        commit(refund_outputs.updated, pallas::Base::from(9_u64))
    );
    assert_ne!(refund_outputs.remasked, refund_outputs.updated);
}

#[test]
fn reused_signature_fails_for_any_flipped_tuple_field() {
    let witness = base_witness();
    let prev = pallas::Base::from(0x7b_u64);
    let amount = pallas::Base::from(1_u64);
    let refund = signed_refund(&witness, prev, amount);

    // Flip the prior commitment (expected value kept consistent so only the
    // signature can fail).
    let mut bad_prev = refund.clone();
    bad_prev.commitment_prev = pallas::Base::from(0x7c_u64);
    bad_prev.commitment_next_expected = commit(bad_prev.commitment_prev, amount);
    assert_eq!(
        evaluate_with_refund(&witness, &bad_prev),
        Err(KernelError::InvalidRefundSignature)
    );

    // Flip the amount.
    let mut bad_amount = refund.clone();
    bad_amount.amount = pallas::Base::from(2_u64);
    bad_amount.commitment_next_expected = commit(prev, bad_amount.amount);
    assert_eq!(
        evaluate_with_refund(&witness, &bad_amount),
        Err(KernelError::InvalidRefundSignature)
    );

    // Flip the ticket index (and keep it solvent/in range).
    let mut bad_index = base_witness();
    bad_index.ticket_index = pallas::Base::from(4_u64);
    bad_index.deposit = Amount::from_u128(1000);
    assert_eq!(
        evaluate_with_refund(&bad_index, &refund),
        Err(KernelError::InvalidRefundSignature)
    );

    // Flip the scope.
    let mut bad_scope = base_witness();
    bad_scope.scope = pallas::Base::from(33_u64);
    assert_eq!(
        evaluate_with_refund(&bad_scope, &refund),
        Err(KernelError::InvalidRefundSignature)
    );
}

#[test]
fn stale_expected_commitment_is_a_state_mismatch() {
    let witness = base_witness();
    let mut refund = signed_refund(&witness, pallas::Base::from(0x7b_u64), pallas::Base::from(1_u64));
    refund.commitment_next_expected = pallas::Base::from(1234_u64);
    assert_eq!(
        evaluate_with_refund(&witness, &refund),
        Err(KernelError::RefundStateMismatch)
    );
}

#[test]
fn rejecting_witness_never_depends_on_refund_validity() {
    // A witness that fails the plain checks rejects before the refund
    // extension is consulted at all.
    let mut witness = base_witness();
    witness.deposit = Amount::ZERO;
    let refund = signed_refund(&witness, pallas::Base::from(0x7b_u64), pallas::Base::from(1_u64));
    assert_eq!(
        evaluate_with_refund(&witness, &refund),
        Err(KernelError::InsufficientDeposit)
    );
}
