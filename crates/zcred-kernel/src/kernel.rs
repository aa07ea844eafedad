//! Kernel witnesses, public outputs, and the two evaluation variants.

use pasta_curves::pallas;
use reddsa::{Signature, VerificationKey, VerificationKeyBytes};
use zcred_core::base::Amount;
use zcred_core::schema::witness::{RefundWitnessFile, TicketWitnessFile};

use crate::commitments::{identity_commitment, rate_commitment};
use crate::error::{KernelError, WitnessDecodeError};
use crate::membership::verify_membership;
use crate::refund::{RefundOutputs, RefundWitness, apply_refund_transition};
use crate::share::{line_coefficient, nullifier, share_point};
use crate::solvency::{check_solvency, check_ticket_range, ticket_index_to_u32};

/// Witness for the plain credit-spend variant.
///
/// The identity secret and the sibling path are private; the remaining
/// fields are public inputs consumed or echoed by the verifier.
#[derive(Clone, Debug)]
pub struct TicketWitness {
    /// Private identity secret binding the participant to a leaf.
    pub identity_secret: pallas::Base,
    /// Zero-based ticket index for this call.
    pub ticket_index: pallas::Base,
    /// Caller-chosen blinding value (the share evaluation point).
    pub x: pallas::Base,
    /// Rate-limiting scope, disambiguating independent contexts that share
    /// one identity.
    pub scope: pallas::Base,
    /// Per-identity message limit.
    pub user_message_limit: u32,
    /// Deposited balance backing this identity's calls.
    pub deposit: Amount,
    /// Price of one call in the configured class.
    pub class_price: Amount,
    /// Published membership root.
    pub merkle_root: pallas::Base,
    /// Ordered sibling path, leaf to root.
    pub merkle_proof: Vec<pallas::Base>,
}

/// Public outputs of the plain variant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TicketOutputs {
    /// Nullifier for off-circuit duplicate-use detection.
    pub nullifier: pallas::Base,
    /// Echoed blinding value.
    pub x: pallas::Base,
    /// Share point on the identity's sharing line.
    pub y: pallas::Base,
    /// Echoed membership root.
    pub merkle_root: pallas::Base,
}

/// Evaluate the plain variant: membership, bounds, solvency, then the
/// share/nullifier derivation.
///
/// A single linear pass with no branching state machine; every assertion is
/// unconditional and nothing is returned until all of them hold.
///
/// # Errors
/// Any failed assertion rejects the whole witness; see [`KernelError`].
pub fn evaluate(witness: &TicketWitness) -> Result<TicketOutputs, KernelError> {
    let leaf = rate_commitment(
        identity_commitment(witness.identity_secret),
        witness.user_message_limit,
    );
    verify_membership(leaf, &witness.merkle_proof, witness.merkle_root)?;

    let index = ticket_index_to_u32(witness.ticket_index)?;
    check_ticket_range(index, witness.user_message_limit)?;
    check_solvency(index, &witness.class_price, &witness.deposit)?;

    let coefficient = line_coefficient(witness.identity_secret, witness.scope, witness.ticket_index);
    let y = share_point(witness.identity_secret, coefficient, witness.x);

    Ok(TicketOutputs {
        nullifier: nullifier(coefficient),
        x: witness.x,
        y,
        merkle_root: witness.merkle_root,
    })
}

/// Evaluate the extended variant: the plain checks plus the signed
/// refund-accounting transition.
///
/// # Errors
/// Any failed assertion rejects the whole witness; see [`KernelError`].
pub fn evaluate_with_refund(
    witness: &TicketWitness,
    refund: &RefundWitness,
) -> Result<(TicketOutputs, RefundOutputs), KernelError> {
    let outputs = evaluate(witness)?;
    let refund_outputs = apply_refund_transition(refund, witness.ticket_index, witness.scope)?;
    Ok((outputs, refund_outputs))
}

impl From<&TicketWitnessFile> for TicketWitness {
    fn from(file: &TicketWitnessFile) -> Self {
        Self {
            identity_secret: file.identity_secret,
            ticket_index: file.ticket_index,
            x: file.x,
            scope: file.scope,
            user_message_limit: file.user_message_limit,
            deposit: Amount::new(file.deposit_low, file.deposit_high),
            class_price: Amount::new(file.class_price_low, file.class_price_high),
            merkle_root: file.merkle_root,
            merkle_proof: file.merkle_proof.clone(),
        }
    }
}

impl TryFrom<&RefundWitnessFile> for RefundWitness {
    type Error = WitnessDecodeError;

    fn try_from(file: &RefundWitnessFile) -> Result<Self, Self::Error> {
        let server_key = VerificationKey::try_from(VerificationKeyBytes::from(file.server_pubkey))
            .map_err(|_| WitnessDecodeError::MalformedServerKey)?;
        Ok(Self {
            commitment_prev: file.refund_commitment_prev,
            amount: file.refund_amount,
            commitment_next_expected: file.refund_commitment_next_expected,
            remask_nonce: file.remask_nonce,
            server_key,
            signature: Signature::from(file.signature),
        })
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "unit-test")]

    use rand::rngs::OsRng;
    use reddsa::SigningKey;
    use reddsa::orchard::SpendAuth;

    use super::*;

    #[test]
    fn ticket_witness_file_converts() {
        let file = TicketWitnessFile {
            identity_secret: pallas::Base::from(42_u64),
            ticket_index: pallas::Base::from(3_u64),
            x: pallas::Base::from(12345_u64),
            scope: pallas::Base::from(32_u64),
            user_message_limit: 32,
            deposit_low: 1000,
            deposit_high: 0,
            class_price_low: 100,
            class_price_high: 0,
            merkle_root: pallas::Base::from(7_u64),
            merkle_proof: vec![pallas::Base::from(1_u64)],
        };

        let witness = TicketWitness::from(&file);
        assert_eq!(witness.deposit, Amount::from_u128(1000));
        assert_eq!(witness.class_price, Amount::from_u128(100));
        assert_eq!(witness.merkle_proof, file.merkle_proof);
    }

    #[test]
    fn refund_witness_file_requires_a_valid_server_key() {
        let signing_key: SigningKey<SpendAuth> = SigningKey::new(OsRng);
        let server_key = VerificationKey::from(&signing_key);

        let mut file = RefundWitnessFile {
            refund_commitment_prev: pallas::Base::from(0x7b_u64),
            refund_amount: pallas::Base::from(1_u64),
            refund_commitment_next_expected: pallas::Base::from(2_u64),
            remask_nonce: pallas::Base::from(9_u64),
            server_pubkey: VerificationKeyBytes::from(server_key).into(),
            signature: [0; 64],
        };
        assert!(RefundWitness::try_from(&file).is_ok());

        file.server_pubkey = [0xff; 32];
        assert_eq!(
            RefundWitness::try_from(&file).map(|_| ()),
            Err(WitnessDecodeError::MalformedServerKey)
        );
    }
}
