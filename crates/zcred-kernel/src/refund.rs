//! The signed, hidden refund-accounting transition (extended variant).
//!
//! A server authorizes one refund step by signing the canonical tuple hash of
//! `(prior commitment, amount, ticket index, scope)`. The kernel advances a
//! running commitment with the authorized amount, checks the result against
//! the caller's pre-agreed expectation, and re-randomizes it so repeated
//! submissions are unlinkable while the un-remasked value stays auditable.

use ff::PrimeField as _;
use pasta_curves::pallas;
use reddsa::orchard::SpendAuth;
use reddsa::{Signature, VerificationKey};

use crate::commitments::{commit, hash4};
use crate::error::KernelError;

/// The canonical signed tuple hash authorizing one refund step.
///
/// The 4-ary argument order is the signed message domain; it must not change
/// independently of a protocol version bump, or previously issued signatures
/// silently stop verifying.
#[must_use]
pub fn refund_ticket_hash(
    commitment_prev: pallas::Base,
    amount: pallas::Base,
    ticket_index: pallas::Base,
    scope: pallas::Base,
) -> pallas::Base {
    hash4(commitment_prev, amount, ticket_index, scope)
}

/// Refund-extension witness for the extended kernel variant.
#[derive(Clone, Debug)]
pub struct RefundWitness {
    /// Previous refund commitment in the chain.
    pub commitment_prev: pallas::Base,
    /// Refund amount authorized by the server.
    pub amount: pallas::Base,
    /// Caller-supplied expected updated commitment.
    pub commitment_next_expected: pallas::Base,
    /// Remasking nonce for the published commitment.
    pub remask_nonce: pallas::Base,
    /// Server verification key.
    pub server_key: VerificationKey<SpendAuth>,
    /// Server signature over the refund ticket hash.
    pub signature: Signature<SpendAuth>,
}

/// Public outputs of the refund transition.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RefundOutputs {
    /// Updated running commitment, for auditing the chain's progression.
    pub updated: pallas::Base,
    /// Remasked commitment, published as the next transition's
    /// `commitment_prev`.
    pub remasked: pallas::Base,
}

/// Verify the server authorization and advance the refund commitment.
///
/// # Errors
/// - [`KernelError::InvalidRefundSignature`] if the signature does not verify
///   over the canonical tuple hash. The tuple is fully bound, so changing
///   any one field while reusing an old signature fails here.
/// - [`KernelError::RefundStateMismatch`] if the recomputed updated
///   commitment disagrees with `commitment_next_expected`.
pub fn apply_refund_transition(
    refund: &RefundWitness,
    ticket_index: pallas::Base,
    scope: pallas::Base,
) -> Result<RefundOutputs, KernelError> {
    let ticket_hash = refund_ticket_hash(refund.commitment_prev, refund.amount, ticket_index, scope);
    refund
        .server_key
        .verify(&ticket_hash.to_repr(), &refund.signature)
        .map_err(|_| KernelError::InvalidRefundSignature)?;

    let updated = commit(refund.commitment_prev, refund.amount);
    if updated != refund.commitment_next_expected {
        return Err(KernelError::RefundStateMismatch);
    }

    let remasked = commit(updated, refund.remask_nonce);
    Ok(RefundOutputs { updated, remasked })
}
