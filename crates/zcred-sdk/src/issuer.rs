//! Server-side refund ticket issuing.
//!
//! The accounting server authorizes one refund step at a time by signing the
//! canonical tuple hash for a `(ticket_index, scope)` pair. Chains start from
//! [`GENESIS_REFUND_COMMITMENT`]; each accepted step publishes a remasked
//! commitment that becomes the next step's prior commitment.

use ff::PrimeField as _;
use pasta_curves::pallas;
use rand_core::{CryptoRng, RngCore};
use reddsa::orchard::SpendAuth;
use reddsa::{Signature, SigningKey, VerificationKey};
use tracing::debug;
use zcred_kernel::RefundWitness;

use crate::derive::preview_refund_transition;

/// The refund commitment every chain starts from (step 0's prior value).
pub const GENESIS_REFUND_COMMITMENT: pallas::Base = pallas::Base::from_raw([0x7b, 0, 0, 0]);

/// A server-authorized refund step, ready for the extended kernel.
#[derive(Clone, Debug)]
pub struct RefundTicket {
    /// Prior refund commitment the step advances from.
    pub commitment_prev: pallas::Base,
    /// Authorized refund amount.
    pub amount: pallas::Base,
    /// Ticket index the authorization is bound to.
    pub ticket_index: pallas::Base,
    /// Scope the authorization is bound to.
    pub scope: pallas::Base,
    /// The updated commitment this step must produce.
    pub commitment_next: pallas::Base,
    /// The signed canonical tuple hash.
    pub ticket_hash: pallas::Base,
    /// Server signature over `ticket_hash`.
    pub signature: Signature<SpendAuth>,
}

impl RefundTicket {
    /// Assemble the extended-kernel witness for this ticket.
    #[must_use]
    pub fn into_witness(
        self,
        remask_nonce: pallas::Base,
        server_key: VerificationKey<SpendAuth>,
    ) -> RefundWitness {
        RefundWitness {
            commitment_prev: self.commitment_prev,
            amount: self.amount,
            commitment_next_expected: self.commitment_next,
            remask_nonce,
            server_key,
            signature: self.signature,
        }
    }
}

/// Sign one refund step for a ticket/scope pair.
///
/// The signed message is the canonical 32-byte encoding of the tuple hash, so
/// the resulting ticket verifies under the kernel's refund transition by
/// construction.
pub fn issue_refund_ticket<R: RngCore + CryptoRng>(
    signing_key: &SigningKey<SpendAuth>,
    commitment_prev: pallas::Base,
    amount: pallas::Base,
    ticket_index: pallas::Base,
    scope: pallas::Base,
    rng: R,
) -> RefundTicket {
    let (ticket_hash, commitment_next) =
        preview_refund_transition(commitment_prev, amount, ticket_index, scope);
    let signature = signing_key.sign(rng, &ticket_hash.to_repr());
    debug!(ticket_hash = ?ticket_hash, "issued refund ticket");

    RefundTicket {
        commitment_prev,
        amount,
        ticket_index,
        scope,
        commitment_next,
        ticket_hash,
        signature,
    }
}
