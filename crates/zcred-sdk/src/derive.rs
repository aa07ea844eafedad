//! Witness-side derivation helpers mirroring the kernel.

use pasta_curves::pallas;
use tracing::debug;
use zcred_core::base::Amount;
use zcred_core::schema::config::ProtocolConfig;
use zcred_kernel::TicketWitness;
use zcred_kernel::commitments::{commit, identity_commitment, rate_commitment};
use zcred_kernel::membership::fold;
use zcred_kernel::refund::refund_ticket_hash;

/// Recompute the membership root for an identity's rate-commitment leaf.
///
/// Mirrors the in-kernel membership fold without the final equality
/// assertion, so callers can *compute* the root a proof will verify against
/// rather than verify one. An empty path derives the leaf itself.
#[must_use]
pub fn derive_rate_commitment_root(
    identity_secret: pallas::Base,
    user_message_limit: u32,
    merkle_path: &[pallas::Base],
) -> pallas::Base {
    let leaf = rate_commitment(identity_commitment(identity_secret), user_message_limit);
    let root = fold(leaf, merkle_path);
    debug!(depth = merkle_path.len(), "derived rate-commitment root");
    root
}

/// Recompute the refund ticket hash and the next refund commitment.
///
/// Returns `(refund_ticket_hash, commitment_next)`: the exact message the
/// server must sign and the expected updated commitment, so a caller can
/// pre-agree a state transition before invoking the extended kernel.
#[must_use]
pub fn preview_refund_transition(
    commitment_prev: pallas::Base,
    amount: pallas::Base,
    ticket_index: pallas::Base,
    scope: pallas::Base,
) -> (pallas::Base, pallas::Base) {
    let ticket_hash = refund_ticket_hash(commitment_prev, amount, ticket_index, scope);
    let commitment_next = commit(commitment_prev, amount);
    (ticket_hash, commitment_next)
}

/// Assemble a plain-variant witness from the protocol configuration.
///
/// Pure assembly: the message limit and class price come from `config`, and
/// the kernel re-checks every derived value at evaluation time.
#[must_use]
#[allow(clippy::too_many_arguments, reason = "witness assembly mirrors the kernel input surface")]
pub fn build_ticket_witness(
    config: &ProtocolConfig,
    identity_secret: pallas::Base,
    ticket_index: u32,
    x: pallas::Base,
    scope: pallas::Base,
    deposit: Amount,
    merkle_root: pallas::Base,
    merkle_proof: Vec<pallas::Base>,
) -> TicketWitness {
    TicketWitness {
        identity_secret,
        ticket_index: pallas::Base::from(u64::from(ticket_index)),
        x,
        scope,
        user_message_limit: config.user_message_limit,
        deposit,
        class_price: config.class_price,
        merkle_root,
        merkle_proof,
    }
}
