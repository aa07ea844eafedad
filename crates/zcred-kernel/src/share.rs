//! Rate-limit share and nullifier derivation.
//!
//! Each ticket defines one degree-1 sharing line `y = a0 + a1 * x` with the
//! identity secret as the constant term. Publishing two shares of the same
//! line (a reused ticket index under different blinding values) reveals the
//! secret by linear reconstruction. That is the penalty mechanism; the
//! recovery routine belongs to the external slashing collaborator.

use pasta_curves::pallas;

use crate::commitments::{hash1, hash3};

/// Derive the line coefficient `a1` for one ticket.
///
/// `a1` doubles as the nullifier preimage; it is stable across blinding
/// values for a fixed `(identity_secret, scope, ticket_index)`.
#[must_use]
pub fn line_coefficient(
    identity_secret: pallas::Base,
    scope: pallas::Base,
    ticket_index: pallas::Base,
) -> pallas::Base {
    hash3(identity_secret, scope, ticket_index)
}

/// Evaluate the sharing line at `x`.
///
/// Field addition and multiplication wrap modulo the Pallas base-field
/// prime, matching standard field-based secret sharing.
#[must_use]
#[allow(
    clippy::arithmetic_side_effects,
    reason = "field arithmetic wraps modulo the Pallas prime"
)]
pub fn share_point(
    identity_secret: pallas::Base,
    coefficient: pallas::Base,
    x: pallas::Base,
) -> pallas::Base {
    identity_secret + coefficient * x
}

/// Derive the public nullifier from the line coefficient.
///
/// Stable across `x`, enabling off-circuit replay and duplicate-use
/// detection without revealing the secret.
#[must_use]
pub fn nullifier(coefficient: pallas::Base) -> pallas::Base {
    hash1(coefficient)
}
