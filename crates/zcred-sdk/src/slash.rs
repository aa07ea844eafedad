//! Share-based identity recovery for the slashing collaborator.
//!
//! Two honest shares with the same nullifier and ticket index lie on the same
//! degree-1 line; the identity secret is the line's constant term. This is
//! the penalty side of the rate limit: a participant who reuses a ticket
//! index under different blinding values hands their secret to anyone holding
//! both shares.

use ff::Field as _;
use pasta_curves::pallas;
use thiserror::Error;

/// One published rate-limit share.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Share {
    /// Nullifier the share was published under.
    pub nullifier: pallas::Base,
    /// Ticket index the share was published under.
    pub ticket_index: pallas::Base,
    /// Evaluation point.
    pub x: pallas::Base,
    /// Share value.
    pub y: pallas::Base,
}

/// Errors from share recovery.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SlashError {
    /// The shares carry different nullifiers.
    #[error("shares carry different nullifiers")]
    NullifierMismatch,
    /// The shares carry different ticket indices.
    #[error("shares carry different ticket indices")]
    TicketIndexMismatch,
    /// Both shares evaluate the line at the same point.
    #[error("share evaluation points must differ to recover the secret")]
    DuplicateEvaluationPoint,
    /// The evaluation point is zero.
    #[error("cannot derive the line coefficient at x = 0")]
    ZeroEvaluationPoint,
}

/// Recover the identity secret from two shares of the same ticket.
///
/// `a0 = (y1 * x2 - y2 * x1) / (x2 - x1)`.
///
/// # Errors
/// Returns a [`SlashError`] if the shares disagree on nullifier or ticket
/// index, or share an evaluation point.
#[allow(
    clippy::arithmetic_side_effects,
    reason = "field arithmetic wraps modulo the Pallas prime"
)]
pub fn recover_identity_secret(first: &Share, second: &Share) -> Result<pallas::Base, SlashError> {
    if first.nullifier != second.nullifier {
        return Err(SlashError::NullifierMismatch);
    }
    if first.ticket_index != second.ticket_index {
        return Err(SlashError::TicketIndexMismatch);
    }

    let denominator = second.x - first.x;
    let inverse = Option::<pallas::Base>::from(denominator.invert())
        .ok_or(SlashError::DuplicateEvaluationPoint)?;
    Ok((first.y * second.x - second.y * first.x) * inverse)
}

/// Derive the line coefficient from a recovered secret and one share.
///
/// `a1 = (y - a0) / x`, usable as a consistency check against the share's
/// nullifier preimage.
///
/// # Errors
/// Returns [`SlashError::ZeroEvaluationPoint`] for `x == 0`.
#[allow(
    clippy::arithmetic_side_effects,
    reason = "field arithmetic wraps modulo the Pallas prime"
)]
pub fn line_coefficient_from_share(
    identity_secret: pallas::Base,
    share: &Share,
) -> Result<pallas::Base, SlashError> {
    let inverse =
        Option::<pallas::Base>::from(share.x.invert()).ok_or(SlashError::ZeroEvaluationPoint)?;
    Ok((share.y - identity_secret) * inverse)
}
