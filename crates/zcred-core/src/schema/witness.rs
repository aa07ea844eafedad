//! Serializable witness input formats.
//!
//! Field names mirror the shared interop-vector format so witness files are
//! interchangeable with the fixture tooling that produces them.

use pasta_curves::pallas;
use serde::{Deserialize, Serialize};
use serde_with::hex::Hex;
use serde_with::serde_as;

use crate::base::FieldHex;

/// Serializable witness for the plain credit-spend variant.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketWitnessFile {
    /// The participant's identity secret (private).
    #[serde_as(as = "FieldHex")]
    pub identity_secret: pallas::Base,
    /// Zero-based ticket index for this call.
    #[serde_as(as = "FieldHex")]
    pub ticket_index: pallas::Base,
    /// Caller-chosen blinding value (the share evaluation point).
    #[serde_as(as = "FieldHex")]
    pub x: pallas::Base,
    /// Rate-limiting scope.
    #[serde_as(as = "FieldHex")]
    pub scope: pallas::Base,
    /// Per-identity message limit.
    pub user_message_limit: u32,
    /// Deposit, low 128-bit limb.
    pub deposit_low: u128,
    /// Deposit, high 128-bit limb.
    pub deposit_high: u128,
    /// Class price, low 128-bit limb.
    pub class_price_low: u128,
    /// Class price, high 128-bit limb.
    pub class_price_high: u128,
    /// Published membership root.
    #[serde_as(as = "FieldHex")]
    pub merkle_root: pallas::Base,
    /// Ordered sibling path, leaf to root.
    #[serde_as(as = "Vec<FieldHex>")]
    pub merkle_proof: Vec<pallas::Base>,
}

/// Serializable refund-extension witness for the extended variant.
///
/// Mirrors the sequential chain fixture schema: each step carries the prior
/// commitment, the authorized amount, the pre-agreed next commitment, and the
/// server authorization.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RefundWitnessFile {
    /// Previous refund commitment in the chain.
    #[serde_as(as = "FieldHex")]
    pub refund_commitment_prev: pallas::Base,
    /// Refund amount authorized by the server.
    #[serde_as(as = "FieldHex")]
    pub refund_amount: pallas::Base,
    /// Expected updated commitment (the pre-agreed state transition).
    #[serde_as(as = "FieldHex")]
    pub refund_commitment_next_expected: pallas::Base,
    /// Remasking nonce for the published commitment.
    #[serde_as(as = "FieldHex")]
    pub remask_nonce: pallas::Base,
    /// Server verification key (RedPallas spend-auth encoding).
    #[serde_as(as = "Hex")]
    pub server_pubkey: [u8; 32],
    /// Server signature over the refund ticket hash.
    #[serde_as(as = "Hex")]
    pub signature: [u8; 64],
}
