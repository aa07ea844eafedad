//! Kernel rejection taxonomy.

use thiserror::Error;

/// Fatal, named rejections of a kernel evaluation.
///
/// Every failure rejects the whole witness; there is no partial success or
/// local recovery. The variants are distinguishable so external tooling can
/// classify witness-construction bugs, policy violations, and forged inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum KernelError {
    /// The membership fold does not reproduce the claimed Merkle root.
    #[error("membership proof does not match the claimed merkle root")]
    InvalidMerkleProof,

    /// The ticket index does not fit the bounded integer domain of the limit.
    #[error("ticket index does not fit the 32-bit index domain")]
    TicketIndexConversionFailed,

    /// The ticket index is not strictly below the message limit.
    #[error("ticket index {index} is not below the message limit {limit}")]
    TicketIndexOutOfRange {
        /// The converted ticket index.
        index: u32,
        /// The configured message limit.
        limit: u32,
    },

    /// The wide-integer solvency inequality is violated.
    #[error("deposit does not cover the solvency floor for this ticket")]
    InsufficientDeposit,

    /// The server signature does not verify over the refund ticket hash.
    #[error("refund signature does not verify over the canonical ticket hash")]
    InvalidRefundSignature,

    /// The recomputed updated commitment disagrees with the caller's expectation.
    #[error("updated refund commitment disagrees with the expected next value")]
    RefundStateMismatch,
}

/// Errors decoding serialized witness material into kernel inputs.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum WitnessDecodeError {
    /// The server key bytes are not a valid RedPallas verification key.
    #[error("malformed server verification key encoding")]
    MalformedServerKey,
}
