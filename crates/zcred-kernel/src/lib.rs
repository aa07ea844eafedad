//! The ZCRED credit-spend kernel.
//!
//! A pure, side-effect-free evaluation of the constraint logic that gates
//! rate-limited API usage: a membership proof over rate-commitment leaves, a
//! cryptographic rate-limiting share with a public nullifier, a wide-integer
//! solvency floor, and (in the extended variant) a server-signed, hidden
//! refund-accounting transition.
//!
//! Each evaluation is independent of every other; nothing persists between
//! invocations. Nullifier continuity and the refund-commitment chain are the
//! caller's bookkeeping. The proving system that would wrap this computation
//! is an external collaborator and is not part of this crate.

pub mod commitments;
pub mod error;
pub mod kernel;
pub mod membership;
pub mod refund;
pub mod share;
pub mod solvency;

pub use error::{KernelError, WitnessDecodeError};
pub use kernel::{TicketOutputs, TicketWitness, evaluate, evaluate_with_refund};
pub use refund::{RefundOutputs, RefundWitness};
