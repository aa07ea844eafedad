//! Off-chain workflow helpers for ZCRED.
//!
//! Everything here mirrors kernel derivations so external tooling can
//! construct well-formed witnesses ahead of proof generation; none of it is
//! security-checked on its own. The kernel re-verifies every derived value.

pub mod derive;
pub mod issuer;
pub mod slash;
pub mod tree;

pub use derive::{build_ticket_witness, derive_rate_commitment_root, preview_refund_transition};
pub use issuer::{GENESIS_REFUND_COMMITMENT, RefundTicket, issue_refund_ticket};
pub use slash::{Share, SlashError, recover_identity_secret};
pub use tree::MembershipTree;
