//! Protocol configuration schema.

use pasta_curves::pallas;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_with::serde_as;
use thiserror::Error;

use crate::base::{Amount, FieldHex};

/// Maximum supported membership-tree depth.
pub const MAX_TREE_DEPTH: u8 = 32;

/// Configuration for one rate-limited credit class.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ProtocolConfig {
    /// Membership tree depth.
    pub tree_depth: u8,
    /// Per-identity message limit.
    pub user_message_limit: u32,
    /// Price of one call in this class.
    pub class_price: Amount,
    /// The refund commitment every refund chain starts from.
    #[serde_as(as = "FieldHex")]
    #[schemars(with = "String")]
    pub genesis_refund_commitment: pallas::Base,
}

/// Errors from validating a protocol configuration.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// The tree depth exceeds the supported maximum.
    #[error("tree depth {0} exceeds the supported maximum of {MAX_TREE_DEPTH}")]
    DepthTooLarge(u8),
    /// A message limit of zero admits no tickets.
    #[error("user message limit must be greater than zero")]
    ZeroMessageLimit,
}

impl ProtocolConfig {
    /// Validate the configuration bounds.
    ///
    /// # Errors
    /// Returns a [`ConfigError`] naming the violated bound.
    pub const fn validate(&self) -> Result<(), ConfigError> {
        if self.tree_depth > MAX_TREE_DEPTH {
            return Err(ConfigError::DepthTooLarge(self.tree_depth));
        }
        if self.user_message_limit == 0 {
            return Err(ConfigError::ZeroMessageLimit);
        }
        Ok(())
    }
}
