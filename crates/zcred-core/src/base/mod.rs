//! Foundational primitive types and byte/serde helpers.

mod amount;
mod field;

pub use amount::Amount;
pub use field::{CoreError, FieldHex, base_from_repr};
