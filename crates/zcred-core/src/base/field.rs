//! Canonical field-element encodings and serde adapters.

use ff::PrimeField as _;
use pasta_curves::pallas;
use serde_with::hex::Hex;
use thiserror::Error;

/// Errors produced by core encoding helpers.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum CoreError {
    /// A 32-byte value was not a canonical encoding of a Pallas base field element.
    #[error("invalid canonical pallas base encoding")]
    NonCanonicalField,
}

/// Decode a canonical little-endian 32-byte encoding into a field element.
///
/// # Errors
/// Returns [`CoreError::NonCanonicalField`] for values at or above the field
/// modulus.
pub fn base_from_repr(bytes: [u8; 32]) -> Result<pallas::Base, CoreError> {
    Option::<pallas::Base>::from(pallas::Base::from_repr(bytes))
        .ok_or(CoreError::NonCanonicalField)
}

/// A `serde_as` adapter encoding a field element as hex of its canonical
/// 32-byte little-endian representation.
///
/// Deserialization rejects non-canonical encodings, so schema-level field
/// elements are always in reduced form.
pub struct FieldHex;

impl serde_with::SerializeAs<pallas::Base> for FieldHex {
    fn serialize_as<S>(value: &pallas::Base, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        <Hex as serde_with::SerializeAs<[u8; 32]>>::serialize_as(&value.to_repr(), serializer)
    }
}

impl<'de> serde_with::DeserializeAs<'de, pallas::Base> for FieldHex {
    fn deserialize_as<D>(deserializer: D) -> Result<pallas::Base, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bytes: [u8; 32] =
            <Hex as serde_with::DeserializeAs<'de, [u8; 32]>>::deserialize_as(deserializer)?;
        base_from_repr(bytes).map_err(serde::de::Error::custom)
    }
}
