//! Domain-separated commitment primitives.
//!
//! Every derived value in the kernel is built from these wrappers around the
//! Poseidon permutation over the Pallas base field. Arity is part of the hash
//! domain (`ConstantLength<L>` encodes the message length into the sponge's
//! initial capacity), so 1/2/3/4-ary calls can never collide across arities,
//! and argument order is part of each derivation's identity. Changing either
//! invalidates previously issued commitments and signatures.

use ff::PrimeField as _;
use halo2_gadgets::poseidon::primitives::{self as poseidon, ConstantLength, P128Pow5T3};
use pasta_curves::pallas;
use sha2::{Digest as _, Sha256};

/// Personalization for the hiding refund-commitment domain.
const COMMITMENT_PERSONALIZATION: &[u8] = b"zcred.refundcommit";

/// Unary hash.
#[must_use]
pub fn hash1(a: pallas::Base) -> pallas::Base {
    poseidon::Hash::<_, P128Pow5T3, ConstantLength<1>, 3, 2>::init().hash([a])
}

/// Pairwise hash.
#[must_use]
pub fn hash2(a: pallas::Base, b: pallas::Base) -> pallas::Base {
    poseidon::Hash::<_, P128Pow5T3, ConstantLength<2>, 3, 2>::init().hash([a, b])
}

/// Ternary hash.
#[must_use]
pub fn hash3(a: pallas::Base, b: pallas::Base, c: pallas::Base) -> pallas::Base {
    poseidon::Hash::<_, P128Pow5T3, ConstantLength<3>, 3, 2>::init().hash([a, b, c])
}

/// Quaternary hash.
#[must_use]
pub fn hash4(a: pallas::Base, b: pallas::Base, c: pallas::Base, d: pallas::Base) -> pallas::Base {
    poseidon::Hash::<_, P128Pow5T3, ConstantLength<4>, 3, 2>::init().hash([a, b, c, d])
}

/// The hiding pairwise commitment used by the refund chain.
///
/// Binds `value` and hides it behind `blind`; the leading domain tag
/// separates it from every plain [`hash3`] use.
#[must_use]
pub fn commit(value: pallas::Base, blind: pallas::Base) -> pallas::Base {
    hash3(domain_tag(COMMITMENT_PERSONALIZATION), value, blind)
}

/// The deterministic one-way image of an identity secret.
#[must_use]
pub fn identity_commitment(identity_secret: pallas::Base) -> pallas::Base {
    hash1(identity_secret)
}

/// The membership-tree leaf binding an identity to its quota.
#[must_use]
pub fn rate_commitment(identity_commitment: pallas::Base, user_message_limit: u32) -> pallas::Base {
    hash2(
        identity_commitment,
        pallas::Base::from(u64::from(user_message_limit)),
    )
}

/// Hash a personalization string to a field-element domain tag.
///
/// Masks the top two bits so the 32-byte digest is always a canonical
/// encoding.
fn domain_tag(personalization: &[u8]) -> pallas::Base {
    let digest = Sha256::digest(personalization);
    let mut repr = [0_u8; 32];
    repr.copy_from_slice(&digest);
    if let Some(last) = repr.last_mut() {
        *last &= 0x3F;
    }
    pallas::Base::from_repr(repr).expect("masked bytes always fit in field")
}
