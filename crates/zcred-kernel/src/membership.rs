//! Membership checking against a published rate-commitment root.
//!
//! The sibling path carries no position input, so the left/right assignment
//! at each level follows the canonical-pair rule: the smaller canonical
//! encoding hashes first. Proof producers (the tree tooling in `zcred-sdk`)
//! build with the same rule.

use ff::PrimeField as _;
use pasta_curves::pallas;

use crate::commitments::hash2;
use crate::error::KernelError;

/// Hash a pair of sibling nodes in canonical order.
#[must_use]
pub fn node_hash(a: pallas::Base, b: pallas::Base) -> pallas::Base {
    if le_repr_lte(a, b) {
        hash2(a, b)
    } else {
        hash2(b, a)
    }
}

/// Fold an ordered sibling path (leaf to root) into the leaf.
///
/// An empty path leaves the leaf as the root. A path of the wrong depth or
/// with a tampered sibling folds to a different value; there is no partial
/// credit.
#[must_use]
pub fn fold(leaf: pallas::Base, siblings: &[pallas::Base]) -> pallas::Base {
    siblings
        .iter()
        .fold(leaf, |current, sibling| node_hash(current, *sibling))
}

/// Check a rate-commitment leaf against the claimed membership root.
///
/// # Errors
/// Returns [`KernelError::InvalidMerkleProof`] unless the folded path
/// reproduces the claimed root exactly.
pub fn verify_membership(
    leaf: pallas::Base,
    siblings: &[pallas::Base],
    root: pallas::Base,
) -> Result<(), KernelError> {
    if fold(leaf, siblings) == root {
        Ok(())
    } else {
        Err(KernelError::InvalidMerkleProof)
    }
}

/// Compare two field elements as little-endian canonical encodings.
fn le_repr_lte(a: pallas::Base, b: pallas::Base) -> bool {
    let a = a.to_repr();
    let b = b.to_repr();
    for (x, y) in a.iter().rev().zip(b.iter().rev()) {
        if x != y {
            return x < y;
        }
    }
    true
}
