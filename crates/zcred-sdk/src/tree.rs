//! Fixed membership-tree construction for witness tooling.

use pasta_curves::pallas;
use zcred_kernel::membership::node_hash;

/// A membership tree over rate-commitment leaves.
///
/// Builds every level eagerly with the kernel's canonical pairwise hash; odd
/// levels are padded with a zero filler. Because the pair hash is
/// order-canonical, extracted sibling paths verify against
/// [`MembershipTree::root`] without a position input.
#[derive(Clone, Debug)]
pub struct MembershipTree {
    /// `levels[0]` holds the leaves; the last level holds the root alone.
    levels: Vec<Vec<pallas::Base>>,
}

impl MembershipTree {
    /// Build a tree from rate-commitment leaves.
    ///
    /// Returns `None` for an empty leaf set.
    #[must_use]
    pub fn build(leaves: &[pallas::Base]) -> Option<Self> {
        if leaves.is_empty() {
            return None;
        }

        let mut levels: Vec<Vec<pallas::Base>> = vec![leaves.to_vec()];
        let mut current_level = leaves.to_vec();

        while current_level.len() > 1 {
            if !current_level.len().is_multiple_of(2) {
                current_level.push(pallas::Base::zero());
            }

            let mut next_level = Vec::with_capacity(current_level.len() / 2);
            for chunk in current_level.chunks_exact(2) {
                if let [left, right] = chunk {
                    next_level.push(node_hash(*left, *right));
                }
            }

            levels.push(next_level.clone());
            current_level = next_level;
        }

        Some(Self { levels })
    }

    /// The tree root.
    #[must_use]
    pub fn root(&self) -> pallas::Base {
        self.levels
            .last()
            .and_then(|level| level.first())
            .copied()
            .unwrap_or_else(pallas::Base::zero)
    }

    /// Number of leaves the tree was built from.
    #[must_use]
    pub fn leaf_count(&self) -> usize {
        self.levels.first().map_or(0, Vec::len)
    }

    /// Extract the leaf-to-root sibling path for a leaf index.
    ///
    /// Returns `None` if the index is outside the leaf set.
    #[must_use]
    pub fn path(&self, leaf_index: usize) -> Option<Vec<pallas::Base>> {
        if leaf_index >= self.leaf_count() {
            return None;
        }

        let mut path = Vec::new();
        let mut idx = leaf_index;

        for level in self.levels.iter().take(self.levels.len().saturating_sub(1)) {
            let sibling_idx = if idx.is_multiple_of(2) {
                idx.saturating_add(1)
            } else {
                idx.saturating_sub(1)
            };

            // Out-of-bounds siblings were zero-padding during the build.
            let sibling = level
                .get(sibling_idx)
                .copied()
                .unwrap_or_else(pallas::Base::zero);
            path.push(sibling);

            idx /= 2;
        }

        Some(path)
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used, reason = "unit-test")]

    use zcred_kernel::membership::{fold, verify_membership};

    use super::*;

    fn leaves(count: u64) -> Vec<pallas::Base> {
        (1..=count).map(pallas::Base::from).collect()
    }

    #[test]
    fn empty_leaf_set_is_rejected() {
        assert!(MembershipTree::build(&[]).is_none());
    }

    #[test]
    fn single_leaf_is_its_own_root() {
        let tree = MembershipTree::build(&leaves(1)).unwrap();
        assert_eq!(tree.root(), pallas::Base::from(1_u64));
        assert_eq!(tree.path(0).unwrap(), Vec::<pallas::Base>::new());
    }

    #[test]
    fn every_extracted_path_verifies() {
        for count in [2_u64, 3, 4, 7, 8] {
            let leaf_values = leaves(count);
            let tree = MembershipTree::build(&leaf_values).unwrap();
            for (index, leaf) in leaf_values.iter().enumerate() {
                let path = tree.path(index).unwrap();
                assert_eq!(fold(*leaf, &path), tree.root(), "leaf {index} of {count}");
                assert_eq!(verify_membership(*leaf, &path, tree.root()), Ok(()));
            }
        }
    }

    #[test]
    fn out_of_range_index_has_no_path() {
        let tree = MembershipTree::build(&leaves(4)).unwrap();
        assert!(tree.path(4).is_none());
    }
}
