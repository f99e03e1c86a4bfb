// Copyright 2026 the Tilework Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use hashbrown::HashSet;

/// How [`VisibleSet::update`] decides whether a recomputed subset replaces
/// the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ChangePolicy {
    /// Replace only when the subset *length* changes.
    ///
    /// This matches the historical shallow check: two different subsets of
    /// equal size count as unchanged, so membership can go stale while the
    /// count is constant. Kept as the default so observable behavior is
    /// unchanged; opt into [`ChangePolicy::Exact`] to trade the skipped work
    /// for correctness.
    #[default]
    LengthOnly,
    /// Replace whenever the subset *membership* changes.
    Exact,
}

/// The currently realized subset of tiles, held as indices into the caller's
/// tile list.
///
/// The set has no identity beyond the current render pass: each transform
/// change produces a full candidate subset, and [`VisibleSet::update`]
/// decides per [`ChangePolicy`] whether the host needs to re-render.
#[derive(Clone, Debug, Default)]
pub struct VisibleSet {
    indices: Vec<usize>,
}

impl VisibleSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the realized tile indices, ascending.
    #[must_use]
    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Returns the number of realized tiles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if no tiles are realized.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Applies a recomputed candidate subset, returning `true` if the set
    /// was replaced (i.e. the host should re-render).
    ///
    /// `candidate` is expected to hold unique indices, as produced by
    /// [`visible_indices`](crate::visible_indices).
    pub fn update(&mut self, candidate: Vec<usize>, policy: ChangePolicy) -> bool {
        let unchanged = match policy {
            ChangePolicy::LengthOnly => candidate.len() == self.indices.len(),
            ChangePolicy::Exact => {
                candidate.len() == self.indices.len() && {
                    let current: HashSet<usize> = self.indices.iter().copied().collect();
                    candidate.iter().all(|index| current.contains(index))
                }
            }
        };
        if unchanged {
            return false;
        }
        self.indices = candidate;
        true
    }
}
