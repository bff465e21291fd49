//! Candidate identifier set
//!
//! The working set of primary-entity identifiers surviving applied
//! predicates. A set, not a multiset: each identifier appears at most once
//! regardless of how many related rows matched. Iteration order is the
//! identifiers' natural order, so results are deterministic.

use std::collections::BTreeSet;

/// Primary-entity identifier
pub type EntityId = u64;

/// Unique-by-construction set of candidate identifiers
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateSet {
    ids: BTreeSet<EntityId>,
}

impl CandidateSet {
    /// Creates an empty set
    pub fn empty() -> Self {
        Self::default()
    }

    /// Keeps only identifiers present in both sets.
    ///
    /// This is the narrowing primitive: the result can never be larger
    /// than either input, so applying a node can only shrink the set.
    pub fn intersect(&self, other: &CandidateSet) -> CandidateSet {
        CandidateSet {
            ids: self.ids.intersection(&other.ids).copied().collect(),
        }
    }

    /// Returns true if the identifier survives so far
    pub fn contains(&self, id: EntityId) -> bool {
        self.ids.contains(&id)
    }

    /// Number of surviving identifiers
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Returns true if no identifier survives
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Iterates identifiers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.ids.iter().copied()
    }
}

impl FromIterator<EntityId> for CandidateSet {
    fn from_iter<I: IntoIterator<Item = EntityId>>(iter: I) -> Self {
        Self {
            ids: iter.into_iter().collect(),
        }
    }
}
