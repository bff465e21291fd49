//! Execution adapter
//!
//! Applies an ordered predicate tree against the storage capability, one
//! node at a time. Later nodes depend on the candidate set narrowed by
//! earlier ones, so evaluation is intentionally sequential.
//!
//! Execution contract:
//!
//! 1. Cancellation is checked before every node; a tripped token surfaces
//!    as `Cancelled`, never as an empty result
//! 2. The first node establishes the initial set from the primary index
//! 3. Every node's result is intersected with the current set, so no node
//!    can widen it
//! 4. An empty set short-circuits globally: remaining nodes are skipped
//!    and the empty set is returned (fail fast, not an error)

use crate::compiler::{PredicateNode, PredicateTree};

use super::cancel::CancelToken;
use super::candidates::CandidateSet;
use super::errors::{ExecError, ExecResult};
use super::storage::StorageCapability;

/// Applies predicate trees against the storage capability
pub struct ExecutionAdapter<'a, S: StorageCapability> {
    storage: &'a S,
}

impl<'a, S: StorageCapability> ExecutionAdapter<'a, S> {
    /// Creates an adapter over the given storage capability
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Executes the tree, returning the surviving candidate set.
    ///
    /// The returned set contains each qualifying identifier exactly once,
    /// independent of how many related rows satisfied any existence check.
    pub fn execute(
        &self,
        tree: &PredicateTree,
        cancel: &CancelToken,
    ) -> ExecResult<CandidateSet> {
        let mut candidates: Option<CandidateSet> = None;

        for node in tree.nodes() {
            if cancel.is_cancelled() {
                return Err(ExecError::Cancelled);
            }

            let narrowed = self.apply(node, candidates.as_ref())?;
            if narrowed.is_empty() {
                return Ok(narrowed);
            }
            candidates = Some(narrowed);
        }

        match candidates {
            Some(set) => Ok(set),
            // No nodes at all: every live identifier qualifies
            None => {
                if cancel.is_cancelled() {
                    return Err(ExecError::Cancelled);
                }
                self.storage.scan_primary(&[])
            }
        }
    }

    /// Applies one node against the current set.
    fn apply(
        &self,
        node: &PredicateNode,
        current: Option<&CandidateSet>,
    ) -> ExecResult<CandidateSet> {
        let result = match node {
            PredicateNode::PrimaryFilter(filter) => {
                self.storage.scan_primary(std::slice::from_ref(filter))?
            }
            PredicateNode::MandatoryJoin { relation, join } => {
                let base = self.base_set(current)?;
                self.storage.join_narrow(&base, relation, join)?
            }
            PredicateNode::ExistsCheck {
                relation,
                join,
                predicate,
            } => {
                let base = self.base_set(current)?;
                self.storage.exists_narrow(&base, relation, join, predicate)?
            }
        };

        // Intersecting with the surviving set keeps narrowing monotonic
        // even if the capability returns identifiers outside it.
        Ok(match current {
            Some(set) => set.intersect(&result),
            None => result,
        })
    }

    /// The set a relational node narrows: the surviving candidates, or the
    /// full primary index when the tree opens with a relational node.
    fn base_set(&self, current: Option<&CandidateSet>) -> ExecResult<CandidateSet> {
        match current {
            Some(set) => Ok(set.clone()),
            None => self.storage.scan_primary(&[]),
        }
    }
}
