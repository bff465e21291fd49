//! Storage capability seam
//!
//! The external storage/query engine is consumed through this trait, one
//! narrowing call per predicate node. Implementations must honor the
//! existence semantics: `exists_narrow` reports which candidates have at
//! least one matching related row and never returns the rows themselves.

use serde_json::Value;

use crate::catalog::JoinKey;
use crate::compiler::{MatchPredicate, Page, ScalarFilter, SortSpec};

use super::candidates::{CandidateSet, EntityId};
use super::errors::ExecResult;

/// One fully projected primary-entity row.
///
/// The body carries the entity's own columns plus the mandatory joined
/// attributes; optional-relation columns are never attached.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityRow {
    /// Primary-entity identifier
    pub id: EntityId,
    /// Projected columns as JSON
    pub body: Value,
}

impl EntityRow {
    pub fn new(id: EntityId, body: Value) -> Self {
        Self { id, body }
    }
}

/// External storage/query capability consumed by the adapter.
///
/// All calls are read-only. Set-valued results are identifier sets, so a
/// conforming implementation cannot multiply the primary entity's rows.
pub trait StorageCapability {
    /// Scans the primary entity's index for identifiers matching the
    /// given scalar filters (all AND-ed). An empty filter slice matches
    /// every live identifier.
    fn scan_primary(&self, filters: &[ScalarFilter]) -> ExecResult<CandidateSet>;

    /// Narrows candidates through a mandatory one-to-one join: keeps only
    /// identifiers whose foreign key resolves through `join`.
    fn join_narrow(
        &self,
        candidates: &CandidateSet,
        relation: &str,
        join: &JoinKey,
    ) -> ExecResult<CandidateSet>;

    /// Keeps only candidates with at least one related row satisfying
    /// `predicate`. Must answer "does any row exist", never "give me all
    /// rows".
    fn exists_narrow(
        &self,
        candidates: &CandidateSet,
        relation: &str,
        join: &JoinKey,
        predicate: &MatchPredicate,
    ) -> ExecResult<CandidateSet>;

    /// Fetches the full projection for the surviving identifiers, sorted
    /// and windowed. Exactly one row per identifier.
    fn fetch_projection(
        &self,
        ids: &CandidateSet,
        sort: Option<&SortSpec>,
        page: Page,
    ) -> ExecResult<Vec<EntityRow>>;
}

impl<T: StorageCapability + ?Sized> StorageCapability for &T {
    fn scan_primary(&self, filters: &[ScalarFilter]) -> ExecResult<CandidateSet> {
        (**self).scan_primary(filters)
    }

    fn join_narrow(
        &self,
        candidates: &CandidateSet,
        relation: &str,
        join: &JoinKey,
    ) -> ExecResult<CandidateSet> {
        (**self).join_narrow(candidates, relation, join)
    }

    fn exists_narrow(
        &self,
        candidates: &CandidateSet,
        relation: &str,
        join: &JoinKey,
        predicate: &MatchPredicate,
    ) -> ExecResult<CandidateSet> {
        (**self).exists_narrow(candidates, relation, join, predicate)
    }

    fn fetch_projection(
        &self,
        ids: &CandidateSet,
        sort: Option<&SortSpec>,
        page: Page,
    ) -> ExecResult<Vec<EntityRow>> {
        (**self).fetch_projection(ids, sort, page)
    }
}
