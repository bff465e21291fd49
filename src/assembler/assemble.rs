//! Result assembler
//!
//! One projection fetch for the whole surviving set. The storage capability
//! sorts and windows; the assembler enforces the window size on the way out
//! so a misbehaving capability cannot overflow the page.

use std::collections::HashSet;

use crate::compiler::{Page, SortSpec};
use crate::executor::{CandidateSet, EntityId, ExecResult, StorageCapability};

use super::result::{ResultEntity, ResultStream};

/// Assembles final results from a candidate set
pub struct ResultAssembler<'a, S: StorageCapability> {
    storage: &'a S,
}

impl<'a, S: StorageCapability> ResultAssembler<'a, S> {
    /// Creates an assembler over the given storage capability
    pub fn new(storage: &'a S) -> Self {
        Self { storage }
    }

    /// Fetches the projection for the surviving identifiers and returns a
    /// lazy stream sized to the pagination window.
    ///
    /// An empty candidate set yields an empty stream without touching
    /// storage.
    pub fn assemble(
        &self,
        candidates: &CandidateSet,
        sort: Option<&SortSpec>,
        page: Page,
    ) -> ExecResult<ResultStream> {
        if candidates.is_empty() {
            return Ok(ResultStream::new(Vec::new()));
        }

        let rows = self.storage.fetch_projection(candidates, sort, page)?;

        let mut seen: HashSet<EntityId> = HashSet::with_capacity(rows.len());
        let entities: Vec<ResultEntity> = rows
            .into_iter()
            .filter(|row| candidates.contains(row.id) && seen.insert(row.id))
            .map(ResultEntity::from_row)
            .take(page.limit as usize)
            .collect();

        Ok(ResultStream::new(entities))
    }
}
