//! Top-level search contract
//!
//! Ties the pipeline together: compile → order → execute → assemble.
//! The compiler and orderer are pure transformations over immutable
//! values; the only shared state is the read-only relation catalog, so
//! independent requests may run concurrently without locking.

use std::sync::Arc;

use thiserror::Error;

use crate::assembler::{ResultAssembler, ResultStream};
use crate::catalog::RelationCatalog;
use crate::compiler::{CompileError, PredicateCompiler, SearchRequest};
use crate::executor::{CancelToken, ExecError, ExecutionAdapter, StorageCapability};
use crate::planner::PlanOrderer;

/// Search outcome errors surfaced to the requesting layer
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// Request rejected before any storage access
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// Execution aborted: cancellation or storage failure
    #[error(transparent)]
    Exec(#[from] ExecError),
}

impl SearchError {
    /// Stable string code for logs and API surfaces
    pub fn code(&self) -> &'static str {
        match self {
            SearchError::Compile(e) => e.code(),
            SearchError::Exec(e) => e.code(),
        }
    }

    /// Returns true if the search was cancelled rather than failed
    pub fn is_cancelled(&self) -> bool {
        matches!(self, SearchError::Exec(ExecError::Cancelled))
    }
}

/// Result type for search operations
pub type SearchResult<T> = Result<T, SearchError>;

/// The search engine: catalog plus a storage capability.
pub struct SearchEngine<S: StorageCapability> {
    catalog: Arc<RelationCatalog>,
    storage: S,
}

impl<S: StorageCapability> SearchEngine<S> {
    /// Creates an engine over an initialized catalog and storage capability
    pub fn new(catalog: Arc<RelationCatalog>, storage: S) -> Self {
        Self { catalog, storage }
    }

    /// The engine's relation catalog
    pub fn catalog(&self) -> &RelationCatalog {
        &self.catalog
    }

    /// Runs a search to completion.
    pub fn search(&self, request: &SearchRequest) -> SearchResult<ResultStream> {
        self.search_with_cancel(request, &CancelToken::new())
    }

    /// Runs a search under a caller-held cancellation token.
    ///
    /// A token tripped mid-execution surfaces as `Cancelled`; a partial
    /// candidate set is never returned as a final result.
    pub fn search_with_cancel(
        &self,
        request: &SearchRequest,
        cancel: &CancelToken,
    ) -> SearchResult<ResultStream> {
        let tree = PredicateCompiler::new(&self.catalog).compile(request)?;
        let ordered = PlanOrderer::new(&self.catalog).order(&tree);

        let candidates = ExecutionAdapter::new(&self.storage).execute(&ordered, cancel)?;

        if cancel.is_cancelled() {
            return Err(ExecError::Cancelled.into());
        }

        let stream = ResultAssembler::new(&self.storage).assemble(
            &candidates,
            ordered.sort.as_ref(),
            ordered.page,
        )?;
        Ok(stream)
    }
}
