//! Compile-time error types
//!
//! Error codes:
//! - SEARCH_UNKNOWN_RELATION (request names a relation absent from the catalog)
//! - SEARCH_INVALID_CRITERION (cardinality mismatch, duplicate, bad predicate)
//!
//! All compile errors are raised before any storage access.

use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors raised while compiling a search request
#[derive(Debug, Clone, Error)]
pub enum CompileError {
    /// Request references a relation absent from the catalog
    #[error(transparent)]
    UnknownRelation(#[from] CatalogError),

    /// Criterion is structurally invalid for the relation it names
    #[error("Invalid criterion on relation '{relation}': {reason}")]
    InvalidCriterion { relation: String, reason: String },
}

impl CompileError {
    pub fn invalid_criterion(relation: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidCriterion {
            relation: relation.into(),
            reason: reason.into(),
        }
    }

    /// Stable string code for logs and API surfaces
    pub fn code(&self) -> &'static str {
        match self {
            CompileError::UnknownRelation(inner) => inner.code(),
            CompileError::InvalidCriterion { .. } => "SEARCH_INVALID_CRITERION",
        }
    }
}

/// Result type for compiler operations
pub type CompileResult<T> = Result<T, CompileError>;
