//! Execution error types
//!
//! Error codes:
//! - SEARCH_CANCELLED (caller-requested timeout/cancellation)
//! - SEARCH_STORAGE_UNAVAILABLE (the external capability failed to respond)
//!
//! A cancelled execution is a distinct outcome, never an empty match set;
//! storage failures propagate as-is — retry policy belongs to the caller.

use thiserror::Error;

/// Errors raised while executing a predicate tree
#[derive(Debug, Clone, Error)]
pub enum ExecError {
    /// Execution aborted by caller-requested cancellation or timeout
    #[error("Search cancelled before completion")]
    Cancelled,

    /// The external storage capability failed to respond
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),
}

impl ExecError {
    pub fn storage_unavailable(reason: impl Into<String>) -> Self {
        Self::StorageUnavailable(reason.into())
    }

    /// Stable string code for logs and API surfaces
    pub fn code(&self) -> &'static str {
        match self {
            ExecError::Cancelled => "SEARCH_CANCELLED",
            ExecError::StorageUnavailable(_) => "SEARCH_STORAGE_UNAVAILABLE",
        }
    }

    /// Returns true if this execution was cancelled
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ExecError::Cancelled)
    }
}

/// Result type for executor operations
pub type ExecResult<T> = Result<T, ExecError>;
