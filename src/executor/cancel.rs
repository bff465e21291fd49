//! Request-scoped cancellation
//!
//! The adapter is synchronous and evaluates one node at a time, so
//! cancellation is polled between nodes rather than carried through an
//! async runtime. The token is cheap to clone and safe to trip from
//! another thread.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Cancellation flag shared between a caller and one in-flight search
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    /// Creates a live token
    pub fn new() -> Self {
        Self::default()
    }

    /// Trips the token; every subsequent `is_cancelled` returns true
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Release);
    }

    /// Returns true once the token has been tripped
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Acquire)
    }
}
