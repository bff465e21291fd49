//! Execution subsystem
//!
//! Applies an ordered predicate tree against the external storage
//! capability and produces the surviving candidate set.
//!
//! # Execution contract
//!
//! - Sequential: one node at a time; later nodes see only the candidates
//!   surviving earlier ones
//! - Monotonic: applying a node never increases the candidate set
//! - Exactly-once: the candidate set holds each qualifying identifier once,
//!   however many related rows matched
//! - Fail fast: an empty set skips all remaining storage calls
//! - Cancellation-aware: a tripped token surfaces as `Cancelled`, never as
//!   an empty success

mod adapter;
mod cancel;
mod candidates;
mod errors;
mod storage;

pub use adapter::ExecutionAdapter;
pub use cancel::CancelToken;
pub use candidates::{CandidateSet, EntityId};
pub use errors::{ExecError, ExecResult};
pub use storage::{EntityRow, StorageCapability};
