//! Predicate compiler subsystem
//!
//! Turns a structured search request into an ordered, deduplication-free
//! predicate tree: primary filters + mandatory joins + optional existence
//! checks, all logically AND-ed.
//!
//! # Design Principles
//!
//! - Deterministic: same request → structurally identical tree
//! - Fail fast: every validation error surfaces before any storage access
//! - Closed node set: predicates are a tagged union, never built from strings
//! - Absence = no constraint: an unmentioned optional relation emits no node

mod compile;
mod errors;
mod request;
mod tree;

pub use compile::PredicateCompiler;
pub use errors::{CompileError, CompileResult};
pub use request::{
    FilterOp, MatchPredicate, Page, RelationCriterion, ScalarFilter, SearchRequest,
    SortDirection, SortSpec,
};
pub use tree::{PredicateNode, PredicateTree};
