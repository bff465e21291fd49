//! jobsearch - a predicate-compiling search engine for job postings
//!
//! Compiles a structured search request into an ordered, deduplication-free
//! predicate tree, then evaluates it against an external storage capability
//! as a sequence of narrowing calls: primary filters first, mandatory
//! one-to-one joins next, and optional many-to-many criteria last as
//! short-circuiting existence checks. The primary entity's rows are never
//! multiplied; each qualifying identifier appears exactly once.

pub mod assembler;
pub mod catalog;
pub mod compiler;
pub mod executor;
pub mod planner;
pub mod search;

pub use assembler::{ResultEntity, ResultStream};
pub use catalog::{Cardinality, JoinKey, RelationCatalog, RelationDescriptor};
pub use compiler::{
    MatchPredicate, Page, RelationCriterion, ScalarFilter, SearchRequest, SortSpec,
};
pub use executor::{CancelToken, CandidateSet, EntityId, EntityRow, StorageCapability};
pub use search::{SearchEngine, SearchError, SearchResult};
