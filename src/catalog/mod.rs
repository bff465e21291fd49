//! Relation catalog for the search engine
//!
//! The catalog is the static description of every relation the primary
//! entity (a job posting) can be constrained by: its cardinality, its join
//! keys, whether it participates in keyword matching, and a selectivity
//! hint used for plan ordering.
//!
//! # Lifecycle
//!
//! Built once at process start, read-only afterwards. Shared by reference
//! (wrap in `Arc` to share across threads); concurrent reads need no
//! locking.

mod catalog;
mod descriptor;

pub use catalog::{CatalogError, CatalogResult, RelationCatalog};
pub use descriptor::{Cardinality, JoinKey, RelationDescriptor};
