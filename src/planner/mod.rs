//! Plan ordering subsystem
//!
//! Reorders a compiled predicate tree so the cheapest, most selective
//! predicates run first:
//!
//! 1. Primary filters — touch only the primary entity's own indexed columns
//! 2. Mandatory joins — indexed one-to-one joins, required regardless of outcome
//! 3. Existence checks — ordered ascending by the catalog's selectivity hint
//!
//! The sort is stable; ties keep the compiler's emission order. Each
//! existence check runs only against the candidate set surviving all
//! earlier nodes, so front-loading cheap and selective predicates
//! minimizes total existence-check work.

mod orderer;

pub use orderer::PlanOrderer;
