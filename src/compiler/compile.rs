//! Predicate compiler
//!
//! Turns a validated search request into a predicate tree. Emission order
//! is fixed so that compiling the same request twice yields structurally
//! identical trees:
//!
//! 1. One `PrimaryFilter` per scalar filter, in request order
//! 2. One `MandatoryJoin` per mandatory relation, in catalog declaration
//!    order, whether or not the request constrains it
//! 3. One `ExistsCheck` per relation criterion, in request order
//!
//! Relations absent from the request produce no node: absence means no
//! constraint, not "match nothing".

use std::collections::HashSet;

use regex::Regex;

use crate::catalog::{Cardinality, RelationCatalog};

use super::errors::{CompileError, CompileResult};
use super::request::{MatchPredicate, SearchRequest};
use super::tree::{PredicateNode, PredicateTree};

/// Compiles search requests against a relation catalog
pub struct PredicateCompiler<'a> {
    catalog: &'a RelationCatalog,
}

impl<'a> PredicateCompiler<'a> {
    /// Creates a compiler over the given catalog
    pub fn new(catalog: &'a RelationCatalog) -> Self {
        Self { catalog }
    }

    /// Compiles a request, returning an immutable predicate tree or the
    /// first validation error. No storage access happens here.
    pub fn compile(&self, request: &SearchRequest) -> CompileResult<PredicateTree> {
        self.validate_criteria(request)?;

        let mut nodes = Vec::with_capacity(
            request.filters.len() + self.catalog.len() + request.criteria.len(),
        );

        for filter in &request.filters {
            nodes.push(PredicateNode::PrimaryFilter(filter.clone()));
        }

        for desc in self.catalog.mandatory_relations() {
            nodes.push(PredicateNode::MandatoryJoin {
                relation: desc.name.clone(),
                join: desc.join.clone(),
            });
        }

        for criterion in &request.criteria {
            // Already validated: exists and is optional many-to-many
            let desc = self.catalog.describe(&criterion.relation)?;
            nodes.push(PredicateNode::ExistsCheck {
                relation: desc.name.clone(),
                join: desc.join.clone(),
                predicate: criterion.predicate.clone(),
            });
        }

        Ok(PredicateTree::new(
            nodes,
            request.sort.clone(),
            request.page,
        ))
    }

    /// Validates every criterion against the catalog before any node is
    /// emitted, so a rejected request does zero storage work.
    fn validate_criteria(&self, request: &SearchRequest) -> CompileResult<()> {
        let mut seen: HashSet<&str> = HashSet::new();

        for criterion in &request.criteria {
            let desc = self.catalog.describe(&criterion.relation)?;

            if desc.cardinality == Cardinality::MandatoryOneToOne {
                return Err(CompileError::invalid_criterion(
                    &criterion.relation,
                    "existence criterion on a mandatory one-to-one relation",
                ));
            }

            if !seen.insert(desc.name.as_str()) {
                return Err(CompileError::invalid_criterion(
                    &criterion.relation,
                    "duplicate criterion for the same relation",
                ));
            }

            if criterion.predicate.is_keyword() && !desc.keyword_eligible {
                return Err(CompileError::invalid_criterion(
                    &criterion.relation,
                    "keyword predicate on a relation without keyword-eligible attributes",
                ));
            }

            if let MatchPredicate::Pattern(pattern) = &criterion.predicate {
                if let Err(e) = Regex::new(pattern) {
                    return Err(CompileError::invalid_criterion(
                        &criterion.relation,
                        format!("invalid pattern: {e}"),
                    ));
                }
            }
        }

        Ok(())
    }
}
