//! Predicate tree structures
//!
//! The compiled form of a search request: an ordered, logically AND-ed
//! sequence of predicate nodes. Built once per request, immutable after
//! construction, consumed exactly once by the execution adapter.

use crate::catalog::JoinKey;

use super::request::{MatchPredicate, Page, ScalarFilter, SortSpec};

/// One compiled predicate.
///
/// Closed set of variants; no ad-hoc string-built predicates.
#[derive(Debug, Clone, PartialEq)]
pub enum PredicateNode {
    /// Filter on the primary entity's own indexed columns
    PrimaryFilter(ScalarFilter),
    /// Indexed one-to-one join the primary entity requires for a complete
    /// projection, emitted whether or not the request constrains it
    MandatoryJoin { relation: String, join: JoinKey },
    /// Existence test against an optional many-to-many relation.
    ///
    /// Contributes no output columns; its only effect is inclusion or
    /// exclusion of the primary entity.
    ExistsCheck {
        relation: String,
        join: JoinKey,
        predicate: MatchPredicate,
    },
}

impl PredicateNode {
    /// Returns the node kind for display output
    pub fn kind(&self) -> &'static str {
        match self {
            PredicateNode::PrimaryFilter(_) => "PRIMARY_FILTER",
            PredicateNode::MandatoryJoin { .. } => "MANDATORY_JOIN",
            PredicateNode::ExistsCheck { .. } => "EXISTS_CHECK",
        }
    }

    /// Relation name for join and existence nodes
    pub fn relation(&self) -> Option<&str> {
        match self {
            PredicateNode::PrimaryFilter(_) => None,
            PredicateNode::MandatoryJoin { relation, .. }
            | PredicateNode::ExistsCheck { relation, .. } => Some(relation),
        }
    }
}

/// Ordered, AND-ed sequence of predicate nodes plus the sort and pagination
/// the assembler applies after narrowing.
#[derive(Debug, Clone, PartialEq)]
pub struct PredicateTree {
    nodes: Vec<PredicateNode>,
    /// Sort applied at assembly, never during narrowing
    pub sort: Option<SortSpec>,
    /// Pagination window applied at assembly
    pub page: Page,
}

impl PredicateTree {
    pub(crate) fn new(nodes: Vec<PredicateNode>, sort: Option<SortSpec>, page: Page) -> Self {
        Self { nodes, sort, page }
    }

    /// Nodes in evaluation order
    pub fn nodes(&self) -> &[PredicateNode] {
        &self.nodes
    }

    /// Number of nodes
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the tree has no nodes
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Rebuilds the tree with the same nodes in a different order.
    ///
    /// The orderer is the only caller; `nodes` must be a permutation of the
    /// current nodes.
    pub(crate) fn with_order(&self, nodes: Vec<PredicateNode>) -> Self {
        debug_assert_eq!(nodes.len(), self.nodes.len());
        Self {
            nodes,
            sort: self.sort.clone(),
            page: self.page,
        }
    }
}
