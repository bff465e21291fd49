//! Predicate evaluation orderer
//!
//! Reordering only: no node is added, removed, or mutated. Ordering affects
//! performance, never the final candidate set.

use crate::catalog::RelationCatalog;
use crate::compiler::{PredicateNode, PredicateTree};

/// Orders predicate evaluation by cost class and selectivity
pub struct PlanOrderer<'a> {
    catalog: &'a RelationCatalog,
}

impl<'a> PlanOrderer<'a> {
    /// Creates an orderer over the given catalog
    pub fn new(catalog: &'a RelationCatalog) -> Self {
        Self { catalog }
    }

    /// Returns the tree with its nodes in evaluation order.
    ///
    /// Stable sort: primary filters, then mandatory joins, then existence
    /// checks ascending by selectivity hint. Ties keep compiler order, so
    /// ordering the same tree twice yields the same result.
    pub fn order(&self, tree: &PredicateTree) -> PredicateTree {
        let mut nodes: Vec<PredicateNode> = tree.nodes().to_vec();
        nodes.sort_by(|a, b| {
            self.rank(a)
                .partial_cmp(&self.rank(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        tree.with_order(nodes)
    }

    /// Rank within [0, 3): whole part is the cost class, fractional part is
    /// the selectivity hint for existence checks.
    fn rank(&self, node: &PredicateNode) -> f64 {
        match node {
            PredicateNode::PrimaryFilter(_) => 0.0,
            PredicateNode::MandatoryJoin { .. } => 1.0,
            PredicateNode::ExistsCheck { relation, .. } => {
                let hint = self
                    .catalog
                    .describe(relation)
                    .map(|d| d.selectivity.clamp(0.0, 1.0))
                    .unwrap_or(1.0);
                2.0 + hint
            }
        }
    }
}
