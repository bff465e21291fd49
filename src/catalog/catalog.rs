//! The relation catalog
//!
//! Insertion-ordered, immutable after construction. Declaration order is
//! significant: mandatory joins are emitted in it, which keeps compilation
//! deterministic.

use std::collections::HashMap;

use thiserror::Error;

use super::descriptor::{Cardinality, RelationDescriptor};

/// Catalog lookup errors
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    /// Relation name not registered in the catalog
    #[error("Unknown relation '{0}'")]
    UnknownRelation(String),

    /// Two descriptors declared under the same name
    #[error("Duplicate relation '{0}' in catalog")]
    DuplicateRelation(String),
}

impl CatalogError {
    /// Stable string code for logs and API surfaces
    pub fn code(&self) -> &'static str {
        match self {
            CatalogError::UnknownRelation(_) => "SEARCH_UNKNOWN_RELATION",
            CatalogError::DuplicateRelation(_) => "SEARCH_DUPLICATE_RELATION",
        }
    }
}

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Static, read-only registry of relation descriptors.
#[derive(Debug, Clone)]
pub struct RelationCatalog {
    relations: Vec<RelationDescriptor>,
    by_name: HashMap<String, usize>,
}

impl RelationCatalog {
    /// Builds a catalog from descriptors, preserving declaration order.
    pub fn new(descriptors: impl IntoIterator<Item = RelationDescriptor>) -> CatalogResult<Self> {
        let mut relations = Vec::new();
        let mut by_name = HashMap::new();

        for desc in descriptors {
            if by_name.contains_key(&desc.name) {
                return Err(CatalogError::DuplicateRelation(desc.name));
            }
            by_name.insert(desc.name.clone(), relations.len());
            relations.push(desc);
        }

        Ok(Self { relations, by_name })
    }

    /// Looks up a relation descriptor by name.
    pub fn describe(&self, relation: &str) -> CatalogResult<&RelationDescriptor> {
        self.by_name
            .get(relation)
            .map(|&i| &self.relations[i])
            .ok_or_else(|| CatalogError::UnknownRelation(relation.to_string()))
    }

    /// Iterates descriptors in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &RelationDescriptor> {
        self.relations.iter()
    }

    /// Iterates mandatory one-to-one relations in declaration order.
    pub fn mandatory_relations(&self) -> impl Iterator<Item = &RelationDescriptor> {
        self.relations
            .iter()
            .filter(|d| d.cardinality == Cardinality::MandatoryOneToOne)
    }

    /// Number of registered relations
    pub fn len(&self) -> usize {
        self.relations.len()
    }

    /// Returns true if no relations are registered
    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }
}
