//! Relation descriptors
//!
//! A descriptor declares everything the compiler and orderer need to know
//! about one relation ahead of time. No runtime schema discovery happens in
//! this crate.

use serde::{Deserialize, Serialize};

/// Cardinality of a relation relative to the primary entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cardinality {
    /// One-to-one relation every primary entity must resolve (e.g. the
    /// posting's category). Compiles to a mandatory join, never to an
    /// existence check.
    MandatoryOneToOne,
    /// Many-to-many relation that may or may not constrain results
    /// (e.g. required skills). Compiles to an existence check.
    OptionalManyToMany,
}

impl Cardinality {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cardinality::MandatoryOneToOne => "mandatory_one_to_one",
            Cardinality::OptionalManyToMany => "optional_many_to_many",
        }
    }

    /// Returns true for mandatory one-to-one relations
    pub fn is_mandatory(&self) -> bool {
        matches!(self, Cardinality::MandatoryOneToOne)
    }
}

/// Join key pair for a relation.
///
/// For a mandatory relation this is the foreign key on the primary entity
/// paired with the target's key column. For an optional relation it names
/// the junction-table columns.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JoinKey {
    /// Column on the primary entity side (or junction column pointing at it)
    pub primary_column: String,
    /// Column on the related side
    pub related_column: String,
}

impl JoinKey {
    pub fn new(primary_column: impl Into<String>, related_column: impl Into<String>) -> Self {
        Self {
            primary_column: primary_column.into(),
            related_column: related_column.into(),
        }
    }
}

/// Static description of one relation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationDescriptor {
    /// Relation name, unique within the catalog
    pub name: String,
    /// Cardinality relative to the primary entity
    pub cardinality: Cardinality,
    /// Join key pair
    pub join: JoinKey,
    /// Whether the relation's attributes participate in keyword matching
    #[serde(default)]
    pub keyword_eligible: bool,
    /// Expected match ratio in (0, 1]; lower means more selective.
    ///
    /// A static hint, overridable per deployment. Existence checks are
    /// ordered ascending by this value so the rarest relations narrow the
    /// candidate set first.
    #[serde(default = "default_selectivity")]
    pub selectivity: f64,
}

fn default_selectivity() -> f64 {
    0.5
}

impl RelationDescriptor {
    /// Creates a descriptor with default keyword eligibility and selectivity
    pub fn new(name: impl Into<String>, cardinality: Cardinality, join: JoinKey) -> Self {
        Self {
            name: name.into(),
            cardinality,
            join,
            keyword_eligible: false,
            selectivity: default_selectivity(),
        }
    }

    /// Marks the relation as keyword-eligible
    pub fn with_keyword_eligible(mut self) -> Self {
        self.keyword_eligible = true;
        self
    }

    /// Sets the selectivity hint
    pub fn with_selectivity(mut self, selectivity: f64) -> Self {
        self.selectivity = selectivity;
        self
    }
}
