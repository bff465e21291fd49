//! Result types for assembled searches

use serde_json::Value;

use crate::executor::{EntityId, EntityRow};

/// A fully projected primary entity.
///
/// Carries the entity's own columns plus the mandatory joined attributes.
/// Constructed once per surviving identifier; never duplicated, even if
/// the entity matched an optional relation through multiple related rows.
#[derive(Debug, Clone, PartialEq)]
pub struct ResultEntity {
    /// Primary-entity identifier
    pub id: EntityId,
    /// Projected columns as JSON
    pub body: Value,
}

impl ResultEntity {
    pub(crate) fn from_row(row: EntityRow) -> Self {
        Self {
            id: row.id,
            body: row.body,
        }
    }

    /// Returns the identifier
    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the projected body
    pub fn body(&self) -> &Value {
        &self.body
    }
}

/// Lazy, finite, non-restartable sequence of result entities sized to the
/// pagination window.
#[derive(Debug)]
pub struct ResultStream {
    entities: std::vec::IntoIter<ResultEntity>,
}

impl ResultStream {
    pub(crate) fn new(entities: Vec<ResultEntity>) -> Self {
        Self {
            entities: entities.into_iter(),
        }
    }

    /// Entities not yet consumed
    pub fn remaining(&self) -> usize {
        self.entities.len()
    }
}

impl Iterator for ResultStream {
    type Item = ResultEntity;

    fn next(&mut self) -> Option<ResultEntity> {
        self.entities.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.entities.size_hint()
    }
}

impl ExactSizeIterator for ResultStream {}
