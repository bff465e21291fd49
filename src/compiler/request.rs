//! Search request structures
//!
//! Defines the immutable request value the compiler consumes: mandatory
//! scalar filters, optional relation criteria, sort and pagination.

use serde_json::Value;

/// Scalar filter operation on a primary-entity column
#[derive(Debug, Clone, PartialEq)]
pub enum FilterOp {
    /// Equality: column = value
    Eq(Value),
    /// Greater than or equal: column >= value
    Gte(Value),
    /// Greater than: column > value
    Gt(Value),
    /// Less than or equal: column <= value
    Lte(Value),
    /// Less than: column < value
    Lt(Value),
    /// Case-insensitive substring on a text column (free-text keyword)
    Contains(String),
}

impl FilterOp {
    /// Returns the operation name for display output
    pub fn op_name(&self) -> &'static str {
        match self {
            FilterOp::Eq(_) => "eq",
            FilterOp::Gte(_) => "gte",
            FilterOp::Gt(_) => "gt",
            FilterOp::Lte(_) => "lte",
            FilterOp::Lt(_) => "lt",
            FilterOp::Contains(_) => "contains",
        }
    }
}

/// A single scalar filter (column + operation)
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarFilter {
    /// Primary-entity column name
    pub column: String,
    /// Filter operation
    pub op: FilterOp,
}

impl ScalarFilter {
    pub fn eq(column: impl Into<String>, value: Value) -> Self {
        Self {
            column: column.into(),
            op: FilterOp::Eq(value),
        }
    }

    pub fn gte(column: impl Into<String>, value: Value) -> Self {
        Self {
            column: column.into(),
            op: FilterOp::Gte(value),
        }
    }

    pub fn lte(column: impl Into<String>, value: Value) -> Self {
        Self {
            column: column.into(),
            op: FilterOp::Lte(value),
        }
    }

    pub fn contains(column: impl Into<String>, needle: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            op: FilterOp::Contains(needle.into()),
        }
    }
}

/// Match predicate evaluated against a related row inside an existence check
#[derive(Debug, Clone, PartialEq)]
pub enum MatchPredicate {
    /// Case-insensitive substring on the relation's keyword attribute
    Keyword(String),
    /// Regular-expression match on the relation's keyword attribute.
    /// Validated at compile time, evaluated by the storage capability.
    Pattern(String),
    /// Related row identified by exact id
    IdEquals(u64),
    /// Related row identified by any of the given ids
    IdIn(Vec<u64>),
}

impl MatchPredicate {
    /// Returns true for keyword-style predicates (substring or pattern)
    pub fn is_keyword(&self) -> bool {
        matches!(self, MatchPredicate::Keyword(_) | MatchPredicate::Pattern(_))
    }
}

/// A criterion constraining one optional relation
#[derive(Debug, Clone, PartialEq)]
pub struct RelationCriterion {
    /// Relation name (must be registered in the catalog)
    pub relation: String,
    /// Predicate a related row must satisfy
    pub predicate: MatchPredicate,
}

impl RelationCriterion {
    pub fn new(relation: impl Into<String>, predicate: MatchPredicate) -> Self {
        Self {
            relation: relation.into(),
            predicate,
        }
    }
}

/// Sort direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// Sort specification over a primary-entity column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    /// Column to sort by
    pub column: String,
    /// Sort direction
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Asc,
        }
    }

    pub fn desc(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            direction: SortDirection::Desc,
        }
    }
}

/// Pagination window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page {
    /// Rows to skip
    pub offset: u64,
    /// Maximum rows to return
    pub limit: u64,
}

impl Page {
    pub fn new(offset: u64, limit: u64) -> Self {
        Self { offset, limit }
    }

    /// First page with the given size
    pub fn first(limit: u64) -> Self {
        Self { offset: 0, limit }
    }
}

/// Immutable search request.
///
/// Built once, compiled once. Criterion order is preserved; the compiler
/// emits nodes in declaration order so compilation stays deterministic.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchRequest {
    /// Mandatory scalar filters (status, deletion flag, category/type ids)
    pub filters: Vec<ScalarFilter>,
    /// Optional relation criteria, at most one per relation
    pub criteria: Vec<RelationCriterion>,
    /// Sort specification
    pub sort: Option<SortSpec>,
    /// Pagination window
    pub page: Page,
}

impl SearchRequest {
    /// Creates a request with the given pagination window
    pub fn new(page: Page) -> Self {
        Self {
            filters: Vec::new(),
            criteria: Vec::new(),
            sort: None,
            page,
        }
    }

    /// Adds a scalar filter
    pub fn with_filter(mut self, filter: ScalarFilter) -> Self {
        self.filters.push(filter);
        self
    }

    /// Adds an equality filter
    pub fn filter_eq(self, column: impl Into<String>, value: Value) -> Self {
        self.with_filter(ScalarFilter::eq(column, value))
    }

    /// Filters out soft-deleted postings
    pub fn exclude_deleted(self) -> Self {
        self.with_filter(ScalarFilter::eq("deleted", Value::Bool(false)))
    }

    /// Adds a free-text keyword filter on a primary text column
    pub fn keyword(self, column: impl Into<String>, needle: impl Into<String>) -> Self {
        self.with_filter(ScalarFilter::contains(column, needle))
    }

    /// Adds a relation criterion
    pub fn with_criterion(mut self, criterion: RelationCriterion) -> Self {
        self.criteria.push(criterion);
        self
    }

    /// Sets the sort specification
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }
}
