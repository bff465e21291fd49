//! Shared in-memory storage engine for integration tests
//!
//! Implements the storage capability over plain vectors: a posting table,
//! target tables for the mandatory relations, and junction rows for the
//! optional relations. Deliberately naive; the point is observable,
//! deterministic behavior, not speed.

use std::cmp::Ordering;
use std::sync::atomic::{AtomicUsize, Ordering as AtomicOrdering};
use std::sync::Mutex;

use regex::Regex;
use serde_json::{json, Value};

use jobsearch::catalog::JoinKey;
use jobsearch::compiler::{FilterOp, MatchPredicate, Page, ScalarFilter, SortDirection, SortSpec};
use jobsearch::executor::{CandidateSet, EntityId, EntityRow, ExecResult, StorageCapability};
use jobsearch::{Cardinality, RelationCatalog, RelationDescriptor};

/// A related row: the posting it attaches to, its own id, and its name
#[derive(Debug, Clone)]
pub struct RelatedRow {
    pub posting_id: EntityId,
    pub id: u64,
    pub name: String,
}

/// One row in a mandatory relation's target table
#[derive(Debug, Clone)]
pub struct TargetRow {
    pub id: u64,
    pub name: String,
}

#[derive(Debug, Default)]
pub struct MemoryEngine {
    postings: Vec<(EntityId, Value)>,
    targets: Vec<(String, Vec<TargetRow>)>,
    junctions: Vec<(String, Vec<RelatedRow>)>,
    pub scan_calls: AtomicUsize,
    pub join_calls: AtomicUsize,
    pub exists_calls: AtomicUsize,
    pub fetch_calls: AtomicUsize,
    /// Candidate-set size after each narrowing call, in call order
    pub narrow_sizes: Mutex<Vec<usize>>,
}

impl MemoryEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_posting(&mut self, id: EntityId, body: Value) {
        self.postings.push((id, body));
    }

    pub fn add_target(&mut self, relation: &str, id: u64, name: &str) {
        let row = TargetRow {
            id,
            name: name.to_string(),
        };
        match self.targets.iter_mut().find(|(r, _)| r == relation) {
            Some((_, rows)) => rows.push(row),
            None => self.targets.push((relation.to_string(), vec![row])),
        }
    }

    pub fn add_related(&mut self, relation: &str, posting_id: EntityId, id: u64, name: &str) {
        let row = RelatedRow {
            posting_id,
            id,
            name: name.to_string(),
        };
        match self.junctions.iter_mut().find(|(r, _)| r == relation) {
            Some((_, rows)) => rows.push(row),
            None => self.junctions.push((relation.to_string(), vec![row])),
        }
    }

    pub fn narrowing_calls(&self) -> usize {
        self.scan_calls.load(AtomicOrdering::SeqCst)
            + self.join_calls.load(AtomicOrdering::SeqCst)
            + self.exists_calls.load(AtomicOrdering::SeqCst)
    }

    fn record_narrow(&self, set: &CandidateSet) {
        self.narrow_sizes.lock().unwrap().push(set.len());
    }

    fn related(&self, relation: &str) -> &[RelatedRow] {
        self.junctions
            .iter()
            .find(|(r, _)| r == relation)
            .map(|(_, rows)| rows.as_slice())
            .unwrap_or(&[])
    }

    fn target(&self, relation: &str) -> &[TargetRow] {
        self.targets
            .iter()
            .find(|(r, _)| r == relation)
            .map(|(_, rows)| rows.as_slice())
            .unwrap_or(&[])
    }

    fn matches_filter(body: &Value, filter: &ScalarFilter) -> bool {
        let actual = match body.get(&filter.column) {
            Some(v) if !v.is_null() => v,
            _ => return false,
        };
        match &filter.op {
            FilterOp::Eq(expected) => actual == expected,
            FilterOp::Gte(bound) => compare_values(actual, bound) != Ordering::Less,
            FilterOp::Gt(bound) => compare_values(actual, bound) == Ordering::Greater,
            FilterOp::Lte(bound) => compare_values(actual, bound) != Ordering::Greater,
            FilterOp::Lt(bound) => compare_values(actual, bound) == Ordering::Less,
            FilterOp::Contains(needle) => actual
                .as_str()
                .map(|s| s.to_lowercase().contains(&needle.to_lowercase()))
                .unwrap_or(false),
        }
    }

    fn matches_related(row: &RelatedRow, predicate: &MatchPredicate) -> bool {
        match predicate {
            MatchPredicate::Keyword(needle) => {
                row.name.to_lowercase().contains(&needle.to_lowercase())
            }
            MatchPredicate::Pattern(pattern) => Regex::new(pattern)
                .map(|re| re.is_match(&row.name))
                .unwrap_or(false),
            MatchPredicate::IdEquals(id) => row.id == *id,
            MatchPredicate::IdIn(ids) => ids.contains(&row.id),
        }
    }
}

impl StorageCapability for MemoryEngine {
    fn scan_primary(&self, filters: &[ScalarFilter]) -> ExecResult<CandidateSet> {
        self.scan_calls.fetch_add(1, AtomicOrdering::SeqCst);
        let set: CandidateSet = self
            .postings
            .iter()
            .filter(|(_, body)| filters.iter().all(|f| Self::matches_filter(body, f)))
            .map(|(id, _)| *id)
            .collect();
        self.record_narrow(&set);
        Ok(set)
    }

    fn join_narrow(
        &self,
        candidates: &CandidateSet,
        relation: &str,
        join: &JoinKey,
    ) -> ExecResult<CandidateSet> {
        self.join_calls.fetch_add(1, AtomicOrdering::SeqCst);
        let targets = self.target(relation);
        let set: CandidateSet = self
            .postings
            .iter()
            .filter(|(id, _)| candidates.contains(*id))
            .filter(|(_, body)| {
                body.get(&join.primary_column)
                    .and_then(Value::as_u64)
                    .map(|fk| targets.iter().any(|t| t.id == fk))
                    .unwrap_or(false)
            })
            .map(|(id, _)| *id)
            .collect();
        self.record_narrow(&set);
        Ok(set)
    }

    fn exists_narrow(
        &self,
        candidates: &CandidateSet,
        relation: &str,
        _join: &JoinKey,
        predicate: &MatchPredicate,
    ) -> ExecResult<CandidateSet> {
        self.exists_calls.fetch_add(1, AtomicOrdering::SeqCst);
        let rows = self.related(relation);
        let set: CandidateSet = candidates
            .iter()
            .filter(|&id| {
                rows.iter()
                    .any(|row| row.posting_id == id && Self::matches_related(row, predicate))
            })
            .collect();
        self.record_narrow(&set);
        Ok(set)
    }

    fn fetch_projection(
        &self,
        ids: &CandidateSet,
        sort: Option<&SortSpec>,
        page: Page,
    ) -> ExecResult<Vec<EntityRow>> {
        self.fetch_calls.fetch_add(1, AtomicOrdering::SeqCst);

        let mut rows: Vec<EntityRow> = self
            .postings
            .iter()
            .filter(|(id, _)| ids.contains(*id))
            .map(|(id, body)| {
                let mut projected = body.clone();
                // Attach the mandatory joined attributes, never optional ones
                for (relation, targets) in &self.targets {
                    let fk_column = format!("{relation}_id");
                    if let Some(fk) = body.get(&fk_column).and_then(Value::as_u64) {
                        if let Some(target) = targets.iter().find(|t| t.id == fk) {
                            projected[format!("{relation}_name")] = json!(target.name);
                        }
                    }
                }
                EntityRow::new(*id, projected)
            })
            .collect();

        if let Some(spec) = sort {
            rows.sort_by(|a, b| {
                let ordering = match (a.body.get(&spec.column), b.body.get(&spec.column)) {
                    (Some(x), Some(y)) => compare_values(x, y),
                    (None, None) => Ordering::Equal,
                    (None, Some(_)) => Ordering::Less,
                    (Some(_), None) => Ordering::Greater,
                };
                match spec.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }

        Ok(rows
            .into_iter()
            .skip(page.offset as usize)
            .take(page.limit as usize)
            .collect())
    }
}

fn compare_values(a: &Value, b: &Value) -> Ordering {
    match (a, b) {
        (Value::Number(x), Value::Number(y)) => {
            let xf = x.as_f64().unwrap_or(0.0);
            let yf = y.as_f64().unwrap_or(0.0);
            xf.partial_cmp(&yf).unwrap_or(Ordering::Equal)
        }
        (Value::String(x), Value::String(y)) => x.cmp(y),
        (Value::Bool(x), Value::Bool(y)) => x.cmp(y),
        _ => Ordering::Equal,
    }
}

/// Catalog used across the integration tests: two mandatory relations and
/// three optional ones with distinct selectivity hints.
pub fn job_catalog() -> RelationCatalog {
    RelationCatalog::new([
        RelationDescriptor::new(
            "category",
            Cardinality::MandatoryOneToOne,
            JoinKey::new("category_id", "id"),
        ),
        RelationDescriptor::new(
            "employment_type",
            Cardinality::MandatoryOneToOne,
            JoinKey::new("employment_type_id", "id"),
        ),
        RelationDescriptor::new(
            "skills",
            Cardinality::OptionalManyToMany,
            JoinKey::new("posting_id", "skill_id"),
        )
        .with_keyword_eligible()
        .with_selectivity(0.1),
        RelationDescriptor::new(
            "tools",
            Cardinality::OptionalManyToMany,
            JoinKey::new("posting_id", "tool_id"),
        )
        .with_keyword_eligible()
        .with_selectivity(0.3),
        RelationDescriptor::new(
            "qualifications",
            Cardinality::OptionalManyToMany,
            JoinKey::new("posting_id", "qualification_id"),
        )
        .with_selectivity(0.8),
    ])
    .unwrap()
}

/// Three open postings with categories, employment types and skill rows.
/// Posting 1 carries "Python" twice to exercise deduplication; posting 3
/// carries it once; posting 2 not at all.
pub fn seeded_engine() -> MemoryEngine {
    let mut engine = MemoryEngine::new();

    engine.add_target("category", 10, "Engineering");
    engine.add_target("category", 11, "Data");
    engine.add_target("employment_type", 20, "Full-time");
    engine.add_target("employment_type", 21, "Contract");

    for (id, title, category, employment) in [
        (1u64, "Backend Engineer", 10u64, 20u64),
        (2, "Frontend Engineer", 10, 20),
        (3, "Data Analyst", 11, 21),
    ] {
        engine.add_posting(
            id,
            json!({
                "id": id,
                "title": title,
                "status": "open",
                "deleted": false,
                "category_id": category,
                "employment_type_id": employment,
                "posted_at": format!("2026-08-{:02}", id),
            }),
        );
    }

    engine.add_related("skills", 1, 100, "Python");
    engine.add_related("skills", 1, 101, "Python scripting");
    engine.add_related("skills", 2, 102, "TypeScript");
    engine.add_related("skills", 3, 100, "Python");
    engine.add_related("tools", 1, 200, "Docker");
    engine.add_related("tools", 3, 201, "Airflow");
    engine.add_related("qualifications", 2, 300, "BSc");

    engine
}
