//! Query executor for nlquery
//!
//! Executes structured queries against a read-only record slice.
//!
//! Execution flow (strict order):
//! 1. Compile filters and collect canonical clauses
//! 2. Filter records (AND of all predicates), in scan order
//! 3. Apply sort (if specified and ordering is applied)
//! 4. Apply limit (if specified and ordering is applied)
//! 5. Project requested fields
//! 6. Render the canonical query string and assemble stats

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::dataset::{Record, Row};
use crate::planner::{complexity_score, StructuredQuery};
use crate::schema::{Field, SchemaRegistry};

use super::filters::FilterSet;
use super::render::render_query;
use super::result::{ExecutionResult, ExecutionStats};
use super::sorter::ResultSorter;

/// Whether sort and limit shape the returned rows
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingPolicy {
    /// Rows are sorted and truncated as rendered
    #[default]
    Apply,
    /// Sort and limit only appear in the rendered query; rows keep scan order
    RenderOnly,
}

/// Query executor over in-memory records.
///
/// Execution is deterministic apart from the measured time: the same query
/// over the same records yields the same rows and query string.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryExecutor {
    registry: SchemaRegistry,
    ordering: OrderingPolicy,
}

impl QueryExecutor {
    /// Creates a new executor
    pub fn new(registry: SchemaRegistry, ordering: OrderingPolicy) -> Self {
        Self { registry, ordering }
    }

    pub fn ordering(&self) -> OrderingPolicy {
        self.ordering
    }

    /// Executes a query and returns results. Never fails.
    pub fn execute(&self, query: &StructuredQuery, records: &[Record]) -> ExecutionResult {
        let started = Instant::now();

        // Step 1: Compile filters
        let filters = FilterSet::parse(&query.filters);

        // Step 2: Filter
        let mut matched: Vec<&Record> = records.iter().filter(|r| filters.matches(r)).collect();

        // Steps 3-4: Sort and limit
        if self.ordering == OrderingPolicy::Apply {
            if let Some(sort_spec) = &query.sort {
                ResultSorter::sort(&mut matched, sort_spec);
            }
            if let Some(limit) = query.effective_limit() {
                matched.truncate(usize::try_from(limit).unwrap_or(usize::MAX));
            }
        }

        // Step 5: Project
        let projection = self.projection(query);
        let data: Vec<Row> = matched
            .into_iter()
            .map(|record| match &projection {
                Some(fields) => Row::project(record, fields.iter().copied()),
                None => Row::full(record),
            })
            .collect();

        // Step 6: Render and assemble stats
        let canonical_query = render_query(self.registry.collection(), query, filters.clauses());

        ExecutionResult {
            stats: ExecutionStats {
                records_returned: data.len(),
                execution_time_ms: started.elapsed().as_secs_f64() * 1000.0,
                complexity: complexity_score(query, self.registry.field_count()),
            },
            data,
            canonical_query,
        }
    }

    /// Resolved projection; `None` selects every field.
    ///
    /// Names that are not schema fields are dropped.
    fn projection(&self, query: &StructuredQuery) -> Option<Vec<Field>> {
        if query.selects_all() {
            return None;
        }
        Some(
            query
                .fields
                .iter()
                .filter_map(|name| self.registry.lookup(name).map(|def| def.field))
                .collect(),
        )
    }
}
