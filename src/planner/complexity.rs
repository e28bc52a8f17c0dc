//! Query complexity score
//!
//! `2 × filters + 0.5 × breadth + 1 (sort) + 0.5 (limit)`, capped at 10.
//! Breadth is the projection size, or the schema's field count when every
//! field is selected.

use super::ast::StructuredQuery;

/// Upper bound of the complexity score
pub const MAX_COMPLEXITY: f64 = 10.0;

const FILTER_WEIGHT: f64 = 2.0;
const FIELD_WEIGHT: f64 = 0.5;
const SORT_WEIGHT: f64 = 1.0;
const LIMIT_WEIGHT: f64 = 0.5;

/// Deterministic complexity score in `[0, 10]`
pub fn complexity_score(query: &StructuredQuery, total_fields: usize) -> f64 {
    let breadth = if query.fields.is_empty() {
        total_fields
    } else {
        query.fields.len()
    };

    let mut score = FILTER_WEIGHT * query.filters.len() as f64;
    score += FIELD_WEIGHT * breadth as f64;
    if query.sort.is_some() {
        score += SORT_WEIGHT;
    }
    if query.effective_limit().is_some() {
        score += LIMIT_WEIGHT;
    }
    score.min(MAX_COMPLEXITY)
}
