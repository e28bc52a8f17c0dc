//! Structured query validation
//!
//! Checks performed, in order:
//! - Every projected field exists in the schema
//! - Every filter contains an operator token
//!
//! Filters on unknown fields and malformed filter values pass validation;
//! they degrade at evaluation time instead.

use serde::Serialize;

use crate::schema::SchemaRegistry;

use super::ast::StructuredQuery;
use super::complexity::complexity_score;
use super::filter::has_operator;

/// Outcome of validating a structured query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True iff `issues` is empty
    pub is_valid: bool,
    /// Human-readable issues, in check order
    pub issues: Vec<String>,
    /// Complexity score in `[0, 10]`
    pub complexity: f64,
}

impl ValidationResult {
    fn from_issues(issues: Vec<String>, complexity: f64) -> Self {
        Self {
            is_valid: issues.is_empty(),
            issues,
            complexity,
        }
    }
}

/// Validates structured queries against the schema registry.
///
/// Validation does not mutate the query and is deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct QueryValidator {
    registry: SchemaRegistry,
}

impl QueryValidator {
    pub fn new(registry: SchemaRegistry) -> Self {
        Self { registry }
    }

    /// Validates a query and scores its complexity.
    pub fn validate(&self, query: &StructuredQuery) -> ValidationResult {
        let mut issues = Vec::new();

        let unknown_fields: Vec<&str> = query
            .fields
            .iter()
            .map(String::as_str)
            .filter(|name| !self.registry.contains(name))
            .collect();
        if !unknown_fields.is_empty() {
            issues.push(format!(
                "Invalid fields requested: {}",
                unknown_fields.join(", ")
            ));
        }

        let bad_filters: Vec<&str> = query
            .filters
            .iter()
            .map(String::as_str)
            .filter(|expr| !has_operator(expr))
            .collect();
        if !bad_filters.is_empty() {
            issues.push(format!(
                "Some filters have invalid syntax: {}",
                bad_filters.join(", ")
            ));
        }

        ValidationResult::from_issues(issues, self.complexity(query))
    }

    /// Complexity score using the registry's field count
    pub fn complexity(&self, query: &StructuredQuery) -> f64 {
        complexity_score(query, self.registry.field_count())
    }
}
