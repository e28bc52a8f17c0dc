//! Explain output for structured queries
//!
//! Produces deterministic, human-readable descriptions of what a query
//! asks for, with placeholders where a part is absent.

use std::fmt;

use serde::Serialize;

use super::ast::{SortSpec, StructuredQuery};

/// Placeholder for an absent projection
pub const ALL_FIELDS: &str = "All fields";
/// Placeholder for an absent sort
pub const NO_SORTING: &str = "No sorting";
/// Placeholder for an absent limit
pub const NO_LIMIT: &str = "No limit";

/// Sort part of an explanation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum SortExplanation {
    Sorted(SortSpec),
    Unsorted(&'static str),
}

/// Limit part of an explanation
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum LimitExplanation {
    Limited(u64),
    Unlimited(&'static str),
}

/// Explanation of a structured query
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Explanation {
    pub filters: Vec<String>,
    pub fields: Vec<String>,
    pub sort: SortExplanation,
    pub limit: LimitExplanation,
}

impl Explanation {
    pub fn from_query(query: &StructuredQuery) -> Self {
        let fields = if query.selects_all() {
            vec![ALL_FIELDS.to_string()]
        } else {
            query.fields.clone()
        };

        let sort = match &query.sort {
            Some(spec) => SortExplanation::Sorted(spec.clone()),
            None => SortExplanation::Unsorted(NO_SORTING),
        };

        let limit = match query.effective_limit() {
            Some(n) => LimitExplanation::Limited(n),
            None => LimitExplanation::Unlimited(NO_LIMIT),
        };

        Self {
            filters: query.filters.clone(),
            fields,
            sort,
            limit,
        }
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "=== EXPLAIN ===")?;

        if self.filters.is_empty() {
            writeln!(f, "Filters: none")?;
        } else {
            writeln!(f, "Filters:")?;
            for filter in &self.filters {
                writeln!(f, "  - {}", filter)?;
            }
        }

        writeln!(f, "Fields: {}", self.fields.join(", "))?;

        match &self.sort {
            SortExplanation::Sorted(spec) => writeln!(f, "Sort: {} {}", spec.field, spec.order)?,
            SortExplanation::Unsorted(text) => writeln!(f, "Sort: {}", text)?,
        }

        match &self.limit {
            LimitExplanation::Limited(n) => writeln!(f, "Limit: {}", n)?,
            LimitExplanation::Unlimited(text) => writeln!(f, "Limit: {}", text)?,
        }

        Ok(())
    }
}
