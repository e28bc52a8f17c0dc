//! Compiled filter sets
//!
//! Parses every filter expression once per query and collects the
//! canonical clause fragments, deduplicated by rendered text in first-seen
//! order. Clause collection does not depend on the records scanned.

use std::collections::HashSet;

use crate::dataset::Record;
use crate::planner::FilterExpr;

/// A query's filters, conjoined
#[derive(Debug, Clone, Default)]
pub struct FilterSet {
    exprs: Vec<FilterExpr>,
    clauses: Vec<String>,
}

impl FilterSet {
    /// Parses filter expressions in order
    pub fn parse<S: AsRef<str>>(filters: &[S]) -> Self {
        let mut exprs = Vec::with_capacity(filters.len());
        let mut clauses = Vec::new();
        let mut seen = HashSet::new();

        for filter in filters {
            let expr = FilterExpr::parse(filter.as_ref());
            if let Some(clause) = expr.clause_text() {
                if seen.insert(clause.clone()) {
                    clauses.push(clause);
                }
            }
            exprs.push(expr);
        }

        Self { exprs, clauses }
    }

    /// True iff every filter holds (AND); an empty set matches everything
    pub fn matches(&self, record: &Record) -> bool {
        self.exprs.iter().all(|expr| expr.matches(record))
    }

    /// Deduplicated clause fragments, first-seen order
    pub fn clauses(&self) -> &[String] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }
}
