//! Result types for query execution

use serde::Serialize;

use crate::dataset::Row;

/// Execution statistics
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionStats {
    /// Number of rows in `data`
    pub records_returned: usize,
    /// Measured wall-clock time; informational only
    pub execution_time_ms: f64,
    /// Complexity score of the executed query
    pub complexity: f64,
}

/// Result of query execution
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExecutionResult {
    /// Filtered (and projected) rows
    pub data: Vec<Row>,
    pub stats: ExecutionStats,
    /// Canonical query string
    pub canonical_query: String,
}

impl ExecutionResult {
    /// Returns true if no rows matched
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the number of rows
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns an iterator over the rows
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.data.iter()
    }
}
