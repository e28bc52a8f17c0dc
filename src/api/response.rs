//! API response types
//!
//! Key names are camelCase on the wire.

use serde::Serialize;

use crate::dataset::Row;
use crate::executor::{ExecutionResult, ExecutionStats};
use crate::planner::{Explanation, StructuredQuery, ValidationResult};

/// Note reported when validation found nothing
pub const VALIDATED_NOTE: &str = "Query validated successfully";

/// Validation part of a query response
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationNotes {
    /// Issues, or a single success note
    pub notes: Vec<String>,
    pub complexity: f64,
}

impl From<&ValidationResult> for ValidationNotes {
    fn from(validation: &ValidationResult) -> Self {
        let notes = if validation.issues.is_empty() {
            vec![VALIDATED_NOTE.to_string()]
        } else {
            validation.issues.clone()
        };
        Self {
            notes,
            complexity: validation.complexity,
        }
    }
}

/// Response of an executed query
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResponse {
    pub data: Vec<Row>,
    pub sql_query: String,
    pub stats: ExecutionStats,
    pub query_analysis: StructuredQuery,
    pub validation: ValidationNotes,
}

impl QueryResponse {
    pub fn new(analysis: StructuredQuery, validation: &ValidationResult, result: ExecutionResult) -> Self {
        Self {
            data: result.data,
            sql_query: result.canonical_query,
            stats: result.stats,
            query_analysis: analysis,
            validation: ValidationNotes::from(validation),
        }
    }
}

/// Response of `/explain`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    pub original_query: String,
    pub query_analysis: StructuredQuery,
    pub validation: ValidationResult,
    pub explanation: Explanation,
}

/// Response of `/validate`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateResponse {
    pub original_query: String,
    pub query_analysis: StructuredQuery,
    pub validation: ValidationResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::QueryValidator;

    #[test]
    fn test_notes_on_success() {
        let validation = QueryValidator::default().validate(&StructuredQuery::new("q"));
        let notes = ValidationNotes::from(&validation);
        assert_eq!(notes.notes, vec![VALIDATED_NOTE]);
        assert_eq!(notes.complexity, validation.complexity);
    }

    #[test]
    fn test_notes_carry_issues() {
        let query = StructuredQuery::new("q").with_fields(["bogus"]);
        let validation = QueryValidator::default().validate(&query);
        let notes = ValidationNotes::from(&validation);
        assert_eq!(notes.notes, vec!["Invalid fields requested: bogus"]);
    }
}
