//! # API Errors
//!
//! Request-level failures and their HTTP mapping. Validation failures are
//! only errors when the handler is configured to reject invalid queries.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::planner::StructuredQuery;
use crate::translate::TranslationError;

/// Result type for API operations
pub type ApiResult<T> = Result<T, ApiError>;

/// Operation a request was performing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Query,
    Explain,
    Validate,
}

impl Operation {
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Query => "query",
            Operation::Explain => "explain",
            Operation::Validate => "validate",
        }
    }

    /// Client-facing message for an internal failure
    pub fn failure_message(&self) -> &'static str {
        match self {
            Operation::Query => "Internal server error processing query",
            Operation::Explain => "Internal server error explaining query",
            Operation::Validate => "Internal server error validating query",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// API errors
#[derive(Debug, Error)]
pub enum ApiError {
    // ==================
    // Client Errors (4xx)
    // ==================
    /// No query text supplied
    #[error("Query parameter is required")]
    MissingQuery,

    /// Body is not a JSON object of the expected shape
    #[error("Invalid request body: {0}")]
    InvalidBody(String),

    /// API key absent or unknown
    #[error("Invalid or missing API key")]
    Unauthorized,

    /// Structured query failed validation
    #[error("Query validation failed")]
    Rejected {
        issues: Vec<String>,
        analysis: StructuredQuery,
    },

    // ==================
    // Server Errors (5xx)
    // ==================
    /// Translation boundary failed
    #[error("{}", .operation.failure_message())]
    Translation {
        operation: Operation,
        #[source]
        source: TranslationError,
    },
}

impl ApiError {
    pub fn translation(operation: Operation, source: TranslationError) -> Self {
        ApiError::Translation { operation, source }
    }

    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MissingQuery => StatusCode::BAD_REQUEST,
            ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Rejected { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Translation { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorBody {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub issues: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_analysis: Option<StructuredQuery>,
}

impl From<ApiError> for ErrorBody {
    fn from(err: ApiError) -> Self {
        let error = err.to_string();
        match err {
            ApiError::Rejected { issues, analysis } => Self {
                error,
                details: None,
                issues: Some(issues),
                query_analysis: Some(analysis),
            },
            // Only the query route reports the underlying cause
            ApiError::Translation {
                operation: Operation::Query,
                source,
            } => Self {
                error,
                details: Some(source.to_string()),
                issues: None,
                query_analysis: None,
            },
            _ => Self {
                error,
                details: None,
                issues: None,
                query_analysis: None,
            },
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorBody::from(self));
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body(err: ApiError) -> serde_json::Value {
        serde_json::to_value(ErrorBody::from(err)).unwrap()
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::MissingQuery.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(ApiError::Unauthorized.status_code(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            ApiError::Rejected {
                issues: vec![],
                analysis: StructuredQuery::default()
            }
            .status_code(),
            StatusCode::UNPROCESSABLE_ENTITY
        );
        assert_eq!(
            ApiError::translation(Operation::Explain, TranslationError::EmptyResponse).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_simple_bodies() {
        assert_eq!(
            body(ApiError::MissingQuery),
            json!({"error": "Query parameter is required"})
        );
        assert_eq!(
            body(ApiError::Unauthorized),
            json!({"error": "Invalid or missing API key"})
        );
    }

    #[test]
    fn test_query_translation_failure_has_details() {
        let err = ApiError::translation(Operation::Query, TranslationError::EmptyResponse);
        assert_eq!(
            body(err),
            json!({
                "error": "Internal server error processing query",
                "details": "Translation service returned no content"
            })
        );
    }

    #[test]
    fn test_explain_translation_failure_has_no_details() {
        let err = ApiError::translation(Operation::Explain, TranslationError::EmptyResponse);
        assert_eq!(body(err), json!({"error": "Internal server error explaining query"}));
    }

    #[test]
    fn test_rejected_body() {
        let err = ApiError::Rejected {
            issues: vec!["Invalid fields requested: bogus".into()],
            analysis: StructuredQuery::new("q").with_fields(["bogus"]),
        };
        let value = body(err);
        assert_eq!(value["error"], "Query validation failed");
        assert_eq!(value["issues"], json!(["Invalid fields requested: bogus"]));
        assert_eq!(value["queryAnalysis"]["fields"], json!(["bogus"]));
    }
}
