//! API request types

use serde::{Deserialize, Serialize};

use super::errors::{ApiError, ApiResult};

/// Body of `/query`, `/explain` and `/validate`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct QueryRequest {
    #[serde(default)]
    pub query: Option<String>,
}

impl QueryRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: Some(query.into()),
        }
    }

    /// Parses a request body
    pub fn parse(body: &str) -> ApiResult<Self> {
        serde_json::from_str(body).map_err(|e| ApiError::InvalidBody(e.to_string()))
    }

    /// The question text; missing or empty is an error
    pub fn text(&self) -> ApiResult<&str> {
        match self.query.as_deref() {
            Some(text) if !text.is_empty() => Ok(text),
            _ => Err(ApiError::MissingQuery),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let request = QueryRequest::parse(r#"{"query": "cheap add-ons"}"#).unwrap();
        assert_eq!(request.text().unwrap(), "cheap add-ons");
    }

    #[test]
    fn test_missing_or_empty_query() {
        let missing = QueryRequest::parse("{}").unwrap();
        assert!(matches!(missing.text(), Err(ApiError::MissingQuery)));

        let empty = QueryRequest::new("");
        assert!(matches!(empty.text(), Err(ApiError::MissingQuery)));
    }

    #[test]
    fn test_invalid_body() {
        assert!(matches!(
            QueryRequest::parse("not json"),
            Err(ApiError::InvalidBody(_))
        ));
        assert!(matches!(
            QueryRequest::parse(r#"{"query": 42}"#),
            Err(ApiError::InvalidBody(_))
        ));
    }
}
