//! API key authentication
//!
//! The key is read from the `x-api-key` header, falling back to the
//! `apiKey` query parameter. Keys are compared in constant time.

use std::sync::Arc;

use axum::extract::{Query, Request, State};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use subtle::{Choice, ConstantTimeEq};

use crate::api::ApiError;

/// Header carrying the API key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Authenticated caller key, stored in request extensions
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiKey(pub String);

/// Accepted API keys
#[derive(Debug, Clone)]
pub struct ApiKeys {
    keys: Arc<[String]>,
}

impl ApiKeys {
    /// Accepted keys; blank entries are dropped
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            keys: keys
                .into_iter()
                .map(Into::into)
                .filter(|key: &String| !key.trim().is_empty())
                .collect(),
        }
    }

    /// True if `candidate` is one of the accepted keys.
    ///
    /// Every key is compared; the scan does not stop at the first match.
    pub fn verify(&self, candidate: &str) -> bool {
        if candidate.is_empty() {
            return false;
        }
        let matched = self.keys.iter().fold(Choice::from(0), |acc, key| {
            acc | key.as_bytes().ct_eq(candidate.as_bytes())
        });
        matched.into()
    }

    pub fn len(&self) -> usize {
        self.keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[derive(Debug, Deserialize)]
pub struct ApiKeyParam {
    #[serde(rename = "apiKey")]
    api_key: Option<String>,
}

/// Middleware rejecting requests without a valid key
pub async fn require_api_key(
    State(keys): State<ApiKeys>,
    param: Option<Query<ApiKeyParam>>,
    mut request: Request,
    next: Next,
) -> Response {
    let from_header = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|value| value.to_str().ok())
        .filter(|value| !value.is_empty())
        .map(str::to_string);
    let candidate = from_header
        .or_else(|| param.and_then(|Query(p)| p.api_key))
        .filter(|key| !key.is_empty());

    match candidate {
        Some(key) if keys.verify(&key) => {
            request.extensions_mut().insert(ApiKey(key));
            next.run(request).await
        }
        _ => ApiError::Unauthorized.into_response(),
    }
}
