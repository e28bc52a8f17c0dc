//! Query HTTP Routes
//!
//! `POST /query`, `POST /explain` and `POST /validate`. All require an
//! API key.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::routing::post;
use axum::{Extension, Json, Router};

use crate::api::{ApiHandler, ApiResult, ExplainResponse, QueryRequest, QueryResponse, ValidateResponse};

use super::auth::ApiKey;

/// Create query routes
pub fn query_routes(handler: Arc<ApiHandler>) -> Router {
    Router::new()
        .route("/query", post(query_handler))
        .route("/explain", post(explain_handler))
        .route("/validate", post(validate_handler))
        .with_state(handler)
}

/// Parses a body; an empty body counts as a request without a query
fn parse_body(body: &[u8]) -> ApiResult<QueryRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(QueryRequest::default());
    }
    let text = std::str::from_utf8(body)
        .map_err(|e| crate::api::ApiError::InvalidBody(e.to_string()))?;
    QueryRequest::parse(text)
}

async fn query_handler(
    State(handler): State<Arc<ApiHandler>>,
    Extension(ApiKey(key)): Extension<ApiKey>,
    body: Bytes,
) -> ApiResult<Json<QueryResponse>> {
    let request = parse_body(&body)?;
    let response = handler.process(&key, request.text()?).await?;
    Ok(Json(response))
}

async fn explain_handler(
    State(handler): State<Arc<ApiHandler>>,
    body: Bytes,
) -> ApiResult<Json<ExplainResponse>> {
    let request = parse_body(&body)?;
    let response = handler.explain(request.text()?).await?;
    Ok(Json(response))
}

async fn validate_handler(
    State(handler): State<Arc<ApiHandler>>,
    body: Bytes,
) -> ApiResult<Json<ValidateResponse>> {
    let request = parse_body(&body)?;
    let response = handler.validate(request.text()?).await?;
    Ok(Json(response))
}
