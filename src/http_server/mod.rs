//! # nlquery HTTP Server Module
//!
//! Axum server exposing the query handler.
//!
//! # Endpoints
//!
//! - `GET /health` - Health check (no key)
//! - `POST /query` - Translate, validate and execute
//! - `POST /explain` - Translate and describe
//! - `POST /validate` - Translate and validate

pub mod auth;
pub mod config;
pub mod observability_routes;
pub mod query_routes;
pub mod server;

pub use auth::{ApiKey, ApiKeys, API_KEY_HEADER};
pub use config::HttpServerConfig;
pub use server::HttpServer;
