//! API Layer for nlquery
//!
//! The API Layer turns one free-text question into a response.
//!
//! # Request handling flow
//!
//! 1. Translate text to a structured query
//! 2. Validate against the schema and score complexity
//! 3. Reject, or execute against a dataset snapshot
//! 4. Append the execution to the audit log
//!
//! # Supported Operations
//!
//! - query
//! - explain
//! - validate

mod errors;
mod handler;
mod request;
mod response;

pub use errors::{ApiError, ApiResult, ErrorBody, Operation};
pub use handler::ApiHandler;
pub use request::QueryRequest;
pub use response::{ExplainResponse, QueryResponse, ValidateResponse, ValidationNotes, VALIDATED_NOTE};
