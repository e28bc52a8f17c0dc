//! nlquery - natural-language analytics over a small product dataset
//!
//! Free-text questions are translated into structured queries, validated
//! against a fixed schema, executed over in-memory records and returned
//! with a canonical query string and a complexity score.

pub mod api;
pub mod cli;
pub mod dataset;
pub mod executor;
pub mod http_server;
pub mod observability;
pub mod planner;
pub mod schema;
pub mod translate;
