//! CLI module for nlquery
//!
//! Provides command-line interface for:
//! - serve: Start the HTTP server
//! - run: Execute a structured query file
//! - check: Validate a structured query file
//! - translate: Translate a question into a structured query

mod args;
mod commands;
mod config;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, run, run_command, run_query, serve, translate};
pub use config::Config;
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{read_query_file, write_error, write_response};
