//! nlquery CLI entry point
//!
//! Parses arguments and dispatches through `cli::run`. On failure the error
//! is written to stdout as JSON by `cli::run`, echoed to stderr here, and
//! the process exits non-zero.

use nlquery::cli;

fn main() {
    if let Err(e) = cli::run() {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}
