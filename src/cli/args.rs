//! CLI argument definitions using clap
//!
//! Commands:
//! - nlquery serve [--port <port>]
//! - nlquery run --query-file <path>
//! - nlquery check --query-file <path>
//! - nlquery translate <text>

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// nlquery - natural-language analytics over a product dataset
#[derive(Parser, Debug)]
#[command(name = "nlquery")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file; defaults apply when omitted
    #[arg(long, global = true, env = "NLQUERY_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Start the HTTP server
    Serve {
        /// Port to listen on
        #[arg(long, env = "PORT")]
        port: Option<u16>,

        /// Gemini API key
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        gemini_api_key: Option<String>,
    },

    /// Execute a structured query file against the dataset
    Run {
        /// Path to a structured query JSON file
        #[arg(long)]
        query_file: PathBuf,
    },

    /// Validate a structured query file
    Check {
        /// Path to a structured query JSON file
        #[arg(long)]
        query_file: PathBuf,
    },

    /// Translate a question and print the structured query
    Translate {
        /// Question text
        text: String,

        /// Gemini API key
        #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
        gemini_api_key: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
