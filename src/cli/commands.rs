//! CLI command implementations
//!
//! `serve` and `translate` need the remote translator; `run` and `check`
//! work offline on structured query files.

use std::path::Path;
use std::sync::Arc;

use tracing::{info, warn};

use crate::api::ApiHandler;
use crate::dataset::Dataset;
use crate::http_server::HttpServer;
use crate::observability::{init_logging, AuditLog, Event, FileAuditLog, MemoryAuditLog, NullAuditLog};
use crate::planner::QueryValidator;
use crate::schema::SchemaRegistry;
use crate::translate::{GeminiTranslator, StaticTranslator, Translator};

use super::args::{Cli, Command};
use super::config::Config;
use super::errors::{CliError, CliResult};
use super::io::{read_query_file, write_error, write_response};

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command. Errors are
/// also reported as a JSON object on stdout.
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    let result = Config::load(cli.config.as_deref()).and_then(|config| {
        if let Err(e) = init_logging(config.log_format) {
            eprintln!("{}", e);
        }
        run_command(config, cli.command)
    });

    if let Err(e) = &result {
        write_error(e.code_str(), e.message())?;
    }
    result
}

/// Run the appropriate command
pub fn run_command(config: Config, cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            port,
            gemini_api_key,
        } => serve(config.with_overrides(port, gemini_api_key)?),
        Command::Run { query_file } => run_query(&config, &query_file),
        Command::Check { query_file } => check(&query_file),
        Command::Translate {
            text,
            gemini_api_key,
        } => translate(config.with_overrides(None, gemini_api_key)?, &text),
    }
}

/// Start the HTTP server
///
/// 1. Load the dataset
/// 2. Open the audit log
/// 3. Build the translator and handler
/// 4. Serve until the process is stopped
pub fn serve(config: Config) -> CliResult<()> {
    let translator = gemini_translator(&config)?;
    let dataset = load_dataset(&config)?;
    let audit = open_audit_log(&config)?;

    let handler = build_handler(&config, translator, dataset).with_audit_log(audit);
    let server = HttpServer::new(config.http_config(), Arc::new(handler));

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::server_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::server_failed(format!("HTTP server failed: {}", e)))
    })
}

/// Execute a structured query file and print the response
pub fn run_query(config: &Config, query_file: &Path) -> CliResult<()> {
    let query = read_query_file(query_file)?;
    let dataset = load_dataset(config)?;
    let handler = build_handler(config, Arc::new(StaticTranslator::new()), dataset)
        .with_audit_log(Arc::new(NullAuditLog));

    let validation = handler.check(&query);
    if !validation.is_valid && config.reject_invalid_queries {
        info!(event = %Event::QueryRejected, issues = ?validation.issues, "query rejected");
        return Err(CliError::invalid_query(&validation.issues));
    }

    let response = handler.execute(query, &validation);
    write_response(&response)
}

/// Validate a structured query file and print the result
pub fn check(query_file: &Path) -> CliResult<()> {
    let query = read_query_file(query_file)?;
    let validator = QueryValidator::new(SchemaRegistry::products());
    write_response(&validator.validate(&query))
}

/// Translate a question and print the structured query
pub fn translate(config: Config, text: &str) -> CliResult<()> {
    let translator = gemini_translator(&config)?;

    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::io_error(format!("Failed to create tokio runtime: {}", e)))?;
    let query = rt.block_on(translator.translate(text))?;

    write_response(&query)
}

fn build_handler(config: &Config, translator: Arc<dyn Translator>, dataset: Arc<Dataset>) -> ApiHandler {
    ApiHandler::new(translator, dataset)
        .with_ordering(config.ordering)
        .reject_invalid_queries(config.reject_invalid_queries)
}

fn gemini_translator(config: &Config) -> CliResult<Arc<dyn Translator>> {
    let key = config.require_gemini_key()?;
    let translator = GeminiTranslator::new(&config.translator_endpoint, &config.model, key)?;
    Ok(Arc::new(translator))
}

fn load_dataset(config: &Config) -> CliResult<Arc<Dataset>> {
    let dataset = Dataset::load(&config.data_path)?;
    info!(
        event = %Event::DatasetLoaded,
        path = %config.data_path.display(),
        records = dataset.len(),
        "dataset loaded"
    );
    Ok(Arc::new(dataset))
}

fn open_audit_log(config: &Config) -> CliResult<Arc<dyn AuditLog>> {
    match &config.audit_log_path {
        Some(path) => {
            let log = FileAuditLog::open(path).map_err(|e| {
                CliError::config_error(format!("Failed to open audit log {}: {}", path.display(), e))
            })?;
            Ok(Arc::new(log))
        }
        None => {
            warn!("no audit_log_path configured; audit entries are kept in memory");
            Ok(Arc::new(MemoryAuditLog::new()))
        }
    }
}
