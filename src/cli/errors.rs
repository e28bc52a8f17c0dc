//! CLI-specific error types
//!
//! Every CLI error ends the process with a non-zero exit code.

use std::fmt;
use std::io;

use crate::dataset::DatasetError;
use crate::translate::TranslationError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Configuration file error
    ConfigError,
    /// I/O error (files, stdout)
    IoError,
    /// Record collection could not be loaded
    DatasetError,
    /// Query failed validation
    InvalidQuery,
    /// Translation boundary failed
    TranslationFailed,
    /// HTTP server could not start or stopped with an error
    ServerFailed,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::ConfigError => "NLQ_CLI_CONFIG_ERROR",
            Self::IoError => "NLQ_CLI_IO_ERROR",
            Self::DatasetError => "NLQ_CLI_DATASET_ERROR",
            Self::InvalidQuery => "NLQ_CLI_INVALID_QUERY",
            Self::TranslationFailed => "NLQ_CLI_TRANSLATION_FAILED",
            Self::ServerFailed => "NLQ_CLI_SERVER_FAILED",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ConfigError, msg)
    }

    pub fn io_error(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::IoError, msg)
    }

    /// Validation issues, joined
    pub fn invalid_query(issues: &[String]) -> Self {
        Self::new(CliErrorCode::InvalidQuery, issues.join("; "))
    }

    pub fn server_failed(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::ServerFailed, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::io_error(e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::io_error(format!("JSON error: {}", e))
    }
}

impl From<DatasetError> for CliError {
    fn from(e: DatasetError) -> Self {
        Self::new(CliErrorCode::DatasetError, e.to_string())
    }
}

impl From<TranslationError> for CliError {
    fn from(e: TranslationError) -> Self {
        match e {
            TranslationError::NotConfigured(_) => Self::config_error(e.to_string()),
            other => Self::new(CliErrorCode::TranslationFailed, other.to_string()),
        }
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
