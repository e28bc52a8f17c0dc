//! # Translation Errors
//!
//! Failures of the natural-language translation boundary. None of these
//! are validation failures: a query that cannot be translated never
//! reaches the validator.

use thiserror::Error;

/// Result type for translation
pub type TranslationResult<T> = Result<T, TranslationError>;

/// Translation errors
#[derive(Debug, Error)]
pub enum TranslationError {
    /// Request to the translation service failed
    #[error("Translation request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Translation service answered with an error status
    #[error("Translation service error ({status}): {message}")]
    Service { status: u16, message: String },

    /// Translation service returned no candidate text
    #[error("Translation service returned no content")]
    EmptyResponse,

    /// Model output is not a structured query
    #[error("Malformed translation output: {0}")]
    MalformedResponse(String),

    /// Translator has no answer for this text
    #[error("No translation available for '{0}'")]
    NoTranslation(String),

    /// Translator is missing configuration
    #[error("Translator not configured: {0}")]
    NotConfigured(String),
}

impl TranslationError {
    /// Short machine-readable kind, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            TranslationError::Transport(_) => "transport",
            TranslationError::Service { .. } => "service",
            TranslationError::EmptyResponse => "empty_response",
            TranslationError::MalformedResponse(_) => "malformed_response",
            TranslationError::NoTranslation(_) => "no_translation",
            TranslationError::NotConfigured(_) => "not_configured",
        }
    }
}

impl From<serde_json::Error> for TranslationError {
    fn from(err: serde_json::Error) -> Self {
        TranslationError::MalformedResponse(err.to_string())
    }
}
