//! Translator boundary
//!
//! A translator turns free text into a `StructuredQuery`. It is the only
//! source of structured queries on the request path and its output is
//! untrusted: everything it returns goes through validation.

use std::collections::HashMap;

use async_trait::async_trait;

use crate::planner::StructuredQuery;

use super::errors::{TranslationError, TranslationResult};
use super::prompt::parse_model_output;

/// Natural-language to structured-query translator
#[async_trait]
pub trait Translator: Send + Sync {
    /// Translates one question
    async fn translate(&self, text: &str) -> TranslationResult<StructuredQuery>;

    /// Name for logs
    fn name(&self) -> &str;
}

#[derive(Debug, Clone)]
enum Canned {
    Query(StructuredQuery),
    Raw(String),
}

/// Translator with fixed answers.
///
/// Answers are keyed by exact question text. Raw answers go through the
/// same output parsing as a model reply.
#[derive(Debug, Clone, Default)]
pub struct StaticTranslator {
    answers: HashMap<String, Canned>,
}

impl StaticTranslator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a structured answer
    pub fn with_query(mut self, text: impl Into<String>, query: StructuredQuery) -> Self {
        self.answers.insert(text.into(), Canned::Query(query));
        self
    }

    /// Registers a raw model reply
    pub fn with_response(mut self, text: impl Into<String>, raw: impl Into<String>) -> Self {
        self.answers.insert(text.into(), Canned::Raw(raw.into()));
        self
    }
}

#[async_trait]
impl Translator for StaticTranslator {
    async fn translate(&self, text: &str) -> TranslationResult<StructuredQuery> {
        match self.answers.get(text) {
            Some(Canned::Query(query)) => Ok(query.clone()),
            Some(Canned::Raw(raw)) => parse_model_output(raw, text),
            None => Err(TranslationError::NoTranslation(text.to_string())),
        }
    }

    fn name(&self) -> &str {
        "static"
    }
}
