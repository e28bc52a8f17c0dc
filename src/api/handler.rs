//! API Handler for nlquery
//!
//! Orchestrates translate → validate → execute → audit for one question.
//! Transport-agnostic: the HTTP layer and the CLI both drive it.
//!
//! The record collection is read through a snapshot per request, so
//! concurrent requests never lock each other.

use std::sync::Arc;

use tracing::{info, warn};

use crate::dataset::Dataset;
use crate::executor::{OrderingPolicy, QueryExecutor};
use crate::observability::{AuditLog, Event, MemoryAuditLog, QueryLogEntry};
use crate::planner::{Explanation, QueryValidator, StructuredQuery, ValidationResult};
use crate::schema::SchemaRegistry;
use crate::translate::Translator;

use super::errors::{ApiError, ApiResult, Operation};
use super::response::{ExplainResponse, QueryResponse, ValidateResponse};

/// API handler shared by all requests
pub struct ApiHandler {
    translator: Arc<dyn Translator>,
    dataset: Arc<Dataset>,
    validator: QueryValidator,
    executor: QueryExecutor,
    audit: Arc<dyn AuditLog>,
    reject_invalid: bool,
}

impl ApiHandler {
    /// Creates a handler with an in-memory audit log, applied ordering and
    /// rejection of invalid queries.
    pub fn new(translator: Arc<dyn Translator>, dataset: Arc<Dataset>) -> Self {
        let registry = SchemaRegistry::products();
        Self {
            translator,
            dataset,
            validator: QueryValidator::new(registry),
            executor: QueryExecutor::new(registry, OrderingPolicy::default()),
            audit: Arc::new(MemoryAuditLog::new()),
            reject_invalid: true,
        }
    }

    pub fn with_audit_log(mut self, audit: Arc<dyn AuditLog>) -> Self {
        self.audit = audit;
        self
    }

    pub fn with_ordering(mut self, ordering: OrderingPolicy) -> Self {
        self.executor = QueryExecutor::new(SchemaRegistry::products(), ordering);
        self
    }

    /// When false, invalid queries still execute and their issues are
    /// reported as notes.
    pub fn reject_invalid_queries(mut self, reject: bool) -> Self {
        self.reject_invalid = reject;
        self
    }

    pub fn dataset(&self) -> &Arc<Dataset> {
        &self.dataset
    }

    /// Handles a query: translate, validate, execute, audit
    pub async fn process(&self, api_key: &str, text: &str) -> ApiResult<QueryResponse> {
        let (analysis, validation) = self.analyze(Operation::Query, text).await?;

        if !validation.is_valid && self.reject_invalid {
            info!(
                event = %Event::QueryRejected,
                issues = ?validation.issues,
                "query rejected"
            );
            return Err(ApiError::Rejected {
                issues: validation.issues,
                analysis,
            });
        }

        let response = self.execute(analysis, &validation);
        self.record(api_key, text, &response);
        Ok(response)
    }

    /// Executes an already-structured query. Never fails and is not audited.
    pub fn execute(&self, analysis: StructuredQuery, validation: &ValidationResult) -> QueryResponse {
        let records = self.dataset.snapshot();
        let result = self.executor.execute(&analysis, &records);

        info!(
            event = %Event::QueryExecuted,
            rows = result.stats.records_returned,
            complexity = result.stats.complexity,
            sql = %result.canonical_query,
            "query executed"
        );

        QueryResponse::new(analysis, validation, result)
    }

    /// Handles an explain request: translate and validate, no execution
    pub async fn explain(&self, text: &str) -> ApiResult<ExplainResponse> {
        let (analysis, validation) = self.analyze(Operation::Explain, text).await?;
        Ok(ExplainResponse {
            original_query: text.to_string(),
            explanation: Explanation::from_query(&analysis),
            query_analysis: analysis,
            validation,
        })
    }

    /// Handles a validate request: translate and validate only
    pub async fn validate(&self, text: &str) -> ApiResult<ValidateResponse> {
        let (analysis, validation) = self.analyze(Operation::Validate, text).await?;
        Ok(ValidateResponse {
            original_query: text.to_string(),
            query_analysis: analysis,
            validation,
        })
    }

    /// Validates an already-structured query
    pub fn check(&self, query: &StructuredQuery) -> ValidationResult {
        self.validator.validate(query)
    }

    async fn analyze(
        &self,
        operation: Operation,
        text: &str,
    ) -> ApiResult<(StructuredQuery, ValidationResult)> {
        if text.is_empty() {
            return Err(ApiError::MissingQuery);
        }

        let analysis = match self.translator.translate(text).await {
            Ok(analysis) => analysis,
            Err(err) => {
                warn!(
                    event = %Event::TranslationFailed,
                    operation = %operation,
                    translator = self.translator.name(),
                    kind = err.kind(),
                    error = %err,
                    "translation failed"
                );
                return Err(ApiError::translation(operation, err));
            }
        };

        info!(
            event = %Event::QueryTranslated,
            operation = %operation,
            filters = analysis.filters.len(),
            fields = analysis.fields.len(),
            "query translated"
        );

        let validation = self.validator.validate(&analysis);
        Ok((analysis, validation))
    }

    fn record(&self, api_key: &str, text: &str, response: &QueryResponse) {
        let entry = QueryLogEntry::new(
            api_key,
            text,
            response.query_analysis.clone(),
            &response.stats,
            &response.sql_query,
        );
        if let Err(err) = self.audit.append(&entry) {
            warn!(event = %Event::AuditWriteFailed, error = %err, "audit write failed");
        }
    }
}
