//! Observability subsystem for nlquery
//!
//! - Structured logging through `tracing`
//! - Typed lifecycle and query events
//! - Append-only query audit log
//!
//! # Principles
//!
//! 1. Observability is read-only
//! 2. No side effects on query results
//! 3. Observability failure never fails a request
//!
//! # Usage
//!
//! ```ignore
//! use nlquery::observability::{log_event, Event};
//!
//! log_event(Event::DatasetLoaded);
//! tracing::info!(event = %Event::QueryExecuted, rows = 3, "query executed");
//! ```

pub mod audit;
mod events;
mod logger;

pub use audit::{AuditLog, FileAuditLog, MemoryAuditLog, NullAuditLog, QueryLogEntry};
pub use events::Event;
pub use logger::{init_logging, LogFormat, LoggingError, DEFAULT_FILTER};

/// Log a lifecycle event with no extra fields
pub fn log_event(event: Event) {
    if event.is_failure() {
        tracing::warn!(event = event.as_str());
    } else {
        tracing::info!(event = event.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_event() {
        // No subscriber installed; must not panic
        log_event(Event::ServerStart);
        log_event(Event::AuditWriteFailed);
    }
}
