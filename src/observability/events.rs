//! Observable events for nlquery
//!
//! Events are explicit and typed. Each one is logged as the `event` field
//! of a tracing record.

use std::fmt;

/// Observable events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    // Lifecycle
    /// HTTP server bound and serving
    ServerStart,
    /// Record collection loaded or replaced
    DatasetLoaded,

    // Query processing
    /// Free text translated to a structured query
    QueryTranslated,
    /// Structured query failed validation and was not executed
    QueryRejected,
    /// Structured query executed
    QueryExecuted,
    /// Translation boundary failed
    TranslationFailed,

    // Audit
    /// Audit sink refused an entry
    AuditWriteFailed,
}

impl Event {
    /// Returns the string representation of the event
    pub fn as_str(&self) -> &'static str {
        match self {
            Event::ServerStart => "SERVER_START",
            Event::DatasetLoaded => "DATASET_LOADED",
            Event::QueryTranslated => "QUERY_TRANSLATED",
            Event::QueryRejected => "QUERY_REJECTED",
            Event::QueryExecuted => "QUERY_EXECUTED",
            Event::TranslationFailed => "TRANSLATION_FAILED",
            Event::AuditWriteFailed => "AUDIT_WRITE_FAILED",
        }
    }

    /// Returns true if this event reports a failure
    pub fn is_failure(&self) -> bool {
        matches!(self, Event::TranslationFailed | Event::AuditWriteFailed)
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_names_are_screaming_case() {
        let events = [
            Event::ServerStart,
            Event::DatasetLoaded,
            Event::QueryTranslated,
            Event::QueryRejected,
            Event::QueryExecuted,
            Event::TranslationFailed,
            Event::AuditWriteFailed,
        ];

        for event in events {
            let s = event.as_str();
            assert!(!s.is_empty());
            assert!(s.chars().all(|c| c.is_ascii_uppercase() || c == '_'));
        }
    }

    #[test]
    fn test_failure_events() {
        assert!(Event::TranslationFailed.is_failure());
        assert!(Event::AuditWriteFailed.is_failure());
        assert!(!Event::QueryRejected.is_failure());
        assert!(!Event::QueryExecuted.is_failure());
    }
}
