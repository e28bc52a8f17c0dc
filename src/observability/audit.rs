//! Query audit logging
//!
//! - Every executed query is recorded with its caller key, source text,
//!   structured form, stats and canonical query
//! - The audit log is append-only
//! - A failed append never fails the request; callers log and move on

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::executor::ExecutionStats;
use crate::planner::StructuredQuery;

/// One audited query execution
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryLogEntry {
    pub id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub api_key: String,
    /// Free text as submitted
    pub query: String,
    /// Structured query that was executed
    pub analysis: StructuredQuery,
    pub stats: ExecutionStats,
    /// Canonical query string
    pub sql_query: String,
}

impl QueryLogEntry {
    /// Creates an entry stamped now
    pub fn new(
        api_key: impl Into<String>,
        query: impl Into<String>,
        analysis: StructuredQuery,
        stats: &ExecutionStats,
        sql_query: &str,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            timestamp: Utc::now(),
            api_key: api_key.into(),
            query: query.into(),
            analysis,
            stats: stats.clone(),
            sql_query: sql_query.to_string(),
        }
    }
}

/// Append-only audit sink
pub trait AuditLog: Send + Sync {
    /// Appends an entry. The entry is visible once this returns.
    fn append(&self, entry: &QueryLogEntry) -> io::Result<()>;
}

fn lock<T>(mutex: &Mutex<T>) -> io::Result<MutexGuard<'_, T>> {
    mutex
        .lock()
        .map_err(|_| io::Error::new(io::ErrorKind::Other, "audit log lock poisoned"))
}

/// File-based audit log: one JSON entry per line
pub struct FileAuditLog {
    path: PathBuf,
    writer: Mutex<BufWriter<File>>,
}

impl FileAuditLog {
    /// Opens or creates an audit log file
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref().to_path_buf();
        let file = OpenOptions::new().create(true).append(true).open(&path)?;

        Ok(Self {
            path,
            writer: Mutex::new(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl AuditLog for FileAuditLog {
    fn append(&self, entry: &QueryLogEntry) -> io::Result<()> {
        let line = serde_json::to_string(entry)?;
        let mut writer = lock(&self.writer)?;
        writeln!(writer, "{}", line)?;
        writer.flush()
    }
}

/// In-memory audit log
#[derive(Debug, Default)]
pub struct MemoryAuditLog {
    entries: Mutex<Vec<QueryLogEntry>>,
}

impl MemoryAuditLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries, oldest first
    pub fn entries(&self) -> Vec<QueryLogEntry> {
        lock(&self.entries).map(|e| e.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        lock(&self.entries).map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AuditLog for MemoryAuditLog {
    fn append(&self, entry: &QueryLogEntry) -> io::Result<()> {
        lock(&self.entries)?.push(entry.clone());
        Ok(())
    }
}

/// Audit log that discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAuditLog;

impl AuditLog for NullAuditLog {
    fn append(&self, _entry: &QueryLogEntry) -> io::Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::executor::QueryExecutor;
    use std::fs;
    use tempfile::tempdir;

    fn entry(text: &str) -> QueryLogEntry {
        let dataset = Dataset::sample().unwrap();
        let query = StructuredQuery::new(text).with_filter("region == 'Asia'");
        let result = QueryExecutor::default().execute(&query, &dataset.snapshot());
        QueryLogEntry::new(
            "demo-key-123",
            text,
            query,
            &result.stats,
            &result.canonical_query,
        )
    }

    #[test]
    fn test_entry_captures_result() {
        let entry = entry("asian sales");
        assert_eq!(entry.api_key, "demo-key-123");
        assert_eq!(entry.query, "asian sales");
        assert_eq!(entry.sql_query, "SELECT * FROM products WHERE region = 'Asia'");
        assert_eq!(entry.analysis.filters, vec!["region == 'Asia'"]);
    }

    #[test]
    fn test_entry_json_shape() {
        let value = serde_json::to_value(entry("q")).unwrap();
        for key in ["id", "timestamp", "apiKey", "query", "analysis", "stats", "sqlQuery"] {
            assert!(value.get(key).is_some(), "missing {}", key);
        }
        assert!(value["stats"].get("recordsReturned").is_some());
    }

    #[test]
    fn test_memory_audit_log() {
        let log = MemoryAuditLog::new();
        assert!(log.is_empty());

        log.append(&entry("first")).unwrap();
        log.append(&entry("second")).unwrap();

        let entries = log.entries();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].query, "first");
        assert_eq!(entries[1].query, "second");
        assert_ne!(entries[0].id, entries[1].id);
    }

    #[test]
    fn test_file_audit_log_appends_lines() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("audit.log");

        {
            let log = FileAuditLog::open(&path).unwrap();
            log.append(&entry("one")).unwrap();
            log.append(&entry("two")).unwrap();
        }
        {
            // Reopening appends instead of truncating
            let log = FileAuditLog::open(&path).unwrap();
            log.append(&entry("three")).unwrap();
        }

        let content = fs::read_to_string(&path).unwrap();
        let queries: Vec<String> = content
            .lines()
            .map(|line| {
                let value: serde_json::Value = serde_json::from_str(line).unwrap();
                value["query"].as_str().unwrap().to_string()
            })
            .collect();
        assert_eq!(queries, vec!["one", "two", "three"]);
    }

    #[test]
    fn test_null_audit_log() {
        assert!(NullAuditLog.append(&entry("q")).is_ok());
    }
}
