//! Read-only record collection with whole-collection replacement
//!
//! Queries run against a snapshot taken at their start. `replace` swaps in
//! a new collection atomically; running queries keep their old snapshot.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use arc_swap::ArcSwap;

use super::errors::{DatasetError, DatasetResult};
use super::record::Record;

/// Built-in sample records
const SAMPLE_DATA: &str = include_str!("../../data/sample-data.json");

/// Shared snapshot of the record collection
pub type Snapshot = Arc<Vec<Record>>;

/// The in-memory record collection
pub struct Dataset {
    records: ArcSwap<Vec<Record>>,
}

impl Dataset {
    /// Creates a dataset from records, checking value constraints
    pub fn from_records(records: Vec<Record>) -> DatasetResult<Self> {
        check_records(&records)?;
        Ok(Self {
            records: ArcSwap::from_pointee(records),
        })
    }

    /// Parses a JSON array of records
    pub fn from_json_str(json: &str) -> DatasetResult<Self> {
        let records: Vec<Record> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    /// Loads a JSON array of records from a file
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| DatasetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// The compiled-in sample collection
    pub fn sample() -> DatasetResult<Self> {
        Self::from_json_str(SAMPLE_DATA)
    }

    /// Current collection; unaffected by later `replace` calls
    pub fn snapshot(&self) -> Snapshot {
        self.records.load_full()
    }

    /// Replaces the whole collection.
    ///
    /// On a constraint violation the current collection stays in place.
    pub fn replace(&self, records: Vec<Record>) -> DatasetResult<()> {
        check_records(&records)?;
        self.records.store(Arc::new(records));
        Ok(())
    }

    /// Number of records in the current collection
    pub fn len(&self) -> usize {
        self.records.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.load().is_empty()
    }
}

/// Enforces `price >= 0` (finite) and `units_sold >= 0`
fn check_records(records: &[Record]) -> DatasetResult<()> {
    for record in records {
        if !record.price.is_finite() || record.price < 0.0 {
            return Err(DatasetError::invalid_record(
                record.id,
                format!("price must be a non-negative number, got {}", record.price),
            ));
        }
        if record.units_sold < 0 {
            return Err(DatasetError::invalid_record(
                record.id,
                format!("units_sold must be >= 0, got {}", record.units_sold),
            ));
        }
    }
    Ok(())
}
