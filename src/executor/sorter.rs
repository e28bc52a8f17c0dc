//! Result sorting for query execution
//!
//! Sorts matched records by a single field, deterministically.

use crate::dataset::Record;
use crate::planner::{SortOrder, SortSpec};
use crate::schema::Field;

/// Sorts matched records
pub struct ResultSorter;

impl ResultSorter {
    /// Sorts records according to the sort specification.
    ///
    /// Sort is stable. An unknown sort field leaves scan order untouched.
    pub fn sort(records: &mut [&Record], sort_spec: &SortSpec) {
        let Some(field) = Field::from_name(&sort_spec.field) else {
            return;
        };

        records.sort_by(|a, b| {
            let ordering = a.value(field).sort_cmp(&b.value(field));
            match sort_spec.order {
                SortOrder::Asc => ordering,
                SortOrder::Desc => ordering.reverse(),
            }
        });
    }
}
