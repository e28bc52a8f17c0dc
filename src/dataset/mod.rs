//! Record collection for nlquery
//!
//! Product records live in a read-only, in-memory collection. The engine
//! never mutates records; the collection as a whole may be replaced.

mod errors;
mod record;
mod store;
mod value;

pub use errors::{DatasetError, DatasetResult};
pub use record::{Category, Record, Region, Row};
pub use store::{Dataset, Snapshot};
pub use value::{coerce_number, Value};
