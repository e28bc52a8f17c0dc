//! Schema registry for nlquery
//!
//! Fixed description of the product record shape: field names, types and
//! the allowed values of enum-typed fields.
//!
//! # Design Principles
//!
//! - Closed field set, resolved by exact name
//! - Stateless and constant for the process lifetime
//! - Single source for the total field count

mod registry;
mod types;

pub use registry::{SchemaRegistry, CATEGORY_VALUES, REGION_VALUES};
pub use types::{Field, FieldDef, FieldType};
