//! Query Executor subsystem for nlquery
//!
//! Consumes structured queries and produces filtered, projected rows plus
//! a canonical query string.
//!
//! # Execution Flow (strict order)
//!
//! 1. Compile filters, collecting deduplicated clause fragments
//! 2. Filter records strictly according to predicates
//! 3. Apply sort (if specified)
//! 4. Apply limit
//! 5. Project requested fields
//! 6. Render the canonical query and statistics
//!
//! # Invariants
//!
//! - Records are never mutated
//! - Malformed filters degrade, they never fail execution
//! - Deterministic output apart from measured time

mod executor;
mod filters;
mod render;
mod result;
mod sorter;

pub use executor::{OrderingPolicy, QueryExecutor};
pub use filters::FilterSet;
pub use render::render_query;
pub use result::{ExecutionResult, ExecutionStats};
pub use sorter::ResultSorter;
