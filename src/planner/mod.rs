//! Query planning for nlquery
//!
//! Turns a structured query description into something the executor can
//! run, and decides whether it is safe to run.
//!
//! # Components
//!
//! - `ast`: the structured query description
//! - `filter`: filter expression parser and predicates
//! - `validator`: schema conformance and filter syntax checks
//! - `complexity`: bounded complexity score
//! - `explain`: human-readable explanation

mod ast;
mod complexity;
mod explain;
mod filter;
mod validator;

pub use ast::{SortOrder, SortSpec, StructuredQuery};
pub use complexity::{complexity_score, MAX_COMPLEXITY};
pub use explain::{Explanation, LimitExplanation, SortExplanation};
pub use filter::{has_operator, Comparison, FilterExpr, Operator};
pub use validator::{QueryValidator, ValidationResult};
