//! Tagged field values and the comparison rules filters rely on
//!
//! Equality against a filter literal is loose: numeric fields compare
//! against the literal coerced to a number, text fields compare as text.
//! Ordering comparisons are numeric only.

use std::cmp::Ordering;

use chrono::NaiveDate;
use serde::{Serialize, Serializer};

/// Largest integer an f64 represents exactly (2^53)
const MAX_EXACT_INT: f64 = 9_007_199_254_740_992.0;

/// A single field value of a record
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Integer(i64),
    Number(f64),
    Text(String),
    Date(NaiveDate),
}

impl Value {
    /// Numeric view of the value, coercing numeric text.
    ///
    /// Returns `None` where coercion yields no number (dates, words).
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Integer(i) => Some(*i as f64),
            Value::Number(n) => Some(*n),
            Value::Text(s) => coerce_number(s),
            Value::Date(_) => None,
        }
    }

    /// Loose equality against a filter literal.
    ///
    /// `600 == "600"` and `600 == "600.0"` hold; text compares exactly.
    pub fn loose_eq(&self, literal: &str) -> bool {
        match self {
            Value::Integer(_) | Value::Number(_) => match (self.as_number(), coerce_number(literal)) {
                (Some(a), Some(b)) => a == b,
                _ => false,
            },
            Value::Text(s) => s == literal,
            Value::Date(d) => d.format("%Y-%m-%d").to_string() == literal,
        }
    }

    /// Total ordering used for sorting.
    ///
    /// Numbers order numerically, text lexicographically, dates
    /// chronologically. Mixed kinds order number < text < date.
    pub fn sort_cmp(&self, other: &Value) -> Ordering {
        fn rank(v: &Value) -> u8 {
            match v {
                Value::Integer(_) | Value::Number(_) => 0,
                Value::Text(_) => 1,
                Value::Date(_) => 2,
            }
        }

        match (self, other) {
            (Value::Integer(a), Value::Integer(b)) => a.cmp(b),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Date(a), Value::Date(b)) => a.cmp(b),
            (a, b) if rank(a) == 0 && rank(b) == 0 => {
                let af = a.as_number().unwrap_or(0.0);
                let bf = b.as_number().unwrap_or(0.0);
                af.total_cmp(&bf)
            }
            (a, b) => rank(a).cmp(&rank(b)),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Integer(i) => serializer.serialize_i64(*i),
            // Whole numbers render without a fractional part
            Value::Number(n) if n.fract() == 0.0 && n.abs() < MAX_EXACT_INT => {
                serializer.serialize_i64(*n as i64)
            }
            Value::Number(n) => serializer.serialize_f64(*n),
            Value::Text(s) => serializer.serialize_str(s),
            Value::Date(d) => serializer.collect_str(&d.format("%Y-%m-%d")),
        }
    }
}

/// Coerces a literal to a number.
///
/// Surrounding whitespace is ignored and blank text counts as zero.
/// Anything that is not a decimal number yields `None`; literals past the
/// f64 range become infinities.
pub fn coerce_number(literal: &str) -> Option<f64> {
    let trimmed = literal.trim();
    if trimmed.is_empty() {
        return Some(0.0);
    }
    match trimmed {
        "Infinity" | "+Infinity" => return Some(f64::INFINITY),
        "-Infinity" => return Some(f64::NEG_INFINITY),
        _ => {}
    }
    // Rust accepts "inf"/"nan" spellings that are not numbers here
    if trimmed.chars().any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E') {
        return None;
    }
    trimmed.parse::<f64>().ok()
}
