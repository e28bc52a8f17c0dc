//! Structured query description
//!
//! The translated intent of one free-text question. Field names and filter
//! expressions stay as text here; they are checked by the validator and
//! compiled by the filter parser.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Sort direction
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    #[serde(alias = "ASC")]
    Asc,
    #[serde(alias = "DESC")]
    Desc,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Asc => "asc",
            SortOrder::Desc => "desc",
        }
    }

    /// Keyword used in the rendered query
    pub fn keyword(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort specification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Field to sort by
    pub field: String,
    /// Sort direction
    #[serde(default)]
    pub order: SortOrder,
}

impl SortSpec {
    pub fn asc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Asc,
        }
    }

    pub fn desc(field: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            order: SortOrder::Desc,
        }
    }
}

/// Structured query description
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StructuredQuery {
    /// Source text, kept for traceability
    #[serde(default, deserialize_with = "null_as_default")]
    pub original_query: String,
    /// `<field> <op> <value>` expressions, conjoined
    #[serde(default, deserialize_with = "null_as_default")]
    pub filters: Vec<String>,
    /// Fields to project; empty means all fields
    #[serde(default, deserialize_with = "null_as_default")]
    pub fields: Vec<String>,
    /// Optional ordering
    #[serde(default)]
    pub sort: Option<SortSpec>,
    /// Optional cap on returned records
    #[serde(default)]
    pub limit: Option<u64>,
}

impl StructuredQuery {
    /// Creates an empty query for the given source text
    pub fn new(original_query: impl Into<String>) -> Self {
        Self {
            original_query: original_query.into(),
            ..Default::default()
        }
    }

    /// Adds a filter expression
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filters.push(filter.into());
        self
    }

    /// Sets the projected fields
    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the sort specification
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Sets the limit
    pub fn with_limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Returns true when no projection was requested
    pub fn selects_all(&self) -> bool {
        self.fields.is_empty()
    }

    /// Limit in effect; a zero limit counts as no limit
    pub fn effective_limit(&self) -> Option<u64> {
        self.limit.filter(|n| *n > 0)
    }
}

/// Treats an explicit JSON `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
