//! Field and type definitions for the product record shape
//!
//! Supported types:
//! - integer: 64-bit signed integer
//! - number: 64-bit floating point
//! - text: UTF-8 string
//! - enum: text restricted to a fixed value set
//! - date: calendar date in ISO form (YYYY-MM-DD)

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The closed set of fields every record carries, in schema order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Id,
    Product,
    Category,
    Price,
    UnitsSold,
    Region,
    Date,
}

impl Field {
    /// All fields in schema order
    pub const ALL: [Field; 7] = [
        Field::Id,
        Field::Product,
        Field::Category,
        Field::Price,
        Field::UnitsSold,
        Field::Region,
        Field::Date,
    ];

    /// Returns the wire name of the field
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Id => "id",
            Field::Product => "product",
            Field::Category => "category",
            Field::Price => "price",
            Field::UnitsSold => "units_sold",
            Field::Region => "region",
            Field::Date => "date",
        }
    }

    /// Resolves a wire name; exact, case-sensitive match only
    pub fn from_name(name: &str) -> Option<Field> {
        Field::ALL.iter().copied().find(|f| f.as_str() == name)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Field {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::from_name(s).ok_or_else(|| format!("unknown field '{}'", s))
    }
}

/// Value type of a field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// 64-bit signed integer
    Integer,
    /// 64-bit floating point
    Number,
    /// Free UTF-8 text
    Text,
    /// Text drawn from a fixed set of values
    Enum(&'static [&'static str]),
    /// Calendar date (YYYY-MM-DD)
    Date,
}

impl FieldType {
    /// Returns the type name used in schema descriptions
    pub fn type_name(&self) -> &'static str {
        match self {
            FieldType::Integer | FieldType::Number => "number",
            FieldType::Text | FieldType::Enum(_) => "string",
            FieldType::Date => "string",
        }
    }

    /// Returns true for types compared numerically
    pub fn is_numeric(&self) -> bool {
        matches!(self, FieldType::Integer | FieldType::Number)
    }
}

/// Field definition: a field and its type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDef {
    pub field: Field,
    pub field_type: FieldType,
}

impl FieldDef {
    pub const fn new(field: Field, field_type: FieldType) -> Self {
        Self { field, field_type }
    }

    /// Name of the field
    pub fn name(&self) -> &'static str {
        self.field.as_str()
    }

    /// Allowed values for enum-typed fields
    pub fn allowed_values(&self) -> Option<&'static [&'static str]> {
        match self.field_type {
            FieldType::Enum(values) => Some(values),
            _ => None,
        }
    }

    /// One-line description, e.g. `region (string: "North America", "Europe", "Asia")`
    pub fn describe(&self) -> String {
        match self.field_type {
            FieldType::Enum(values) => {
                let quoted: Vec<String> = values.iter().map(|v| format!("\"{}\"", v)).collect();
                format!("{} ({}: {})", self.name(), self.field_type.type_name(), quoted.join(", "))
            }
            FieldType::Date => format!("{} (string: YYYY-MM-DD)", self.name()),
            _ => format!("{} ({})", self.name(), self.field_type.type_name()),
        }
    }
}
