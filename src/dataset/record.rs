//! Product records and result rows

use std::fmt;

use chrono::NaiveDate;
use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};

use crate::schema::Field;

use super::value::Value;

/// Product category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Software,
    #[serde(rename = "Add-on")]
    AddOn,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Software => "Software",
            Category::AddOn => "Add-on",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sales region
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    #[serde(rename = "North America")]
    NorthAmerica,
    Europe,
    Asia,
}

impl Region {
    pub fn as_str(&self) -> &'static str {
        match self {
            Region::NorthAmerica => "North America",
            Region::Europe => "Europe",
            Region::Asia => "Asia",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An immutable product sales record
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    pub id: i64,
    pub product: String,
    pub category: Category,
    pub price: f64,
    pub units_sold: i64,
    pub region: Region,
    pub date: NaiveDate,
}

impl Record {
    /// Returns the value of a field
    pub fn value(&self, field: Field) -> Value {
        match field {
            Field::Id => Value::Integer(self.id),
            Field::Product => Value::Text(self.product.clone()),
            Field::Category => Value::Text(self.category.as_str().to_string()),
            Field::Price => Value::Number(self.price),
            Field::UnitsSold => Value::Integer(self.units_sold),
            Field::Region => Value::Text(self.region.as_str().to_string()),
            Field::Date => Value::Date(self.date),
        }
    }
}

/// A (possibly projected) result row.
///
/// Serializes as a JSON object whose keys keep the row's field order.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    cells: Vec<(Field, Value)>,
}

impl Row {
    /// Row with every field, in schema order
    pub fn full(record: &Record) -> Self {
        Self::project(record, Field::ALL)
    }

    /// Row restricted to `fields`, in the given order.
    ///
    /// Repeated fields appear once.
    pub fn project(record: &Record, fields: impl IntoIterator<Item = Field>) -> Self {
        let mut cells: Vec<(Field, Value)> = Vec::new();
        for field in fields {
            if cells.iter().any(|(f, _)| *f == field) {
                continue;
            }
            cells.push((field, record.value(field)));
        }
        Self { cells }
    }

    /// Returns the value of a field, if present in the row
    pub fn get(&self, field: Field) -> Option<&Value> {
        self.cells.iter().find(|(f, _)| *f == field).map(|(_, v)| v)
    }

    /// Fields present in the row, in order
    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.cells.iter().map(|(f, _)| *f)
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl Serialize for Row {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (field, value) in &self.cells {
            map.serialize_entry(field.as_str(), value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn widget() -> Record {
        serde_json::from_value(json!({
            "id": 1,
            "product": "A",
            "category": "Software",
            "price": 600,
            "units_sold": 10,
            "region": "Europe",
            "date": "2024-01-01"
        }))
        .unwrap()
    }

    #[test]
    fn test_deserialize_enums() {
        let record: Record = serde_json::from_value(json!({
            "id": 2,
            "product": "B",
            "category": "Add-on",
            "price": 50.5,
            "units_sold": 500,
            "region": "North America",
            "date": "2024-02-01"
        }))
        .unwrap();
        assert_eq!(record.category, Category::AddOn);
        assert_eq!(record.region, Region::NorthAmerica);
    }

    #[test]
    fn test_unknown_enum_value_rejected() {
        let result: Result<Record, _> = serde_json::from_value(json!({
            "id": 2,
            "product": "B",
            "category": "Hardware",
            "price": 1,
            "units_sold": 1,
            "region": "Asia",
            "date": "2024-02-01"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_full_row_matches_source() {
        let row = Row::full(&widget());
        assert_eq!(
            serde_json::to_value(&row).unwrap(),
            json!({
                "id": 1,
                "product": "A",
                "category": "Software",
                "price": 600,
                "units_sold": 10,
                "region": "Europe",
                "date": "2024-01-01"
            })
        );
    }

    #[test]
    fn test_projection_keeps_requested_order() {
        let row = Row::project(&widget(), [Field::Price, Field::Product]);
        let fields: Vec<_> = row.fields().collect();
        assert_eq!(fields, vec![Field::Price, Field::Product]);
        assert_eq!(
            serde_json::to_string(&row).unwrap(),
            r#"{"price":600,"product":"A"}"#
        );
    }

    #[test]
    fn test_projection_drops_repeats() {
        let row = Row::project(&widget(), [Field::Id, Field::Id]);
        assert_eq!(row.len(), 1);
        assert_eq!(row.get(Field::Id), Some(&Value::Integer(1)));
        assert_eq!(row.get(Field::Price), None);
    }
}
