//! Schema registry for the `products` collection
//!
//! Constant for the process lifetime. Pure lookups, no errors.

use super::types::{Field, FieldDef, FieldType};

/// Allowed `category` values
pub const CATEGORY_VALUES: &[&str] = &["Software", "Add-on"];

/// Allowed `region` values
pub const REGION_VALUES: &[&str] = &["North America", "Europe", "Asia"];

const PRODUCT_FIELDS: [FieldDef; 7] = [
    FieldDef::new(Field::Id, FieldType::Integer),
    FieldDef::new(Field::Product, FieldType::Text),
    FieldDef::new(Field::Category, FieldType::Enum(CATEGORY_VALUES)),
    FieldDef::new(Field::Price, FieldType::Number),
    FieldDef::new(Field::UnitsSold, FieldType::Integer),
    FieldDef::new(Field::Region, FieldType::Enum(REGION_VALUES)),
    FieldDef::new(Field::Date, FieldType::Date),
];

/// Read-only description of the record shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaRegistry;

impl SchemaRegistry {
    /// Registry for the product records
    pub fn products() -> Self {
        SchemaRegistry
    }

    /// Name of the collection queries are rendered against
    pub fn collection(&self) -> &'static str {
        "products"
    }

    /// Field definitions in schema order
    pub fn fields(&self) -> &'static [FieldDef] {
        &PRODUCT_FIELDS
    }

    /// Total number of fields; used as the breadth of an unprojected query
    pub fn field_count(&self) -> usize {
        PRODUCT_FIELDS.len()
    }

    /// Resolves a field by wire name
    pub fn lookup(&self, name: &str) -> Option<&'static FieldDef> {
        PRODUCT_FIELDS.iter().find(|def| def.name() == name)
    }

    /// Returns true if `name` is a schema field
    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Allowed values for an enum-typed field
    pub fn allowed_values(&self, field: Field) -> Option<&'static [&'static str]> {
        self.definition(field).allowed_values()
    }

    /// Definition of a known field
    pub fn definition(&self, field: Field) -> &'static FieldDef {
        // PRODUCT_FIELDS is declared in Field::ALL order
        &PRODUCT_FIELDS[field as usize]
    }

    /// Human-readable description, one `- field (type)` line per field.
    pub fn describe(&self) -> String {
        self.fields()
            .iter()
            .map(|def| format!("- {}", def.describe()))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
