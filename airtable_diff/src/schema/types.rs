//! Type definitions for normalized base schemas

use serde::{Deserialize, Serialize};

/// Represents the normalized schema of one base
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema {
    pub tables: Vec<Table>,
}

impl Schema {
    /// Create a new empty schema
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a table to the schema
    pub fn add_table(&mut self, table: Table) {
        self.tables.push(table);
    }

    /// Total number of fields across every table
    pub fn field_count(&self) -> usize {
        self.tables.iter().map(|t| t.fields.len()).sum()
    }
}

impl From<Vec<Table>> for Schema {
    fn from(tables: Vec<Table>) -> Self {
        Self { tables }
    }
}

/// Represents a table in a base
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub fields: Vec<Field>,
}

impl Table {
    /// Create a new table with the given name
    pub fn new(name: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            fields: Vec::new(),
        }
    }

    /// Set the upstream table id
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }

    /// Add a field to the table
    pub fn add_field(&mut self, field: Field) {
        self.fields.push(field);
    }

    /// Builder form of [`Table::add_field`]
    pub fn field(mut self, name: &str, field_type: &str) -> Self {
        self.fields.push(Field::new(name, field_type));
        self
    }
}

/// Represents a field (column) of a table. Only `name` and `field_type`
/// take part in comparison.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

impl Field {
    /// Create a new field with the given name and type tag
    pub fn new(name: &str, field_type: &str) -> Self {
        Self {
            id: None,
            name: name.to_string(),
            field_type: field_type.to_string(),
        }
    }

    /// Set the upstream field id
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = Some(id.to_string());
        self
    }
}
