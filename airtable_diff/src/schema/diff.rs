//! Schema difference calculator
//!
//! This module compares two base schemas and calculates what must change to
//! turn the first (baseline) into the second (target).

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::schema::types::{Field, Schema, Table};

/// Represents changes needed to turn one schema into another
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResult {
    pub tables_to_create: Vec<NewTable>,
    pub tables_to_delete: Vec<String>,
    pub tables_to_update: Vec<TableDiff>,
}

impl ComparisonResult {
    /// Check if the diff is empty (schemas are structurally identical)
    pub fn is_empty(&self) -> bool {
        self.tables_to_create.is_empty()
            && self.tables_to_delete.is_empty()
            && self.tables_to_update.is_empty()
    }

    /// Number of table-level entries plus field-level changes
    pub fn change_count(&self) -> usize {
        self.tables_to_create.len()
            + self.tables_to_delete.len()
            + self
                .tables_to_update
                .iter()
                .map(|t| t.changes.len())
                .sum::<usize>()
    }
}

/// A table present only in the target schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewTable {
    pub name: String,
    pub fields: Vec<NewField>,
}

/// Name and type of a field in a table to create
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewField {
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
}

/// Field changes for a table present in both schemas
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableDiff {
    pub name: String,
    pub changes: Vec<FieldChange>,
}

/// A single field-level change
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "lowercase")]
pub enum FieldChange {
    Create {
        field: String,
        #[serde(rename = "type")]
        field_type: String,
    },
    Update {
        field: String,
        #[serde(rename = "newType")]
        new_type: String,
    },
    Delete {
        field: String,
    },
}

impl FieldChange {
    /// Name of the field this change refers to
    pub fn field(&self) -> &str {
        match self {
            FieldChange::Create { field, .. }
            | FieldChange::Update { field, .. }
            | FieldChange::Delete { field } => field,
        }
    }

    /// The action tag as it appears on the wire
    pub fn action(&self) -> &'static str {
        match self {
            FieldChange::Create { .. } => "create",
            FieldChange::Update { .. } => "update",
            FieldChange::Delete { .. } => "delete",
        }
    }
}

/// Entries looked up by name during comparison
trait Named {
    fn name(&self) -> &str;
}

impl Named for Field {
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Table {
    fn name(&self) -> &str {
        &self.name
    }
}

/// Index entries by name. A repeated name keeps the position of its first
/// occurrence and the value of its last one.
fn index_by_name<T: Named>(items: &[T]) -> IndexMap<&str, &T> {
    let mut map = IndexMap::with_capacity(items.len());
    for item in items {
        map.insert(item.name(), item);
    }
    map
}

/// Compare the fields of two same-named tables.
///
/// Deletions and updates come first, in the order of `fields1`; creations
/// follow, in the order of `fields2`.
pub fn compare_fields(fields1: &[Field], fields2: &[Field]) -> Vec<FieldChange> {
    let current = index_by_name(fields1);
    let target = index_by_name(fields2);

    let mut changes = Vec::new();

    for (&name, field) in &current {
        match target.get(name) {
            None => changes.push(FieldChange::Delete {
                field: name.to_string(),
            }),
            Some(target_field) if target_field.field_type != field.field_type => {
                changes.push(FieldChange::Update {
                    field: name.to_string(),
                    new_type: target_field.field_type.clone(),
                })
            }
            Some(_) => {}
        }
    }

    for (&name, field) in &target {
        if !current.contains_key(name) {
            changes.push(FieldChange::Create {
                field: name.to_string(),
                field_type: field.field_type.clone(),
            });
        }
    }

    changes
}

/// Compute what must change to turn `schema1` into `schema2`.
///
/// Deleted and updated tables follow the order of `schema1`; created tables
/// follow the order of `schema2`. The result is not symmetric in its
/// arguments.
pub fn compare_schemas(schema1: &Schema, schema2: &Schema) -> ComparisonResult {
    let current = index_by_name(&schema1.tables);
    let target = index_by_name(&schema2.tables);

    let mut result = ComparisonResult::default();

    for (&name, table) in &current {
        match target.get(name) {
            None => result.tables_to_delete.push(name.to_string()),
            Some(target_table) => {
                let changes = compare_fields(&table.fields, &target_table.fields);
                if !changes.is_empty() {
                    result.tables_to_update.push(TableDiff {
                        name: name.to_string(),
                        changes,
                    });
                }
            }
        }
    }

    for (&name, table) in &target {
        if !current.contains_key(name) {
            result.tables_to_create.push(NewTable {
                name: name.to_string(),
                fields: table
                    .fields
                    .iter()
                    .map(|f| NewField {
                        name: f.name.clone(),
                        field_type: f.field_type.clone(),
                    })
                    .collect(),
            });
        }
    }

    result
}
