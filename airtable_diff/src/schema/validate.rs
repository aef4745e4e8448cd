//! Duplicate-name detection for schemas

use std::collections::HashSet;
use std::fmt;

use crate::error::{Error, Result};
use crate::schema::types::Schema;

/// A name that appears more than once where it should be unique
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuplicateName {
    Table(String),
    Field { table: String, field: String },
}

impl fmt::Display for DuplicateName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DuplicateName::Table(name) => write!(f, "table \"{}\"", name),
            DuplicateName::Field { table, field } => {
                write!(f, "field \"{}\" in table \"{}\"", field, table)
            }
        }
    }
}

/// Find every repeated table name and every repeated field name within a table.
/// Each duplicate is reported once, in order of its second occurrence.
pub fn find_duplicates(schema: &Schema) -> Vec<DuplicateName> {
    let mut duplicates = Vec::new();
    let mut seen_tables = HashSet::new();
    let mut reported_tables = HashSet::new();

    for table in &schema.tables {
        if !seen_tables.insert(table.name.as_str()) && reported_tables.insert(table.name.as_str()) {
            duplicates.push(DuplicateName::Table(table.name.clone()));
        }

        let mut seen_fields = HashSet::new();
        let mut reported_fields = HashSet::new();
        for field in &table.fields {
            if !seen_fields.insert(field.name.as_str())
                && reported_fields.insert(field.name.as_str())
            {
                duplicates.push(DuplicateName::Field {
                    table: table.name.clone(),
                    field: field.name.clone(),
                });
            }
        }
    }

    duplicates
}

/// Fail with a validation error if `schema` repeats any names.
/// `side` labels the schema in the message (for example a base id).
pub fn ensure_unique_names(schema: &Schema, side: &str) -> Result<()> {
    let duplicates = find_duplicates(schema);
    if duplicates.is_empty() {
        return Ok(());
    }

    let listed: Vec<String> = duplicates.iter().map(ToString::to_string).collect();
    Err(Error::ValidationError(format!(
        "duplicate names in schema {}: {}",
        side,
        listed.join(", ")
    )))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::Table;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unique_schema_passes() {
        let schema = Schema::from(vec![
            Table::new("Tasks").field("Title", "singleLineText"),
            Table::new("People").field("Title", "singleLineText"),
        ]);
        assert!(find_duplicates(&schema).is_empty());
        assert!(ensure_unique_names(&schema, "appA").is_ok());
    }

    #[test]
    fn test_duplicates_reported_once() {
        let schema = Schema::from(vec![
            Table::new("Tasks")
                .field("Title", "singleLineText")
                .field("Title", "multilineText")
                .field("Title", "email"),
            Table::new("Tasks"),
            Table::new("Tasks"),
        ]);
        assert_eq!(
            find_duplicates(&schema),
            vec![
                DuplicateName::Field {
                    table: "Tasks".into(),
                    field: "Title".into()
                },
                DuplicateName::Table("Tasks".into()),
            ]
        );
    }

    #[test]
    fn test_ensure_unique_names_message() {
        let schema = Schema::from(vec![Table::new("A"), Table::new("A")]);
        let err = ensure_unique_names(&schema, "appB").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation error: duplicate names in schema appB: table \"A\""
        );
    }
}
