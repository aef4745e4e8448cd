//! Tests for airtable_diff
//!
//! Whole-result properties of schema comparison.

use pretty_assertions::assert_eq;
use rstest::*;
use serde_json::json;
use std::collections::HashSet;

use crate::schema::diff::{compare_schemas, ComparisonResult, FieldChange};
use crate::schema::types::{Schema, Table};

#[fixture]
fn production() -> Schema {
    Schema::from(vec![
        Table::new("Tasks")
            .with_id("tbl001")
            .field("Title", "singleLineText")
            .field("Status", "singleSelect")
            .field("Due", "date")
            .field("Legacy", "checkbox"),
        Table::new("People")
            .field("Name", "singleLineText")
            .field("Email", "email"),
        Table::new("Archive").field("Note", "multilineText"),
    ])
}

#[fixture]
fn staging() -> Schema {
    Schema::from(vec![
        Table::new("Projects").field("Name", "singleLineText"),
        Table::new("People")
            .field("Name", "singleLineText")
            .field("Email", "email"),
        Table::new("Tasks")
            .with_id("tbl999")
            .field("Title", "singleLineText")
            .field("Status", "multipleSelects")
            .field("Due", "dateTime")
            .field("Owner", "singleCollaborator"),
    ])
}

fn bucket_names(result: &ComparisonResult) -> Vec<String> {
    result
        .tables_to_create
        .iter()
        .map(|t| t.name.clone())
        .chain(result.tables_to_delete.iter().cloned())
        .chain(result.tables_to_update.iter().map(|t| t.name.clone()))
        .collect()
}

#[rstest]
fn test_identity(production: Schema, staging: Schema) {
    assert!(compare_schemas(&production, &production).is_empty());
    assert!(compare_schemas(&staging, &staging).is_empty());
}

#[rstest]
fn test_full_comparison(production: Schema, staging: Schema) {
    let result = compare_schemas(&production, &staging);
    assert_eq!(
        serde_json::to_value(&result).unwrap(),
        json!({
            "tablesToCreate": [
                {"name": "Projects", "fields": [{"name": "Name", "type": "singleLineText"}]}
            ],
            "tablesToDelete": ["Archive"],
            "tablesToUpdate": [
                {
                    "name": "Tasks",
                    "changes": [
                        {"action": "update", "field": "Status", "newType": "multipleSelects"},
                        {"action": "update", "field": "Due", "newType": "dateTime"},
                        {"action": "delete", "field": "Legacy"},
                        {"action": "create", "field": "Owner", "type": "singleCollaborator"}
                    ]
                }
            ]
        })
    );
}

#[rstest]
fn test_table_partitioning(production: Schema, staging: Schema) {
    for result in [
        compare_schemas(&production, &staging),
        compare_schemas(&staging, &production),
    ] {
        let names = bucket_names(&result);
        let unique: HashSet<_> = names.iter().collect();
        assert_eq!(names.len(), unique.len());
    }
}

#[rstest]
fn test_each_field_changes_at_most_once(production: Schema, staging: Schema) {
    let result = compare_schemas(&production, &staging);
    for table in &result.tables_to_update {
        let fields: Vec<_> = table.changes.iter().map(FieldChange::field).collect();
        let unique: HashSet<_> = fields.iter().collect();
        assert_eq!(fields.len(), unique.len(), "table {}", table.name);
    }
}

#[rstest]
fn test_reverse_direction(production: Schema, staging: Schema) {
    let forward = compare_schemas(&production, &staging);
    let backward = compare_schemas(&staging, &production);

    assert_eq!(backward.tables_to_delete, vec!["Projects"]);
    assert_eq!(backward.tables_to_create.len(), 1);
    assert_eq!(backward.tables_to_create[0].name, "Archive");
    assert_eq!(forward.tables_to_delete, vec!["Archive"]);

    // Updates keep pointing at the new side's type rather than disappearing
    assert_eq!(
        backward.tables_to_update[0].changes,
        vec![
            FieldChange::Update {
                field: "Status".into(),
                new_type: "singleSelect".into()
            },
            FieldChange::Update {
                field: "Due".into(),
                new_type: "date".into()
            },
            FieldChange::Delete {
                field: "Owner".into()
            },
            FieldChange::Create {
                field: "Legacy".into(),
                field_type: "checkbox".into()
            },
        ]
    );
}

#[rstest]
fn test_ids_do_not_participate(production: Schema) {
    let mut renumbered = production.clone();
    for (i, table) in renumbered.tables.iter_mut().enumerate() {
        table.id = Some(format!("tblNew{}", i));
        for field in &mut table.fields {
            field.id = Some(format!("fld{}", field.name));
        }
    }
    assert!(compare_schemas(&production, &renumbered).is_empty());
}

#[rstest]
fn test_inputs_are_not_mutated(production: Schema, staging: Schema) {
    let before = (production.clone(), staging.clone());
    let first = compare_schemas(&production, &staging);
    let second = compare_schemas(&production, &staging);
    assert_eq!(first, second);
    assert_eq!((production, staging), before);
}

#[rstest]
#[case("singleLineText", "multilineText")]
#[case("number", "currency")]
#[case("multipleRecordLinks", "singleLineText")]
fn test_type_change_reports_target_type(#[case] from: &str, #[case] to: &str) {
    let schema1 = Schema::from(vec![Table::new("T").field("F", from)]);
    let schema2 = Schema::from(vec![Table::new("T").field("F", to)]);
    let result = compare_schemas(&schema1, &schema2);
    assert_eq!(
        result.tables_to_update[0].changes,
        vec![FieldChange::Update {
            field: "F".into(),
            new_type: to.into()
        }]
    );
}

#[test]
fn test_schema_deserializes_from_normalized_json() {
    let schema: Schema = serde_json::from_value(json!([
        {"id": "tbl1", "name": "Tasks", "fields": [{"id": "fld1", "name": "Title", "type": "singleLineText"}]}
    ]))
    .unwrap();
    assert_eq!(schema.tables[0].fields[0].field_type, "singleLineText");
    assert_eq!(schema.field_count(), 1);
}
