//! Schema module for airtable_diff
//!
//! This module holds normalized base schemas, their comparison, and rendering
//! of comparison results.

pub mod diff;
pub mod render;
pub mod types;
pub mod validate;

// Re-export key types
pub use diff::{compare_fields, compare_schemas, ComparisonResult, FieldChange, NewField, NewTable, TableDiff};
pub use render::OutputFormat;
pub use types::{Field, Schema, Table};
pub use validate::{ensure_unique_names, find_duplicates, DuplicateName};
