//! Human and machine readable rendering of comparison results

use colored::Colorize;

use crate::error::Result;
use crate::schema::diff::{ComparisonResult, FieldChange};

/// Output format for a comparison report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

/// Render a comparison result in the requested format
pub fn render(result: &ComparisonResult, format: OutputFormat, color: bool) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(result, color)),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(result)?),
        OutputFormat::Yaml => Ok(serde_yaml::to_string(result)?),
    }
}

/// One line describing a field change, e.g. `update field: Status to multipleSelects`
pub fn describe_change(change: &FieldChange) -> String {
    match change {
        FieldChange::Create { field, field_type } => {
            format!("create field: {} ({})", field, field_type)
        }
        FieldChange::Update { field, new_type } => {
            format!("update field: {} to {}", field, new_type)
        }
        FieldChange::Delete { field } => format!("delete field: {}", field),
    }
}

/// Render the sectioned text listing. Empty sections are left out.
pub fn render_text(result: &ComparisonResult, color: bool) -> String {
    if result.is_empty() {
        return "No differences found.".to_string();
    }

    let heading = |s: &str| if color { s.bold().to_string() } else { s.to_string() };
    let mut lines = Vec::new();

    if !result.tables_to_create.is_empty() {
        lines.push(heading("Tables to Create:"));
        for table in &result.tables_to_create {
            let name = if color { table.name.green().to_string() } else { table.name.clone() };
            lines.push(format!("  - {}", name));
            for field in &table.fields {
                lines.push(format!("      - {} ({})", field.name, field.field_type));
            }
        }
    }

    if !result.tables_to_delete.is_empty() {
        lines.push(heading("Tables to Delete:"));
        for table in &result.tables_to_delete {
            let name = if color { table.red().to_string() } else { table.clone() };
            lines.push(format!("  - {}", name));
        }
    }

    if !result.tables_to_update.is_empty() {
        lines.push(heading("Tables to Update:"));
        for table in &result.tables_to_update {
            let name = if color { table.name.yellow().to_string() } else { table.name.clone() };
            lines.push(format!("  - {}", name));
            for change in &table.changes {
                let line = describe_change(change);
                let line = match (color, change) {
                    (false, _) => line,
                    (true, FieldChange::Create { .. }) => line.green().to_string(),
                    (true, FieldChange::Update { .. }) => line.yellow().to_string(),
                    (true, FieldChange::Delete { .. }) => line.red().to_string(),
                };
                lines.push(format!("      - {}", line));
            }
        }
    }

    lines.join("\n")
}
