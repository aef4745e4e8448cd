//! Comparison workflow: fetch two schemas, then diff them

use crate::airtable::{Base, SchemaSource};
use crate::config::{DiffConfig, DuplicatePolicy};
use crate::error::{Error, Result};
use crate::schema::diff::{compare_schemas, ComparisonResult};
use crate::schema::types::Schema;
use crate::schema::validate::{ensure_unique_names, find_duplicates};

/// Compares the schemas of two bases fetched from a [`SchemaSource`]
pub struct SchemaComparer<S> {
    source: S,
    config: DiffConfig,
}

impl<S: SchemaSource> SchemaComparer<S> {
    /// Create a new comparer
    pub fn new(source: S, config: DiffConfig) -> Self {
        Self { source, config }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// List the bases visible to `credential`
    pub async fn list_bases(&self, credential: &str) -> Result<Vec<Base>> {
        self.source.list_bases(credential).await
    }

    /// Fetch both bases and compute what must change to turn `base1` into `base2`
    pub async fn compare_bases(
        &self,
        base1: &str,
        base2: &str,
        credential: &str,
    ) -> Result<ComparisonResult> {
        let base1 = base1.trim();
        let base2 = base2.trim();
        if base1.is_empty() || base2.is_empty() {
            return Err(Error::ValidationError(
                "both base1 and base2 must be provided".to_string(),
            ));
        }

        tracing::info!(base1, base2, "Fetching schemas");
        let (schema1, schema2) = futures::try_join!(
            self.source.fetch_schema(base1, credential),
            self.source.fetch_schema(base2, credential),
        )?;

        self.check_duplicates(&schema1, base1)?;
        self.check_duplicates(&schema2, base2)?;

        tracing::info!("Comparing schemas");
        let result = compare_schemas(&schema1, &schema2);
        tracing::info!(
            tables_to_create = result.tables_to_create.len(),
            tables_to_delete = result.tables_to_delete.len(),
            tables_to_update = result.tables_to_update.len(),
            changes = result.change_count(),
            "Comparison complete"
        );
        Ok(result)
    }

    fn check_duplicates(&self, schema: &Schema, base_id: &str) -> Result<()> {
        match self.config.duplicate_names {
            DuplicatePolicy::Reject => ensure_unique_names(schema, base_id),
            DuplicatePolicy::LastWriteWins => {
                for duplicate in find_duplicates(schema) {
                    tracing::warn!(base_id, %duplicate, "Duplicate name, last definition wins");
                }
                Ok(())
            }
        }
    }
}
