//! Airtable module for airtable_diff
//!
//! This module fetches base listings and schemas from the Airtable metadata API.

pub mod client;
pub mod field_kind;
pub mod types;

use async_trait::async_trait;
use std::sync::Arc;

use crate::error::Result;
use crate::schema::types::Schema;

// Re-export key types
pub use client::AirtableClient;
pub use field_kind::FieldKind;
pub use types::Base;

/// Source of base listings and normalized schemas
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// List the bases visible to `credential`
    async fn list_bases(&self, credential: &str) -> Result<Vec<Base>>;

    /// Fetch the normalized schema of one base
    async fn fetch_schema(&self, base_id: &str, credential: &str) -> Result<Schema>;
}

#[async_trait]
impl<T: SchemaSource + ?Sized> SchemaSource for Arc<T> {
    async fn list_bases(&self, credential: &str) -> Result<Vec<Base>> {
        (**self).list_bases(credential).await
    }

    async fn fetch_schema(&self, base_id: &str, credential: &str) -> Result<Schema> {
        (**self).fetch_schema(base_id, credential).await
    }
}
