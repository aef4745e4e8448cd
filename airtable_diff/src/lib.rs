//! airtable_diff: compare the schemas of two Airtable bases
//!
//! Fetches the table and field schemas of two bases and reports which tables
//! must be created, deleted or updated (with per-field changes) to turn the
//! first into the second.

pub mod airtable;
pub mod cli;
pub mod config;
pub mod error;
pub mod schema;
pub mod server;
pub mod service;
pub mod utils;

#[cfg(test)]
mod test;

// Re-export main types for easier access
pub use airtable::{AirtableClient, SchemaSource};
pub use config::Config;
pub use error::{Error, Result};
pub use schema::diff::{compare_schemas, ComparisonResult, FieldChange};
pub use schema::types::{Field, Schema, Table};
pub use service::SchemaComparer;
