//! Wire types for the Airtable metadata API

use serde::{Deserialize, Serialize};

use crate::schema::types::{Field, Table};

/// A base visible to the credential
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Base {
    pub id: String,
    pub name: String,
    pub permission_level: String,
}

/// One page of `GET /meta/bases`
#[derive(Debug, Clone, Deserialize)]
pub struct BasesListResponse {
    pub bases: Vec<Base>,
    #[serde(default)]
    pub offset: Option<String>,
}

/// `GET /meta/bases/{baseId}/tables`
#[derive(Debug, Clone, Deserialize)]
pub struct TablesResponse {
    pub tables: Vec<ApiTable>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiTable {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub primary_field_id: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    pub fields: Vec<ApiField>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiField {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub field_type: String,
    #[serde(default)]
    pub description: Option<String>,
    /// Per-kind options; never compared
    #[serde(default)]
    pub options: Option<serde_json::Value>,
}

impl From<ApiField> for Field {
    fn from(field: ApiField) -> Self {
        Field {
            id: Some(field.id),
            name: field.name,
            field_type: field.field_type,
        }
    }
}

impl From<ApiTable> for Table {
    fn from(table: ApiTable) -> Self {
        Table {
            id: Some(table.id),
            name: table.name,
            fields: table.fields.into_iter().map(Field::from).collect(),
        }
    }
}
