//! Airtable metadata API client
//!
//! Fetches the list of bases and the table/field schema of a base, normalized
//! to [`Schema`].

use async_trait::async_trait;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

use crate::airtable::field_kind::FieldKind;
use crate::airtable::types::{Base, BasesListResponse, TablesResponse};
use crate::airtable::SchemaSource;
use crate::config::AirtableConfig;
use crate::error::{Error, Result};
use crate::schema::types::{Schema, Table};

/// HTTP client for the Airtable metadata API
#[derive(Debug, Clone)]
pub struct AirtableClient {
    http: reqwest::Client,
    api_url: String,
}

impl AirtableClient {
    /// Create a new client from configuration
    pub fn new(config: &AirtableConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            api_url: config.api_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn get(&self, url: &str, credential: &str) -> reqwest::RequestBuilder {
        self.http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {}", credential))
            .header(CONTENT_TYPE, "application/json")
    }

    /// List every base visible to the credential, following pagination
    pub async fn list_bases(&self, credential: &str) -> Result<Vec<Base>> {
        let url = format!("{}/meta/bases", self.api_url);
        let mut bases = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let mut request = self.get(&url, credential);
            if let Some(offset) = &offset {
                request = request.query(&[("offset", offset)]);
            }

            let response = request.send().await?;
            if !response.status().is_success() {
                return Err(Error::ApiError(format!(
                    "Failed to fetch bases: HTTP error! status: {}",
                    response.status().as_u16()
                )));
            }

            let page: BasesListResponse = response.json().await?;
            tracing::debug!(count = page.bases.len(), "Fetched page of bases");
            bases.extend(page.bases);

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        Ok(bases)
    }

    /// Fetch and normalize the schema of one base
    pub async fn fetch_schema(&self, base_id: &str, credential: &str) -> Result<Schema> {
        tracing::info!(base_id, "Fetching schema for base");
        let url = format!("{}/meta/bases/{}/tables", self.api_url, base_id);

        let response = self
            .get(&url, credential)
            .send()
            .await
            .map_err(|e| Error::fetch(base_id, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::error!(base_id, status = status.as_u16(), "Schema request failed");
            return Err(Error::fetch(
                base_id,
                format!("HTTP error! status: {}", status.as_u16()),
            ));
        }

        let body: TablesResponse = response
            .json()
            .await
            .map_err(|e| Error::fetch(base_id, e.to_string()))?;

        let schema = normalize(base_id, body);
        tracing::info!(
            base_id,
            tables = schema.tables.len(),
            fields = schema.field_count(),
            "Fetched schema"
        );
        Ok(schema)
    }
}

/// Drop per-kind options, keeping ids, names and type tags
fn normalize(base_id: &str, response: TablesResponse) -> Schema {
    let tables: Vec<Table> = response.tables.into_iter().map(Table::from).collect();

    for table in &tables {
        for field in &table.fields {
            if !FieldKind::from_tag(&field.field_type).is_known() {
                tracing::warn!(
                    base_id,
                    table = %table.name,
                    field = %field.name,
                    field_type = %field.field_type,
                    "Unrecognized field type"
                );
            }
        }
    }

    Schema::from(tables)
}

#[async_trait]
impl SchemaSource for AirtableClient {
    async fn list_bases(&self, credential: &str) -> Result<Vec<Base>> {
        AirtableClient::list_bases(self, credential).await
    }

    async fn fetch_schema(&self, base_id: &str, credential: &str) -> Result<Schema> {
        AirtableClient::fetch_schema(self, base_id, credential).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::types::Field;
    use mockito::Matcher;
    use pretty_assertions::assert_eq;

    fn client_with_timeout(server: &mockito::ServerGuard, timeout_seconds: u64) -> AirtableClient {
        let config = AirtableConfig {
            api_url: format!("{}/v0/", server.url()),
            api_key: None,
            timeout_seconds,
        };
        AirtableClient::new(&config).unwrap()
    }

    fn client_for(server: &mockito::ServerGuard) -> AirtableClient {
        client_with_timeout(server, 5)
    }

    const TABLES_BODY: &str = r#"{
        "tables": [
            {
                "id": "tblTasks",
                "name": "Tasks",
                "primaryFieldId": "fldTitle",
                "fields": [
                    {"id": "fldTitle", "name": "Title", "type": "singleLineText"},
                    {
                        "id": "fldStatus",
                        "name": "Status",
                        "type": "singleSelect",
                        "options": {"choices": [{"id": "sel1", "name": "Todo", "color": "blueLight2"}]}
                    }
                ],
                "views": [{"id": "viwGrid", "name": "Grid view", "type": "grid"}]
            }
        ]
    }"#;

    #[tokio::test]
    async fn test_fetch_schema_normalizes_tables() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v0/meta/bases/appA/tables")
            .match_header("authorization", "Bearer pat-secret")
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(TABLES_BODY)
            .create_async()
            .await;

        let schema = client_for(&server).fetch_schema("appA", "pat-secret").await?;
        mock.assert_async().await;

        let expected = Table {
            id: Some("tblTasks".into()),
            name: "Tasks".into(),
            fields: vec![
                Field::new("Title", "singleLineText").with_id("fldTitle"),
                Field::new("Status", "singleSelect").with_id("fldStatus"),
            ],
        };
        assert_eq!(schema, Schema::from(vec![expected]));
        Ok(())
    }

    #[tokio::test]
    async fn test_fetch_schema_non_success_names_base() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v0/meta/bases/appMissing/tables")
            .with_status(404)
            .with_body(r#"{"error": "NOT_FOUND"}"#)
            .create_async()
            .await;

        let err = client_for(&server)
            .fetch_schema("appMissing", "pat")
            .await
            .unwrap_err();

        assert!(matches!(err, Error::FetchError { ref base_id, .. } if base_id == "appMissing"));
        assert_eq!(
            err.to_string(),
            "Failed to fetch schema for base appMissing: HTTP error! status: 404"
        );
    }

    #[tokio::test]
    async fn test_list_bases_follows_offset() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let second = server
            .mock("GET", "/v0/meta/bases")
            .match_query(Matcher::UrlEncoded("offset".into(), "itr2".into()))
            .with_status(200)
            .with_body(r#"{"bases": [{"id": "appB", "name": "Staging", "permissionLevel": "read"}]}"#)
            .create_async()
            .await;
        let first = server
            .mock("GET", "/v0/meta/bases")
            .with_status(200)
            .with_body(
                r#"{"bases": [{"id": "appA", "name": "Production", "permissionLevel": "create"}], "offset": "itr2"}"#,
            )
            .create_async()
            .await;

        let bases = client_for(&server).list_bases("pat").await?;
        first.assert_async().await;
        second.assert_async().await;

        let ids: Vec<_> = bases.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(ids, vec!["appA", "appB"]);
        assert_eq!(bases[1].permission_level, "read");
        Ok(())
    }

    #[tokio::test]
    async fn test_zero_timeout_means_no_timeout() -> Result<()> {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("GET", "/v0/meta/bases/appA/tables")
            .with_status(200)
            .with_body(TABLES_BODY)
            .create_async()
            .await;

        let schema = client_with_timeout(&server, 0)
            .fetch_schema("appA", "pat")
            .await?;
        mock.assert_async().await;
        assert_eq!(schema.field_count(), 2);
        Ok(())
    }

    #[tokio::test]
    async fn test_list_bases_failure() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("GET", "/v0/meta/bases")
            .with_status(401)
            .create_async()
            .await;

        let err = client_for(&server).list_bases("bad").await.unwrap_err();
        assert!(matches!(err, Error::ApiError(_)));
    }
}
