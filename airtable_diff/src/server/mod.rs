//! HTTP API for airtable_diff
//!
//! Serves the base listing and the schema comparison as JSON.

pub mod app_data;
pub mod errors;
pub mod routes;

use actix_web::middleware::Logger;
use actix_web::{web, App, HttpServer};
use std::sync::Arc;

use crate::airtable::{AirtableClient, SchemaSource};
use crate::config::Config;
use crate::error::Result;
use crate::service::SchemaComparer;

pub use app_data::AppData;

/// Build shared state backed by the Airtable API
pub fn build_app_data(config: &Config) -> Result<AppData> {
    let client = AirtableClient::new(&config.airtable)?;
    let source: Arc<dyn SchemaSource> = Arc::new(client);
    let comparer = SchemaComparer::new(source, config.diff.clone());
    Ok(AppData::new(comparer, config.airtable.api_key.clone()))
}

/// Run the HTTP server until it is stopped
pub async fn run(config: &Config) -> Result<()> {
    let data = web::Data::new(build_app_data(config)?);
    let host = config.server.host.clone();
    let port = config.server.port;

    if config.airtable.api_key.is_none() {
        tracing::warn!("No API key configured; requests must send a bearer token");
    }
    tracing::info!(%host, port, "Starting server");

    HttpServer::new(move || {
        App::new()
            .app_data(data.clone())
            .configure(routes::config)
            .wrap(Logger::default())
    })
    .bind((host.as_str(), port))?
    .run()
    .await?;

    Ok(())
}
