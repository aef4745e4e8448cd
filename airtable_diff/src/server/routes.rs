use actix_web::{web, HttpRequest, HttpResponse};
use serde::{Deserialize, Serialize};

use crate::airtable::Base;
use crate::server::app_data::AppData;
use crate::server::errors::HttpError;

/// Body of `POST /api/compare-schemas`. `base1` is the baseline side.
#[derive(Debug, Deserialize, Serialize)]
pub struct CompareRequest {
    pub base1: String,
    pub base2: String,
}

/// Body of `GET /api/bases`
#[derive(Debug, Serialize)]
pub struct BasesResponse {
    pub bases: Vec<Base>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(
        web::JsonConfig::default()
            .error_handler(|err, _req| HttpError::BadRequest(err.to_string()).into()),
    )
    .route("/api/bases", web::get().to(list_bases))
    .route("/api/compare-schemas", web::post().to(compare_schemas));
}

/// A missing credential fails the request; a failed listing still answers
/// 200 with an empty list and a message.
pub async fn list_bases(
    req: HttpRequest,
    data: web::Data<AppData>,
) -> Result<HttpResponse, HttpError> {
    let credential = data.credential(&req).map_err(HttpError::Internal)?;

    match data.comparer.list_bases(&credential).await {
        Ok(bases) => Ok(HttpResponse::Ok().json(BasesResponse { bases, error: None })),
        Err(e) => {
            tracing::error!(error = %e, "Error fetching bases");
            Ok(HttpResponse::Ok().json(BasesResponse {
                bases: Vec::new(),
                error: Some("Failed to fetch bases".to_string()),
            }))
        }
    }
}

pub async fn compare_schemas(
    req: HttpRequest,
    data: web::Data<AppData>,
    body: web::Json<CompareRequest>,
) -> Result<HttpResponse, HttpError> {
    let CompareRequest { base1, base2 } = body.into_inner();
    tracing::info!(%base1, %base2, "Received base IDs");

    let credential = data.credential(&req)?;
    let result = data
        .comparer
        .compare_bases(&base1, &base2, &credential)
        .await?;

    Ok(HttpResponse::Ok().json(result))
}
