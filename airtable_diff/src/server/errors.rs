use actix_web::{error, http::StatusCode, HttpResponse};
use serde::Serialize;
use thiserror::Error;

use crate::error::Error;

/// Body of every failed API response
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Error)]
pub enum HttpError {
    #[error("Invalid request: {0}")]
    BadRequest(String),

    #[error("Failed to compare schemas: {0}")]
    Compare(#[from] Error),

    #[error("{0}")]
    Internal(Error),
}

impl error::ResponseError for HttpError {
    fn status_code(&self) -> StatusCode {
        match self {
            HttpError::BadRequest(_) => StatusCode::BAD_REQUEST,
            HttpError::Compare(Error::ValidationError(_)) => StatusCode::BAD_REQUEST,
            HttpError::Compare(_) | HttpError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!(error = %self, "Request failed");
        HttpResponse::build(self.status_code()).json(ErrorBody {
            error: self.to_string(),
        })
    }
}
