use actix_web::http::header::AUTHORIZATION;
use actix_web::HttpRequest;
use std::sync::Arc;

use crate::airtable::SchemaSource;
use crate::config::API_KEY_ENV;
use crate::error::{Error, Result};
use crate::service::SchemaComparer;

/// Shared state for request handlers
#[derive(Clone)]
pub struct AppData {
    pub comparer: Arc<SchemaComparer<Arc<dyn SchemaSource>>>,
    /// Key from configuration, used when a request brings no bearer token
    pub api_key: Option<String>,
}

impl AppData {
    pub fn new(comparer: SchemaComparer<Arc<dyn SchemaSource>>, api_key: Option<String>) -> Self {
        Self {
            comparer: Arc::new(comparer),
            api_key,
        }
    }

    /// The credential for this request: its own bearer token, else the
    /// configured key.
    pub fn credential(&self, req: &HttpRequest) -> Result<String> {
        let from_header = req
            .headers()
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(bearer_token)
            .filter(|token| !token.is_empty());

        match from_header.or(self.api_key.as_deref().map(str::trim)) {
            Some(token) if !token.is_empty() => Ok(token.to_string()),
            _ => Err(Error::ConfigError(format!("{} is not set", API_KEY_ENV))),
        }
    }
}

/// Token from an `Authorization` value; the scheme matches case-insensitively
fn bearer_token(value: &str) -> Option<&str> {
    let (scheme, token) = value.trim().split_once(' ')?;
    if scheme.eq_ignore_ascii_case("bearer") {
        Some(token.trim())
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::bearer_token;
    use rstest::rstest;

    #[rstest]
    #[case("Bearer pat1", Some("pat1"))]
    #[case("bearer pat2", Some("pat2"))]
    #[case("BEARER   pat3 ", Some("pat3"))]
    #[case("Basic dXNlcjpwYXNz", None)]
    #[case("Bearer", None)]
    fn test_bearer_token(#[case] header: &str, #[case] expected: Option<&str>) {
        assert_eq!(bearer_token(header), expected);
    }
}
