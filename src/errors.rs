// src/errors.rs
// DOCUMENTATION: Custom error types and HTTP responses
// PURPOSE: Centralized error handling for entire application

use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use serde_json::json;
use thiserror::Error;

/// Application-specific error types
/// DOCUMENTATION: Every failure is either the caller's fault (400) or
/// something on our side or upstream (500). The message is sent as-is.
#[derive(Error, Debug)]
pub enum ProxyError {
    /// Missing required input, or a location the geocoder could not resolve
    #[error("{0}")]
    Validation(String),

    /// A credential needed by the route is not configured
    #[error("{0}")]
    Configuration(String),

    /// Transport failure, bad upstream status or unreadable upstream body
    #[error("{0}")]
    Upstream(String),
}

/// Request URLs carry credentials in their query string, so they are
/// stripped before the message reaches logs or callers
impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        ProxyError::Upstream(err.without_url().to_string())
    }
}

/// Convert ProxyError to HTTP response
/// DOCUMENTATION: Body is always {"error": "<message>"}
impl ResponseError for ProxyError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(json!({ "error": self.to_string() }))
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ProxyError::Validation(_) => StatusCode::BAD_REQUEST,
            ProxyError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ProxyError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_rt::test]
    async fn test_error_body_shape() {
        let err = ProxyError::Validation("Keyword is required".to_string());
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);

        let body = to_bytes(err.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "error": "Keyword is required" }));
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            ProxyError::Configuration("Missing IPInfo token".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ProxyError::Upstream("connection refused".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
