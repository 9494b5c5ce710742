//! Error types for the JSON API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Resource not found (404)
    #[error("Resource not found: {0}")]
    NotFound(String),

    /// Backend query failed (503)
    #[error("Catalog unavailable: {0}")]
    BackendUnavailable(String),

    /// Backend did not answer before the request deadline (504)
    #[error("Catalog timed out: {0}")]
    BackendTimeout(String),
}

impl From<discography_common::Error> for ApiError {
    fn from(err: discography_common::Error) -> Self {
        if err.is_timeout() {
            ApiError::BackendTimeout(err.to_string())
        } else {
            ApiError::BackendUnavailable(err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BackendUnavailable(msg) => {
                (StatusCode::SERVICE_UNAVAILABLE, "BACKEND_UNAVAILABLE", msg)
            }
            ApiError::BackendTimeout(msg) => {
                (StatusCode::GATEWAY_TIMEOUT, "BACKEND_TIMEOUT", msg)
            }
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        let resp = ApiError::NotFound("Album 9".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);

        let resp = ApiError::BackendUnavailable("down".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::SERVICE_UNAVAILABLE);

        let resp = ApiError::BackendTimeout("slow".to_string()).into_response();
        assert_eq!(resp.status(), StatusCode::GATEWAY_TIMEOUT);
    }

    #[test]
    fn test_common_error_maps_to_unavailable() {
        let err: ApiError = discography_common::Error::Backend {
            status: 500,
            message: "boom".to_string(),
        }
        .into();
        assert!(matches!(err, ApiError::BackendUnavailable(_)));
    }
}
