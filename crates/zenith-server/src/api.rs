//! API error type for the Zenith server.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use zenith_providers::ProviderError;
use zenith_session::SessionError;

/// API error type mapping to HTTP status codes.
///
/// Messages are operator-safe: they name the failing stage and
/// taxonomy, never credentials or provider payloads.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("invalid input: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("upstream provider failure: {0}")]
    BadGateway(String),
    #[error("internal server error: {0}")]
    InternalServerError(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            ApiError::BadGateway(msg) => (StatusCode::BAD_GATEWAY, msg),
            ApiError::InternalServerError(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg),
        };

        let body = Json(serde_json::json!({
            "error": message
        }));

        (status, body).into_response()
    }
}

impl From<SessionError> for ApiError {
    fn from(err: SessionError) -> Self {
        match &err {
            SessionError::Speech(ProviderError::Config(_))
            | SessionError::Music(ProviderError::Config(_)) => {
                ApiError::InternalServerError(err.to_string())
            }
            SessionError::Speech(_) | SessionError::Music(_) => {
                ApiError::BadGateway(err.to_string())
            }
            SessionError::Storage(_) => ApiError::InternalServerError(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use zenith_providers::StorageError;

    #[test]
    fn provider_outage_maps_to_bad_gateway() {
        let err = SessionError::Music(ProviderError::Unavailable("timeout".to_string()));
        assert!(matches!(ApiError::from(err), ApiError::BadGateway(_)));
    }

    #[test]
    fn misconfiguration_maps_to_internal_error() {
        let err = SessionError::Speech(ProviderError::Config("key missing".to_string()));
        assert!(matches!(ApiError::from(err), ApiError::InternalServerError(_)));
    }

    #[test]
    fn storage_failure_maps_to_internal_error() {
        let err = SessionError::Storage(StorageError::CreateDir {
            path: "out".to_string(),
            source: std::io::Error::other("disk full"),
        });
        assert!(matches!(ApiError::from(err), ApiError::InternalServerError(_)));
    }
}
