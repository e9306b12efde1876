//! Tendertale API — error types.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tendertale_core::error::DomainError;
use thiserror::Error;

/// Startup and runtime errors for the API server.
#[derive(Debug, Error)]
pub enum AppError {
    /// A required environment variable is missing or invalid.
    #[error("configuration error: {0}")]
    Config(String),

    /// Network binding or I/O error.
    #[error("server error: {0}")]
    Server(#[from] std::io::Error),
}

/// JSON body returned for error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    /// Machine-readable error code.
    pub error: &'static str,
    /// Human-readable error message.
    pub message: String,
}

/// HTTP-layer error: a domain error or a request body that could not be used.
#[derive(Debug)]
pub enum ApiError {
    /// An error raised by the engine or the stores.
    Domain(DomainError),
    /// The body was read but is not the expected JSON.
    InvalidJson(String),
    /// The body could not be read at all.
    UnreadableBody(String),
    /// The body exceeds the request size limit.
    PayloadTooLarge(String),
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self::Domain(err)
    }
}

impl ApiError {
    fn status_and_code(&self) -> (StatusCode, &'static str) {
        match self {
            Self::Domain(err) => match err {
                DomainError::SceneNotFound(_) => (StatusCode::NOT_FOUND, "scene_not_found"),
                DomainError::NoSaveState(_) => (StatusCode::NOT_FOUND, "no_save_state"),
                DomainError::InvalidChoice { .. } => (StatusCode::BAD_REQUEST, "invalid_choice"),
                DomainError::InvalidIdentifier(_) => {
                    (StatusCode::BAD_REQUEST, "invalid_identifier")
                }
                DomainError::Validation(_) => (StatusCode::BAD_REQUEST, "validation_error"),
                DomainError::MalformedContent { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "malformed_content")
                }
                DomainError::BrokenTransition { .. } => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "broken_transition")
                }
                DomainError::Persistence(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "persistence_error")
                }
                DomainError::Infrastructure(_) => {
                    (StatusCode::INTERNAL_SERVER_ERROR, "infrastructure_error")
                }
            },
            Self::InvalidJson(_) => (StatusCode::BAD_REQUEST, "invalid_request"),
            Self::UnreadableBody(_) => (StatusCode::INTERNAL_SERVER_ERROR, "invalid_request_body"),
            Self::PayloadTooLarge(_) => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
        }
    }

    fn message(&self) -> String {
        match self {
            Self::Domain(err) => err.to_string(),
            Self::InvalidJson(reason) => format!("invalid request format: {reason}"),
            Self::UnreadableBody(reason) => format!("failed to read request body: {reason}"),
            Self::PayloadTooLarge(reason) => format!("request body too large: {reason}"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_code) = self.status_and_code();
        let message = self.message();

        if status.is_server_error() {
            tracing::error!(error = error_code, %message, "request failed");
        }

        let body = ErrorBody {
            error: error_code,
            message,
        };

        (status, Json(body)).into_response()
    }
}
