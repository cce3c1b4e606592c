use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::core::envelope::ApiEnvelope;

const UPSTREAM_BODY_LIMIT: usize = 512;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    InvalidShape(String),
    #[error("unknown operation '{0}', expected one of: fibonacci, prime, lcm, hcf, AI")]
    UnknownOperation(String),
    #[error("{0}")]
    OutOfRange(String),
    #[error("{0}")]
    InvalidElement(String),
    #[error("request body too large: {0}")]
    PayloadTooLarge(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    MethodNotAllowed(String),
    #[error("upstream service returned {status}: {body}")]
    Upstream { status: u16, body: String },
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn invalid_shape(message: impl Into<String>) -> Self {
        Self::InvalidShape(message.into())
    }

    pub fn unknown_operation(key: impl Into<String>) -> Self {
        Self::UnknownOperation(key.into())
    }

    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    pub fn invalid_element(message: impl Into<String>) -> Self {
        Self::InvalidElement(message.into())
    }

    pub fn payload_too_large(message: impl Into<String>) -> Self {
        Self::PayloadTooLarge(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed(message.into())
    }

    pub fn upstream(status: u16, body: &str) -> Self {
        Self::Upstream {
            status,
            body: body.chars().take(UPSTREAM_BODY_LIMIT).collect(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidShape(_)
            | Self::UnknownOperation(_)
            | Self::OutOfRange(_)
            | Self::InvalidElement(_) => StatusCode::BAD_REQUEST,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            Self::Upstream { .. } | Self::Configuration(_) | Self::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let message = self.to_string();

        if status.is_server_error() {
            tracing::error!(status = status.as_u16(), error = %message, "request failed");
        } else {
            tracing::warn!(status = status.as_u16(), error = %message, "request rejected");
        }

        (status, Json(ApiEnvelope::failure(message))).into_response()
    }
}
