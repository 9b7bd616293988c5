//! HTTP error responses
//!
//! Same mapping as the Resolver, except a failed forward reads
//! "failed to process request".

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use cepweather::{DomainError, ErrorMessage};

/// Body message when the Resolver cannot be reached
pub const FORWARD_FAILED: &str = "failed to process request";

#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<cepweather::CepError> for ApiError {
    fn from(err: cepweather::CepError) -> Self {
        Self(err.into())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.0.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        let message = match &self.0 {
            DomainError::Upstream(_) => FORWARD_FAILED,
            other => other.public_message(),
        };

        if status.is_server_error() {
            tracing::error!("❌ {}", self.0);
        } else {
            tracing::debug!("{}", self.0);
        }

        (status, Json(ErrorMessage::new(message))).into_response()
    }
}
