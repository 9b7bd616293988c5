//! HTTP error responses
//!
//! Maps `DomainError` onto status + `{"message": ...}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};

use cepweather::{DomainError, ErrorMessage};

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

        if status.is_server_error() {
            tracing::error!("❌ {}", self.0);
        } else {
            tracing::debug!("{}", self.0);
        }

        (status, Json(ErrorMessage::new(self.0.public_message()))).into_response()
    }
}
