//! Domain Errors
//!
//! Error types for the lookup pipeline and their HTTP mapping.

use thiserror::Error;

use crate::domain::value_objects::CepError;

/// Body message for a CEP that fails validation
pub const INVALID_ZIPCODE: &str = "invalid zipcode";
/// Body message for a CEP the directory does not know
pub const ZIPCODE_NOT_FOUND: &str = "can not find zipcode";
/// Body message for an unreadable request body
pub const INVALID_REQUEST: &str = "invalid request body";
/// Body message for server-side failures
pub const INTERNAL_ERROR: &str = "internal server error";

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Invalid CEP: {0}")]
    InvalidCep(#[from] CepError),

    #[error("CEP not found: {0}")]
    CepNotFound(String),

    #[error("Missing configuration: {0}")]
    MissingConfig(String),

    #[error("External service error: {0}")]
    Upstream(String),
}

impl DomainError {
    pub fn upstream<T: AsRef<str>>(service: T, detail: impl std::fmt::Display) -> Self {
        Self::Upstream(format!("{}: {}", service.as_ref(), detail))
    }

    /// HTTP status this error is answered with
    pub fn status_code(&self) -> u16 {
        match self {
            DomainError::MalformedRequest(_) => 400,
            DomainError::InvalidCep(_) => 422,
            DomainError::CepNotFound(_) => 404,
            DomainError::MissingConfig(_) | DomainError::Upstream(_) => 500,
        }
    }

    /// Message safe to return to the caller. Internal detail stays in logs.
    pub fn public_message(&self) -> &'static str {
        match self {
            DomainError::MalformedRequest(_) => INVALID_REQUEST,
            DomainError::InvalidCep(_) => INVALID_ZIPCODE,
            DomainError::CepNotFound(_) => ZIPCODE_NOT_FOUND,
            DomainError::MissingConfig(_) | DomainError::Upstream(_) => INTERNAL_ERROR,
        }
    }
}
