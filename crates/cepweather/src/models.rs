//! Wire Models
//!
//! JSON bodies exchanged by the Gateway, the Resolver and their clients.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{DomainError, WeatherReport};

/// Body of `POST /cep` and `POST /process`
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CepRequest {
    /// Postal code, 8 digits without separators
    #[serde(default)]
    #[schema(example = "01001000")]
    pub cep: String,
}

impl CepRequest {
    pub fn new(cep: impl Into<String>) -> Self {
        Self { cep: cep.into() }
    }
}

/// Error body: `{"message": "..."}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ErrorMessage {
    pub message: String,
}

impl ErrorMessage {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Successful Resolver response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WeatherReportResponse {
    #[schema(example = "São Paulo")]
    pub city: String,
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl From<WeatherReport> for WeatherReportResponse {
    fn from(report: WeatherReport) -> Self {
        Self {
            city: report.city,
            temp_c: report.temperature.celsius,
            temp_f: report.temperature.fahrenheit,
            temp_k: report.temperature.kelvin,
        }
    }
}

/// Decode a raw request body.
///
/// A missing `cep` field decodes to an empty string, which then fails CEP
/// validation. Anything that is not a JSON object with an optional string
/// `cep` is a malformed request.
pub fn parse_cep_request(body: &[u8]) -> Result<CepRequest, DomainError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| DomainError::MalformedRequest(e.to_string()))?;

    // serde would otherwise accept `[]` as a struct in sequence form
    if !value.is_object() {
        return Err(DomainError::MalformedRequest(
            "expected a JSON object".to_string(),
        ));
    }

    serde_json::from_value(value).map_err(|e| DomainError::MalformedRequest(e.to_string()))
}
