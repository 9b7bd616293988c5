//! Process Route - CEP to aggregated weather

use axum::{body::Bytes, extract::State, routing::post, Json, Router};

use cepweather::{parse_cep_request, Cep, CepRequest, ErrorMessage, WeatherReportResponse};

use crate::error::ApiError;
use crate::AppState;

/// Resolve a CEP to its city and current temperature
#[utoipa::path(
    post,
    path = "/process",
    request_body = CepRequest,
    responses(
        (status = 200, description = "Current weather", body = WeatherReportResponse),
        (status = 400, description = "Body is not a valid JSON request", body = ErrorMessage),
        (status = 404, description = "CEP not found", body = ErrorMessage),
        (status = 422, description = "CEP is not 8 digits", body = ErrorMessage),
        (status = 500, description = "Upstream or configuration failure", body = ErrorMessage)
    ),
    tag = "Resolver"
)]
#[tracing::instrument(name = "process_cep", skip_all)]
pub async fn process(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<WeatherReportResponse>, ApiError> {
    let request = parse_cep_request(&body)?;
    let cep = Cep::parse(&request.cep)?;

    let report = state.weather_service.report_for(&cep).await?;

    Ok(Json(report.into()))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/process", post(process))
}
