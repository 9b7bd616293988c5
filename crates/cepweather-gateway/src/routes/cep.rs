//! CEP Route - validate, forward, relay

use axum::{
    body::Bytes,
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Router,
};

use cepweather::{
    parse_cep_request, Cep, CepRequest, DomainError, ErrorMessage, WeatherReportResponse,
};

use crate::error::ApiError;
use crate::AppState;

/// Validate a CEP and relay the Resolver's answer unchanged
#[utoipa::path(
    post,
    path = "/cep",
    request_body = CepRequest,
    responses(
        (status = 200, description = "Resolver answer, relayed", body = WeatherReportResponse),
        (status = 400, description = "Body is not a valid JSON request", body = ErrorMessage),
        (status = 404, description = "CEP not found (relayed)", body = ErrorMessage),
        (status = 422, description = "CEP is not 8 digits", body = ErrorMessage),
        (status = 500, description = "Resolver unreachable or failed", body = ErrorMessage)
    ),
    tag = "Gateway"
)]
#[tracing::instrument(name = "cep_handler", skip_all)]
pub async fn submit_cep(State(state): State<AppState>, body: Bytes) -> Result<Response, ApiError> {
    let request = parse_cep_request(&body)?;
    let cep = Cep::parse(&request.cep)?;

    let relayed = state.resolver.resolve(&cep).await?;
    let status = StatusCode::from_u16(relayed.status).map_err(|err| {
        DomainError::upstream("Resolver", format!("invalid status {}: {err}", relayed.status))
    })?;

    Ok((
        status,
        [(header::CONTENT_TYPE, "application/json")],
        relayed.body,
    )
        .into_response())
}

pub fn router() -> Router<AppState> {
    Router::new().route("/cep", post(submit_cep))
}
