//! OpenAPI Documentation

use utoipa::OpenApi;

use cepweather::{CepRequest, ErrorMessage, WeatherReportResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::cep::submit_cep),
    components(schemas(CepRequest, ErrorMessage, WeatherReportResponse)),
    tags(
        (name = "Gateway", description = "CEP validation and forwarding")
    ),
    info(
        title = "CEP Weather Gateway",
        description = "Validates a CEP and relays the Resolver's answer"
    )
)]
pub struct ApiDoc;
