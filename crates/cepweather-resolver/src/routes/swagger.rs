//! OpenAPI Documentation

use utoipa::OpenApi;

use cepweather::{CepRequest, ErrorMessage, WeatherReportResponse};

#[derive(OpenApi)]
#[openapi(
    paths(super::process::process),
    components(schemas(CepRequest, ErrorMessage, WeatherReportResponse)),
    tags(
        (name = "Resolver", description = "CEP to city and current temperature")
    ),
    info(
        title = "CEP Weather Resolver",
        description = "Resolves a CEP through ViaCEP and WeatherAPI"
    )
)]
pub struct ApiDoc;
