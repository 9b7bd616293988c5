//! Gateway Routes
//!
//! - /cep - validate and forward a CEP lookup
//! - /swagger-ui, /api-docs/openapi.json - OpenAPI documentation

pub mod cep;
pub mod swagger;
