//! Resolver Routes
//!
//! - /process - CEP to current temperature
//! - /swagger-ui, /api-docs/openapi.json - OpenAPI documentation

pub mod process;
pub mod swagger;
