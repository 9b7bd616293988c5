//! CEP Weather Domain Library
//!
//! Core domain types and interfaces shared by the Gateway and Resolver services.
//!
//! # Architecture
//!
//! - **Domain Layer** (`domain/`): Pure business types and logic
//!   - `value_objects/`: `Cep` (the shared validation contract) and `Temperature`
//!   - `entities/`: `WeatherReport`
//!   - `errors/`: `DomainError` and its HTTP mapping
//!
//! - **Ports** (`ports/`): Abstract interfaces (traits) for outbound calls
//!
//! - **Models** (`models`): JSON wire types shared by both services
//!
//! - **Config** (`config`): Environment lookup helpers used by both binaries
//!
//! # Usage
//!
//! ```rust,ignore
//! use cepweather::{Cep, Temperature, WeatherReport};
//! use cepweather::ports::{LocationDirectory, WeatherProvider};
//! ```

pub mod config;
pub mod domain;
pub mod models;
pub mod ports;

// Re-export commonly used types
pub use domain::{
    Cep, CepError, DomainError, Temperature, WeatherReport, CEP_LENGTH, INTERNAL_ERROR,
    INVALID_REQUEST, INVALID_ZIPCODE, KELVIN_OFFSET, ZIPCODE_NOT_FOUND,
};
pub use models::{parse_cep_request, CepRequest, ErrorMessage, WeatherReportResponse};
pub use ports::{CepResolver, LocationDirectory, RelayedResponse, WeatherProvider};
