//! Service Ports
//!
//! Abstract interfaces for external services.

mod cep_resolver;
mod location_directory;
mod weather_provider;

pub use cep_resolver::*;
pub use location_directory::*;
pub use weather_provider::*;
