//! WeatherReport Entity - current weather for the place a CEP resolves to

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::Temperature;

/// Aggregated result of one lookup. Lives for a single request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReport {
    pub city: String,
    pub temperature: Temperature,
}

impl WeatherReport {
    pub fn new(city: impl Into<String>, celsius: f64) -> Self {
        Self {
            city: city.into(),
            temperature: Temperature::from_celsius(celsius),
        }
    }
}
