//! Weather Application Service (Use Case)
//!
//! CEP -> city (directory) -> Celsius (weather) -> WeatherReport.
//! Strictly sequential, no retries: the first failure ends the request.

use std::sync::Arc;

use cepweather::{Cep, DomainError, LocationDirectory, WeatherProvider, WeatherReport};

/// Application service for weather lookups
pub struct WeatherService {
    directory: Arc<dyn LocationDirectory>,
    weather: Arc<dyn WeatherProvider>,
}

impl WeatherService {
    pub fn new(directory: Arc<dyn LocationDirectory>, weather: Arc<dyn WeatherProvider>) -> Self {
        Self { directory, weather }
    }

    /// Current weather for the city `cep` belongs to
    #[tracing::instrument(skip(self), fields(cep = %cep))]
    pub async fn report_for(&self, cep: &Cep) -> Result<WeatherReport, DomainError> {
        let city = self.directory.find_city(cep).await?;
        let celsius = self.weather.current_celsius(&city).await?;

        let report = WeatherReport::new(city, celsius);

        tracing::info!(
            "☀️ {} -> {} ({}°C / {}°F / {}K)",
            cep,
            report.city,
            report.temperature.celsius,
            report.temperature.fahrenheit,
            report.temperature.kelvin
        );

        Ok(report)
    }
}
