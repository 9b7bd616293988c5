//! Weather Provider Port

use async_trait::async_trait;

use crate::domain::DomainError;

/// Service interface for current weather lookups
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current temperature in Celsius for a named place
    async fn current_celsius(&self, city: &str) -> Result<f64, DomainError>;
}
