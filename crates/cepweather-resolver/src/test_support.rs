//! In-process stub servers and mock ports for tests

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;

use cepweather::{Cep, DomainError, LocationDirectory, WeatherProvider};

/// Serve `router` on an ephemeral local port and return its base URL.
pub async fn spawn_stub(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a local port nothing listens on.
pub async fn closed_port_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

/// Directory backed by a fixed map; unknown codes are not found
pub struct MockDirectory {
    pub cities: HashMap<String, String>,
    pub fail: bool,
}

impl MockDirectory {
    pub fn with(entries: &[(&str, &str)]) -> Self {
        Self {
            cities: entries
                .iter()
                .map(|(cep, city)| (cep.to_string(), city.to_string()))
                .collect(),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        Self {
            cities: HashMap::new(),
            fail: true,
        }
    }
}

#[async_trait]
impl LocationDirectory for MockDirectory {
    async fn find_city(&self, cep: &Cep) -> Result<String, DomainError> {
        if self.fail {
            return Err(DomainError::upstream("MockDirectory", "connection refused"));
        }
        self.cities
            .get(cep.as_str())
            .cloned()
            .ok_or_else(|| DomainError::CepNotFound(cep.to_string()))
    }
}

/// Weather source with one fixed reading that counts its calls
pub struct MockWeather {
    pub celsius: Option<f64>,
    pub calls: AtomicUsize,
}

impl MockWeather {
    pub fn reading(celsius: f64) -> Self {
        Self {
            celsius: Some(celsius),
            calls: AtomicUsize::new(0),
        }
    }

    /// Behaves like a provider with no API key configured
    pub fn unconfigured() -> Self {
        Self {
            celsius: None,
            calls: AtomicUsize::new(0),
        }
    }
}

#[async_trait]
impl WeatherProvider for MockWeather {
    async fn current_celsius(&self, _city: &str) -> Result<f64, DomainError> {
        let celsius = self
            .celsius
            .ok_or_else(|| DomainError::MissingConfig("WEATHERAPI_KEY is not set".into()))?;
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(celsius)
    }
}
