//! WeatherAPI Provider
//!
//! `GET {base}/v1/current.json?key={key}&q={city}`, reads `current.temp_c`.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;

use cepweather::{DomainError, WeatherProvider};

const SERVICE: &str = "WeatherAPI";

/// HTTP implementation of WeatherProvider
#[derive(Clone)]
pub struct WeatherApiProvider {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl WeatherApiProvider {
    pub fn new(client: Client, base_url: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key,
        }
    }

    fn current_url(&self, api_key: &str, city: &str) -> String {
        format!(
            "{}/v1/current.json?key={}&q={}",
            self.base_url,
            urlencoding::encode(api_key),
            urlencoding::encode(city)
        )
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    #[tracing::instrument(name = "fetch_temperature", skip(self))]
    async fn current_celsius(&self, city: &str) -> Result<f64, DomainError> {
        let api_key = self
            .api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| DomainError::MissingConfig("WEATHERAPI_KEY is not set".to_string()))?;

        // The URL carries the key, so errors are logged without it
        let response = self
            .client
            .get(self.current_url(api_key, city))
            .send()
            .await
            .map_err(|err| DomainError::upstream(SERVICE, err.without_url()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(DomainError::upstream(SERVICE, format!("status {status}")));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| DomainError::upstream(SERVICE, err.without_url()))?;

        let celsius = extract_temp_c(&payload)?;
        tracing::debug!("🌡️ {} -> {}°C", city, celsius);
        Ok(celsius)
    }
}

fn extract_temp_c(payload: &Value) -> Result<f64, DomainError> {
    payload
        .get("current")
        .and_then(|current| current.get("temp_c"))
        .and_then(|temp| temp.as_f64())
        .ok_or_else(|| DomainError::upstream(SERVICE, "response has no current.temp_c"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{closed_port_url, spawn_stub};
    use axum::{extract::Query, http::StatusCode, routing::get, Json, Router};
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Stub that answers 25.0°C for São Paulo with key "test-key"
    async fn weatherapi_stub(hits: Arc<AtomicUsize>) -> String {
        let router = Router::new().route(
            "/v1/current.json",
            get(move |Query(params): Query<HashMap<String, String>>| {
                let hits = hits.clone();
                async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    if params.get("key").map(String::as_str) != Some("test-key") {
                        return (StatusCode::FORBIDDEN, Json(json!({"error": {"code": 2008}})));
                    }
                    match params.get("q").map(String::as_str) {
                        Some("São Paulo") => (
                            StatusCode::OK,
                            Json(json!({
                                "location": {"name": "Sao Paulo"},
                                "current": {"temp_c": 25.0, "temp_f": 77.0}
                            })),
                        ),
                        Some("Nowhere") => (StatusCode::OK, Json(json!({"current": {}}))),
                        _ => (StatusCode::BAD_REQUEST, Json(json!({"error": {"code": 1006}}))),
                    }
                }
            }),
        );
        spawn_stub(router).await
    }

    fn provider(base_url: String, api_key: Option<&str>) -> WeatherApiProvider {
        let client = crate::adapters::build_http_client(Duration::from_secs(5)).unwrap();
        WeatherApiProvider::new(client, base_url, api_key.map(str::to_string))
    }

    #[test]
    fn test_extract_temp_c() {
        assert_eq!(extract_temp_c(&json!({"current": {"temp_c": -3.5}})).unwrap(), -3.5);
        assert_eq!(extract_temp_c(&json!({"current": {"temp_c": 18}})).unwrap(), 18.0);

        for bad in [json!({}), json!({"current": {}}), json!({"current": {"temp_c": "hot"}})] {
            assert!(matches!(extract_temp_c(&bad), Err(DomainError::Upstream(_))));
        }
    }

    #[test]
    fn test_url_encodes_query() {
        let provider = provider("http://weather.test".to_string(), Some("k"));
        assert_eq!(
            provider.current_url("k", "São Paulo"),
            "http://weather.test/v1/current.json?key=k&q=S%C3%A3o%20Paulo"
        );
    }

    #[tokio::test]
    async fn test_current_celsius() {
        let hits = Arc::new(AtomicUsize::new(0));
        let provider = provider(weatherapi_stub(hits.clone()).await, Some("test-key"));

        let celsius = provider.current_celsius("São Paulo").await.unwrap();
        assert_eq!(celsius, 25.0);
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_missing_key_skips_call() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base_url = weatherapi_stub(hits.clone()).await;

        for key in [None, Some(""), Some("  ")] {
            let provider = provider(base_url.clone(), key);
            let err = provider.current_celsius("São Paulo").await.unwrap_err();
            assert!(matches!(err, DomainError::MissingConfig(_)));
        }
        assert_eq!(hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_upstream_failures() {
        let hits = Arc::new(AtomicUsize::new(0));
        let base_url = weatherapi_stub(hits.clone()).await;

        let rejected = provider(base_url.clone(), Some("wrong-key"));
        assert!(matches!(
            rejected.current_celsius("São Paulo").await,
            Err(DomainError::Upstream(_))
        ));

        let valid = provider(base_url, Some("test-key"));
        assert!(matches!(
            valid.current_celsius("Nowhere").await,
            Err(DomainError::Upstream(_))
        ));

        let unreachable = provider(closed_port_url().await, Some("test-key"));
        let err = unreachable.current_celsius("São Paulo").await.unwrap_err();
        assert!(!err.to_string().contains("test-key"));
    }
}
