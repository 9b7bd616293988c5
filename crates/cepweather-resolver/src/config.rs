//! Resolver configuration
//!
//! Read from the process environment once at startup.

use std::net::SocketAddr;
use std::time::Duration;

use cepweather::config::{
    lookup_non_empty, parse_base_url, parse_bind_addr, parse_outbound_timeout, ConfigError,
};

pub const WEATHERAPI_KEY: &str = "WEATHERAPI_KEY";
pub const RESOLVER_BIND_ADDR: &str = "RESOLVER_BIND_ADDR";
pub const VIACEP_BASE_URL: &str = "VIACEP_BASE_URL";
pub const WEATHERAPI_BASE_URL: &str = "WEATHERAPI_BASE_URL";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8081";
const DEFAULT_VIACEP_BASE_URL: &str = "https://viacep.com.br";
const DEFAULT_WEATHERAPI_BASE_URL: &str = "http://api.weatherapi.com";

#[derive(Clone)]
pub struct ResolverConfig {
    pub bind_addr: SocketAddr,
    /// WeatherAPI key. Absent means every weather lookup fails with 500.
    pub weather_api_key: Option<String>,
    pub viacep_base_url: String,
    pub weatherapi_base_url: String,
    pub outbound_timeout: Duration,
}

impl ResolverConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bind_addr: parse_bind_addr(&lookup, RESOLVER_BIND_ADDR, DEFAULT_BIND_ADDR)?,
            weather_api_key: lookup_non_empty(&lookup, WEATHERAPI_KEY),
            viacep_base_url: parse_base_url(&lookup, VIACEP_BASE_URL, DEFAULT_VIACEP_BASE_URL)?,
            weatherapi_base_url: parse_base_url(
                &lookup,
                WEATHERAPI_BASE_URL,
                DEFAULT_WEATHERAPI_BASE_URL,
            )?,
            outbound_timeout: parse_outbound_timeout(&lookup)?,
        })
    }
}

// Keeps the API key out of logs
impl std::fmt::Debug for ResolverConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolverConfig")
            .field("bind_addr", &self.bind_addr)
            .field(
                "weather_api_key",
                &self.weather_api_key.as_ref().map(|_| "<redacted>"),
            )
            .field("viacep_base_url", &self.viacep_base_url)
            .field("weatherapi_base_url", &self.weatherapi_base_url)
            .field("outbound_timeout", &self.outbound_timeout)
            .finish()
    }
}
