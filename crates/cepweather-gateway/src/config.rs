//! Gateway configuration

use std::net::SocketAddr;
use std::time::Duration;

use cepweather::config::{parse_base_url, parse_bind_addr, parse_outbound_timeout, ConfigError};

pub const GATEWAY_BIND_ADDR: &str = "GATEWAY_BIND_ADDR";
pub const RESOLVER_URL: &str = "RESOLVER_URL";

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_RESOLVER_URL: &str = "http://service-b:8081";

#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    /// Base URL of the Resolver Service; `/process` is appended
    pub resolver_url: String,
    pub outbound_timeout: Duration,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            bind_addr: parse_bind_addr(&lookup, GATEWAY_BIND_ADDR, DEFAULT_BIND_ADDR)?,
            resolver_url: parse_base_url(&lookup, RESOLVER_URL, DEFAULT_RESOLVER_URL)?,
            outbound_timeout: parse_outbound_timeout(&lookup)?,
        })
    }
}
