//! Configuration helpers
//!
//! Both services read their settings from the process environment (after
//! an optional `.env` is loaded). Each lookup goes through a closure so tests
//! can feed values without touching the real environment.

use std::net::SocketAddr;
use std::time::Duration;

use thiserror::Error;

/// Default bound on every outbound HTTP call
pub const DEFAULT_OUTBOUND_TIMEOUT_SECS: u64 = 10;
/// Largest accepted outbound timeout
pub const MAX_OUTBOUND_TIMEOUT_SECS: u64 = 300;

/// Environment key for the outbound timeout, shared by both services
pub const OUTBOUND_TIMEOUT_SECS: &str = "OUTBOUND_TIMEOUT_SECS";

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}

impl ConfigError {
    pub fn invalid(key: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            key,
            message: message.into(),
        }
    }
}

/// Value of `key`, with blank values treated as unset.
pub fn lookup_non_empty<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub fn parse_bind_addr<F>(lookup: &F, key: &'static str, default: &str) -> Result<SocketAddr, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup_non_empty(lookup, key).unwrap_or_else(|| default.to_string());
    raw.parse::<SocketAddr>()
        .map_err(|e| ConfigError::invalid(key, format!("'{raw}' is not a socket address ({e})")))
}

/// Parse an `http(s)://` base URL, dropping any trailing `/`.
pub fn parse_base_url<F>(lookup: &F, key: &'static str, default: &str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup_non_empty(lookup, key).unwrap_or_else(|| default.to_string());
    if !raw.starts_with("http://") && !raw.starts_with("https://") {
        return Err(ConfigError::invalid(
            key,
            format!("'{raw}' must be an http:// or https:// URL"),
        ));
    }
    Ok(raw.trim_end_matches('/').to_string())
}

/// Parse the per-call outbound timeout, in whole seconds.
pub fn parse_outbound_timeout<F>(lookup: &F) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let Some(raw) = lookup_non_empty(lookup, OUTBOUND_TIMEOUT_SECS) else {
        tracing::debug!(
            "{} not set, using {}s",
            OUTBOUND_TIMEOUT_SECS,
            DEFAULT_OUTBOUND_TIMEOUT_SECS
        );
        return Ok(Duration::from_secs(DEFAULT_OUTBOUND_TIMEOUT_SECS));
    };

    let secs: u64 = raw.parse().map_err(|_| {
        ConfigError::invalid(OUTBOUND_TIMEOUT_SECS, format!("'{raw}' is not a whole number"))
    })?;

    if !(1..=MAX_OUTBOUND_TIMEOUT_SECS).contains(&secs) {
        return Err(ConfigError::invalid(
            OUTBOUND_TIMEOUT_SECS,
            format!("must be between 1 and {MAX_OUTBOUND_TIMEOUT_SECS} seconds"),
        ));
    }

    Ok(Duration::from_secs(secs))
}
