//! Infrastructure Adapters
//!
//! HTTP implementations of the domain ports.

mod viacep;
mod weatherapi;

pub use viacep::ViaCepDirectory;
pub use weatherapi::WeatherApiProvider;

use std::time::Duration;

use reqwest::Client;

/// Shared client for every outbound call; `timeout` bounds each request.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("cepweather-resolver/", env!("CARGO_PKG_VERSION")))
        .build()
}
