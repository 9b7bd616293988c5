//! Infrastructure Adapters

mod resolver_client;

pub use resolver_client::HttpCepResolver;

use std::time::Duration;

use reqwest::Client;

/// Client used to reach the Resolver; `timeout` bounds each request.
pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
    Client::builder()
        .timeout(timeout)
        .user_agent(concat!("cepweather-gateway/", env!("CARGO_PKG_VERSION")))
        .build()
}
