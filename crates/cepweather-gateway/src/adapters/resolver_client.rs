//! HTTP Resolver Client
//!
//! Forwards a validated CEP to `POST {resolver_url}/process` and hands back
//! whatever the Resolver answered.

use async_trait::async_trait;
use reqwest::Client;

use cepweather::{Cep, CepRequest, CepResolver, DomainError, RelayedResponse};

const SERVICE: &str = "Resolver";

/// HTTP implementation of CepResolver
#[derive(Clone)]
pub struct HttpCepResolver {
    client: Client,
    endpoint: String,
}

impl HttpCepResolver {
    pub fn new(client: Client, resolver_url: &str) -> Self {
        Self {
            client,
            endpoint: format!("{}/process", resolver_url.trim_end_matches('/')),
        }
    }
}

#[async_trait]
impl CepResolver for HttpCepResolver {
    #[tracing::instrument(name = "forward_to_resolver", skip(self), fields(cep = %cep))]
    async fn resolve(&self, cep: &Cep) -> Result<RelayedResponse, DomainError> {
        let response = self
            .client
            .post(&self.endpoint)
            .json(&CepRequest::new(cep.as_str()))
            .send()
            .await
            .map_err(|err| DomainError::upstream(SERVICE, err))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .await
            .map_err(|err| DomainError::upstream(SERVICE, err))?;

        tracing::debug!("↩️ Resolver answered {} ({} bytes)", status, body.len());

        Ok(RelayedResponse {
            status,
            body: body.to_vec(),
        })
    }
}
