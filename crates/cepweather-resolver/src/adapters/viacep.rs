//! ViaCEP Directory
//!
//! `GET {base}/ws/{cep}/json/`. Unknown codes come back as 200 with an
//! `erro` field; the city is in `localidade`.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::Value;

use cepweather::{Cep, DomainError, LocationDirectory};

const SERVICE: &str = "ViaCEP";

/// HTTP implementation of LocationDirectory
#[derive(Clone)]
pub struct ViaCepDirectory {
    client: Client,
    base_url: String,
}

impl ViaCepDirectory {
    pub fn new(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl LocationDirectory for ViaCepDirectory {
    #[tracing::instrument(name = "fetch_location", skip(self), fields(cep = %cep))]
    async fn find_city(&self, cep: &Cep) -> Result<String, DomainError> {
        let url = format!("{}/ws/{}/json/", self.base_url, cep);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|err| DomainError::upstream(SERVICE, err))?;

        let status = response.status();
        // ViaCEP answers 400 for codes it considers malformed
        if status == StatusCode::BAD_REQUEST {
            return Err(DomainError::CepNotFound(cep.to_string()));
        }
        if !status.is_success() {
            return Err(DomainError::upstream(SERVICE, format!("status {status}")));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|err| DomainError::upstream(SERVICE, err))?;

        let city = extract_city(&payload, cep)?;
        tracing::debug!("📮 {} -> {}", cep, city);
        Ok(city)
    }
}

fn extract_city(payload: &Value, cep: &Cep) -> Result<String, DomainError> {
    if payload.get("erro").is_some() {
        return Err(DomainError::CepNotFound(cep.to_string()));
    }

    payload
        .get("localidade")
        .and_then(|v| v.as_str())
        .map(str::trim)
        .filter(|city| !city.is_empty())
        .map(|city| city.to_string())
        .ok_or_else(|| DomainError::upstream(SERVICE, "response has no localidade"))
}
