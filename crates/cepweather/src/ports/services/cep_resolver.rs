//! CEP Resolver Port
//!
//! The Gateway's view of the Resolver Service: send a validated CEP, get the
//! raw answer back so it can be relayed untouched.

use async_trait::async_trait;

use crate::domain::{Cep, DomainError};

/// Status and body exactly as the Resolver sent them
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayedResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

/// Service interface for forwarding a lookup
#[async_trait]
pub trait CepResolver: Send + Sync {
    /// Forward `cep`. Any HTTP answer is `Ok`; only transport failures are `Err`.
    async fn resolve(&self, cep: &Cep) -> Result<RelayedResponse, DomainError>;
}
