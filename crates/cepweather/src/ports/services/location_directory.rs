//! Location Directory Port
//!
//! Resolves a postal code to the name of its city.

use async_trait::async_trait;

use crate::domain::{Cep, DomainError};

/// Service interface for postal code lookups
#[async_trait]
pub trait LocationDirectory: Send + Sync {
    /// Name of the city `cep` belongs to.
    ///
    /// Returns `DomainError::CepNotFound` when the directory does not know
    /// the code and `DomainError::Upstream` for any other failure.
    async fn find_city(&self, cep: &Cep) -> Result<String, DomainError>;
}
