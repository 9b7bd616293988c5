//! Value Objects
//!
//! Immutable objects defined by their attributes rather than identity.

mod cep;
mod temperature;

pub use cep::*;
pub use temperature::*;
