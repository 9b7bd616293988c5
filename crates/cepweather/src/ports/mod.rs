//! Ports (Interfaces)
//!
//! Abstract interfaces for the outbound calls the services make.
//!
//! HTTP implementations of these traits live in the service crates.

pub mod services;

// Re-exports
pub use services::*;
