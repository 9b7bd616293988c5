//! Application Layer (Use Cases)
//!
//! Orchestrates the directory and weather lookups.

mod weather_service;

pub use weather_service::WeatherService;
