//! Temperature - one reading in three units

use serde::{Deserialize, Serialize};

/// Offset added to Celsius to get Kelvin.
///
/// Kept at 273 (not 273.15) so responses stay identical to the deployed
/// service. Known deviation from the physical constant.
pub const KELVIN_OFFSET: f64 = 273.0;

/// Temperature expressed in Celsius, Fahrenheit and Kelvin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Temperature {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

impl Temperature {
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            celsius,
            fahrenheit: celsius * 1.8 + 32.0,
            kelvin: celsius + KELVIN_OFFSET,
        }
    }
}
