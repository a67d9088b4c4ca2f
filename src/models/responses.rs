use serde::{Deserialize, Serialize};

use crate::core::{celsius_to_fahrenheit, celsius_to_kelvin};

/// Success body for GET /weather/{cep}
///
/// Field names are part of the public contract: `temp_C`, `temp_F`, `temp_K`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WeatherResponse {
    #[serde(rename = "temp_C")]
    pub temp_c: f64,
    #[serde(rename = "temp_F")]
    pub temp_f: f64,
    #[serde(rename = "temp_K")]
    pub temp_k: f64,
}

impl WeatherResponse {
    /// Derive all three scales from a Celsius reading
    pub fn from_celsius(celsius: f64) -> Self {
        Self {
            temp_c: celsius,
            temp_f: celsius_to_fahrenheit(celsius),
            temp_k: celsius_to_kelvin(celsius),
        }
    }
}

/// Error body, a single human-readable message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

impl ErrorResponse {
    pub fn new(message: &str) -> Self {
        Self { message: message.to_string() }
    }
}
