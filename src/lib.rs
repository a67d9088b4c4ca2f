//! cep-weather - Weather lookup service keyed by Brazilian postal code (CEP)
//!
//! Resolves a CEP to a city through ViaCEP, then fetches the city's current
//! temperature from WeatherAPI and reports it in Celsius, Fahrenheit, and
//! Kelvin. The two upstream calls run strictly in sequence per request.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{celsius_to_fahrenheit, celsius_to_kelvin, is_valid_cep, normalize_cep};
pub use self::models::{ErrorResponse, Location, TemperatureReading, WeatherResponse};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        assert!(is_valid_cep(&normalize_cep("01310-100")));
        assert_eq!(celsius_to_kelvin(0.0), 273.0);
    }
}
