// Service exports
pub mod viacep;
pub mod weather;

pub use viacep::{CepLookup, ViaCepClient, ViaCepError};
pub use weather::{WeatherApiClient, WeatherApiError, WeatherLookup};
