// Model exports
pub mod domain;
pub mod responses;

pub use domain::{Location, TemperatureReading};
pub use responses::{ErrorResponse, WeatherResponse};
