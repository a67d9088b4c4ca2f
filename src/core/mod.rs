// Core logic exports
pub mod cep;
pub mod temperature;

pub use cep::{is_valid_cep, normalize_cep};
pub use temperature::{celsius_to_fahrenheit, celsius_to_kelvin};
