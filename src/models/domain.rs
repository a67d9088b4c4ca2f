use serde::{Deserialize, Serialize};

/// A location resolved from a CEP
///
/// Only `city` feeds the weather lookup; `state` is carried for logging.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    /// Two-letter state abbreviation (UF)
    pub state: String,
}

/// Current temperature as reported by the weather provider, in Celsius
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct TemperatureReading {
    pub celsius: f64,
}
