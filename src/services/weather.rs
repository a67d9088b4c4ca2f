use crate::models::TemperatureReading;
use crate::services::viacep::UPSTREAM_TIMEOUT;
use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when fetching current weather
#[derive(Debug, Error)]
pub enum WeatherApiError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("WeatherAPI returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Capability to fetch the current temperature for a city
#[async_trait]
pub trait WeatherLookup: Send + Sync {
    async fn current_temperature(&self, city: &str) -> Result<TemperatureReading, WeatherApiError>;
}

/// WeatherAPI.com client
pub struct WeatherApiClient {
    base_url: String,
    api_key: String,
    client: Client,
}

#[derive(Debug, Deserialize)]
struct WeatherApiPayload {
    current: CurrentConditions,
}

#[derive(Debug, Deserialize)]
struct CurrentConditions {
    temp_c: f64,
}

impl WeatherApiClient {
    /// Create a client against the given WeatherAPI endpoint
    pub fn new(base_url: String, api_key: String) -> Self {
        let client = Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .build()
            .expect("Failed to create HTTP client");

        Self { base_url, api_key, client }
    }
}

#[async_trait]
impl WeatherLookup for WeatherApiClient {
    async fn current_temperature(&self, city: &str) -> Result<TemperatureReading, WeatherApiError> {
        // City names carry accents ("São Paulo"); encode before building the query
        let encoded_city = urlencoding::encode(city);
        let url = format!(
            "{}/current.json?key={}&q={}",
            self.base_url.trim_end_matches('/'),
            self.api_key,
            encoded_city
        );

        tracing::debug!("Fetching current weather for {}", city);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(WeatherApiError::Status(response.status()));
        }

        let payload: WeatherApiPayload = response.json().await?;

        Ok(TemperatureReading { celsius: payload.current.temp_c })
    }
}
