use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::env;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    pub viacep: ViaCepSettings,
    pub weather: WeatherSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ViaCepSettings {
    pub base_url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WeatherSettings {
    pub base_url: String,
    pub api_key: String,
}

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Built-in defaults
    /// 2. Configuration file (config/default.toml, config/local.toml)
    /// 3. Environment variables (prefixed with CEP_WEATHER__)
    /// 4. Plain environment variables the deployment sets: PORT, WEATHER_API_KEY
    ///
    /// There is deliberately no default weather API key; startup fails
    /// when WEATHER_API_KEY is not configured.
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .set_default("viacep.base_url", "https://viacep.com.br/ws")?
            .set_default("weather.base_url", "https://api.weatherapi.com/v1")?
            .set_default("weather.api_key", "")?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            .add_source(
                Environment::with_prefix("CEP_WEATHER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            );

        if let Ok(port) = env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }
        if let Ok(api_key) = env::var("WEATHER_API_KEY") {
            builder = builder.set_override("weather.api_key", api_key)?;
        }

        let settings: Settings = builder.build()?.try_deserialize()?;

        if settings.weather.api_key.trim().is_empty() {
            return Err(ConfigError::Message(
                "WEATHER_API_KEY environment variable is required".to_string(),
            ));
        }

        Ok(settings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_settings_deserialize_with_all_sections() {
        let settings: Settings = Config::builder()
            .set_default("server.host", "0.0.0.0")
            .unwrap()
            .set_default("server.port", 8080)
            .unwrap()
            .set_default("viacep.base_url", "https://viacep.com.br/ws")
            .unwrap()
            .set_default("weather.base_url", "https://api.weatherapi.com/v1")
            .unwrap()
            .set_default("weather.api_key", "test-key")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "0.0.0.0");
        assert!(settings.server.workers.is_none());
        assert_eq!(settings.weather.api_key, "test-key");
    }
}
