use std::time::Duration;

use crate::error::{Error, Result};

/// Environment variable holding the OpenWeatherMap API key.
pub const API_KEY_ENV: &str = "OPENWEATHER_API_KEY";

const GEOCODING_URL: &str = "http://api.openweathermap.org/geo/1.0/direct";
const WEATHER_URL: &str = "https://api.openweathermap.org/data/2.5/weather";
const FORECAST_URL: &str = "https://api.openweathermap.org/data/2.5/forecast";
const ONE_CALL_URL: &str = "https://api.openweathermap.org/data/3.0/onecall";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Explicit configuration handed to [`crate::WeatherService`] at construction.
///
/// Validation happens here, at the boundary: an invocation with no usable API
/// key fails before any request is issued.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub geocoding_url: String,
    pub weather_url: String,
    pub forecast_url: String,
    pub one_call_url: String,
    /// Per-request timeout; expiry is treated as a transport failure.
    pub timeout: Duration,
}

impl Config {
    /// Build a config with the production endpoints.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(Error::Configuration("API key must not be empty".into()));
        }

        Ok(Self {
            api_key,
            geocoding_url: GEOCODING_URL.to_string(),
            weather_url: WEATHER_URL.to_string(),
            forecast_url: FORECAST_URL.to_string(),
            one_call_url: ONE_CALL_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        })
    }

    /// Read the API key from `OPENWEATHER_API_KEY`.
    pub fn from_env() -> Result<Self> {
        match std::env::var(API_KEY_ENV) {
            Ok(key) if !key.trim().is_empty() => Self::new(key),
            _ => Err(Error::Configuration(format!(
                "{API_KEY_ENV} environment variable is not set"
            ))),
        }
    }

    /// Re-root every endpoint under `base`, keeping the provider's paths.
    /// Used to point the service at a local server in tests.
    #[must_use]
    pub fn with_base_url(mut self, base: &str) -> Self {
        let base = base.trim_end_matches('/');
        self.geocoding_url = format!("{base}/geo/1.0/direct");
        self.weather_url = format!("{base}/data/2.5/weather");
        self.forecast_url = format!("{base}/data/2.5/forecast");
        self.one_call_url = format!("{base}/data/3.0/onecall");
        self
    }
}
