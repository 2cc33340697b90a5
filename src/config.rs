//! Configuration for the Skycast service
//!
//! All configuration comes from environment variables, read once at
//! startup into an explicit value that is injected into the upstream
//! client. Nothing reads the environment after startup.

use std::env;
use std::time::Duration;

use crate::{Result, SkycastError};

/// Default port the HTTP server binds to
const DEFAULT_PORT: u16 = 3000;

/// Default per-request timeout for outbound upstream calls
const DEFAULT_TIMEOUT_SECS: u64 = 10;

const DEFAULT_API_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_GEO_BASE_URL: &str = "https://api.openweathermap.org/geo/1.0";

/// Runtime configuration, fully resolved at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// OpenWeatherMap API key
    pub api_key: String,
    /// Port the HTTP server listens on
    pub port: u16,
    /// Bound applied to every outbound upstream request
    pub request_timeout: Duration,
    /// Base URL for the weather/forecast endpoints
    pub api_base_url: String,
    /// Base URL for the geocoding endpoint
    pub geo_base_url: String,
}

impl AppConfig {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    /// Returns a configuration error when the API key is missing or a
    /// numeric variable does not parse.
    pub fn from_env() -> Result<Self> {
        Self::build(
            env::var("OPENWEATHER_API_KEY").ok(),
            env::var("PORT").ok(),
            env::var("OPENWEATHER_TIMEOUT_SECS").ok(),
            env::var("OPENWEATHER_API_URL").ok(),
            env::var("OPENWEATHER_GEO_URL").ok(),
        )
    }

    fn build(
        api_key: Option<String>,
        port: Option<String>,
        timeout_secs: Option<String>,
        api_base_url: Option<String>,
        geo_base_url: Option<String>,
    ) -> Result<Self> {
        let api_key = api_key
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| SkycastError::config("OPENWEATHER_API_KEY is not set"))?;

        let port = match port {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| SkycastError::config(format!("PORT is not a valid port: '{raw}'")))?,
            None => DEFAULT_PORT,
        };

        let timeout_secs = match timeout_secs {
            Some(raw) => raw.parse::<u64>().map_err(|_| {
                SkycastError::config(format!("OPENWEATHER_TIMEOUT_SECS is not a number: '{raw}'"))
            })?,
            None => DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_key,
            port,
            request_timeout: Duration::from_secs(timeout_secs),
            api_base_url: api_base_url.unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            geo_base_url: geo_base_url.unwrap_or_else(|| DEFAULT_GEO_BASE_URL.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key() -> Option<String> {
        Some("test-key".to_string())
    }

    #[test]
    fn test_defaults_apply() {
        let config = AppConfig::build(key(), None, None, None, None).unwrap();
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.request_timeout, Duration::from_secs(10));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.geo_base_url, DEFAULT_GEO_BASE_URL);
    }

    #[test]
    fn test_missing_api_key_is_a_config_error() {
        let err = AppConfig::build(None, None, None, None, None).unwrap_err();
        assert!(matches!(err, SkycastError::Config { .. }));

        let err = AppConfig::build(Some("  ".to_string()), None, None, None, None).unwrap_err();
        assert!(matches!(err, SkycastError::Config { .. }));
    }

    #[test]
    fn test_overrides_apply() {
        let config = AppConfig::build(
            key(),
            Some("8080".to_string()),
            Some("3".to_string()),
            Some("http://localhost:9100/data/2.5".to_string()),
            Some("http://localhost:9100/geo/1.0".to_string()),
        )
        .unwrap();
        assert_eq!(config.port, 8080);
        assert_eq!(config.request_timeout, Duration::from_secs(3));
        assert!(config.api_base_url.starts_with("http://localhost:9100"));
    }

    #[test]
    fn test_bad_port_is_rejected() {
        let err =
            AppConfig::build(key(), Some("not-a-port".to_string()), None, None, None).unwrap_err();
        assert!(matches!(err, SkycastError::Config { .. }));
    }
}
