//! OpenWeatherMap API client
//!
//! The upstream is reached through the [`WeatherApi`] trait so the
//! resolver and aggregator stay decoupled from the transport and can be
//! exercised against a fake in tests. [`OpenWeatherClient`] is the real
//! implementation: one GET per operation, bounded timeout, no retries.

use async_trait::async_trait;
use chrono::DateTime;
use reqwest::{Client, Response};
use serde::Deserialize;
use tracing::{debug, instrument, warn};

use crate::config::AppConfig;
use crate::models::WeatherSnapshot;
use crate::{Result, SkycastError};

/// Upstream weather provider operations
#[async_trait]
pub trait WeatherApi: Send + Sync {
    /// Look up a city name, requesting at most one match
    async fn geocode(&self, city: &str) -> Result<Vec<GeocodingEntry>>;

    /// Fetch current conditions for coordinates, in metric units
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherPayload>;

    /// Fetch the 5-day / 3-hour forecast feed for coordinates, in metric units
    async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastResponse>;
}

/// One entry of the geocoding response array
#[derive(Debug, Clone, Deserialize)]
pub struct GeocodingEntry {
    pub name: String,
    pub country: String,
    pub lat: f64,
    pub lon: f64,
}

/// One entry of the `weather[]` condition array
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConditionEntry {
    pub main: String,
    pub description: String,
    pub icon: String,
}

/// The `main` measurement block
#[derive(Debug, Clone, Deserialize)]
pub struct MainReadings {
    pub temp: f32,
    pub humidity: u8,
}

/// The `wind` measurement block
#[derive(Debug, Clone, Deserialize)]
pub struct WindReading {
    pub speed: f32,
}

/// The current-weather response body; also the shape of each forecast sample
#[derive(Debug, Clone, Deserialize)]
pub struct WeatherPayload {
    /// Observation time, Unix seconds (UTC)
    pub dt: i64,
    #[serde(default)]
    pub weather: Vec<ConditionEntry>,
    pub main: MainReadings,
    pub wind: WindReading,
}

/// The forecast response body.
///
/// `list` defaults to empty so a body without the expected structure
/// degrades to "no forecast" instead of failing the whole request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ForecastResponse {
    #[serde(default)]
    pub list: Vec<WeatherPayload>,
}

impl From<WeatherPayload> for WeatherSnapshot {
    fn from(payload: WeatherPayload) -> Self {
        // The condition array carries at most a handful of entries; the
        // first one is the primary condition.
        let condition = payload.weather.into_iter().next().unwrap_or_default();
        Self {
            observed_at: DateTime::from_timestamp(payload.dt, 0).unwrap_or_default(),
            temperature_c: payload.main.temp,
            humidity_pct: payload.main.humidity,
            wind_speed_mps: payload.wind.speed,
            condition_code: condition.main,
            condition_description: condition.description,
            icon_id: condition.icon,
        }
    }
}

/// Weather API client for OpenWeatherMap
pub struct OpenWeatherClient {
    /// HTTP client with a bounded per-request timeout
    client: Client,
    api_key: String,
    api_base_url: String,
    geo_base_url: String,
}

impl OpenWeatherClient {
    /// Create a new client from the resolved configuration
    ///
    /// # Errors
    /// Returns a configuration error when the HTTP client cannot be built.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .user_agent(concat!("skycast/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| SkycastError::config(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            api_base_url: config.api_base_url.clone(),
            geo_base_url: config.geo_base_url.clone(),
        })
    }

    /// Send a GET and check the status. The URL carries the API key, so
    /// only the endpoint name is ever logged.
    async fn fetch(&self, endpoint: &str, url: String) -> Result<Response> {
        debug!("Requesting {endpoint} endpoint");
        let response = self.client.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SkycastError::upstream(format!(
                "{endpoint} request failed with status {status}"
            )));
        }
        Ok(response)
    }
}

#[async_trait]
impl WeatherApi for OpenWeatherClient {
    #[instrument(skip(self), fields(city = city))]
    async fn geocode(&self, city: &str) -> Result<Vec<GeocodingEntry>> {
        let url = format!(
            "{}/direct?q={}&limit=1&appid={}",
            self.geo_base_url,
            urlencoding::encode(city),
            self.api_key
        );

        let response = self.fetch("geocoding", url).await?;
        let entries: Vec<GeocodingEntry> = response
            .json()
            .await
            .map_err(|e| SkycastError::upstream(format!("Invalid geocoding response: {e}")))?;

        debug!("Geocoding returned {} match(es)", entries.len());
        Ok(entries)
    }

    #[instrument(skip(self), fields(lat, lon))]
    async fn current_weather(&self, lat: f64, lon: f64) -> Result<WeatherPayload> {
        let url = format!(
            "{}/weather?lat={lat}&lon={lon}&appid={}&units=metric",
            self.api_base_url, self.api_key
        );

        let response = self.fetch("current-weather", url).await?;
        response
            .json()
            .await
            .map_err(|e| SkycastError::upstream(format!("Invalid current-weather response: {e}")))
    }

    #[instrument(skip(self), fields(lat, lon))]
    async fn forecast(&self, lat: f64, lon: f64) -> Result<ForecastResponse> {
        let url = format!(
            "{}/forecast?lat={lat}&lon={lon}&appid={}&units=metric",
            self.api_base_url, self.api_key
        );

        let response = self.fetch("forecast", url).await?;
        let body = response.text().await?;

        // A feed without the expected structure degrades to an empty
        // sample list; only transport and status failures are errors.
        match serde_json::from_str::<ForecastResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(e) => {
                warn!("Unusable forecast body, treating as empty feed: {e}");
                Ok(ForecastResponse::default())
            }
        }
    }
}
