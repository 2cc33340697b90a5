//! Skycast - weather aggregation service
//!
//! This library resolves a city name to coordinates, fetches current
//! conditions and a multi-day forecast feed from OpenWeatherMap, reduces
//! the feed to one entry per of the next three calendar days, and merges
//! everything into a single report.

pub mod aggregator;
pub mod api;
pub mod clock;
pub mod config;
pub mod error;
pub mod location_resolver;
pub mod models;
pub mod openweather;
pub mod service;
pub mod web;

// Re-export core types for public API
pub use aggregator::{Aggregator, FORECAST_DAYS, reduce_to_daily};
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::AppConfig;
pub use error::SkycastError;
pub use location_resolver::LocationResolver;
pub use models::{Location, WeatherReport, WeatherSnapshot};
pub use openweather::{OpenWeatherClient, WeatherApi};
pub use service::WeatherService;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, SkycastError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_is_set() {
        assert!(!VERSION.is_empty());
    }
}
