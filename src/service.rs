//! Orchestration entry point
//!
//! [`WeatherService`] is the one externally invokable operation of the
//! core: validate the city name, resolve it to coordinates, aggregate
//! current conditions and forecast, return the merged report. Fully
//! stateless; every call is independent.

use std::sync::Arc;

use tracing::{info, instrument};

use crate::aggregator::Aggregator;
use crate::clock::Clock;
use crate::location_resolver::LocationResolver;
use crate::models::WeatherReport;
use crate::openweather::WeatherApi;
use crate::{Result, SkycastError};

/// Weather lookup service combining the resolver and the aggregator
pub struct WeatherService {
    client: Arc<dyn WeatherApi>,
    clock: Arc<dyn Clock>,
}

impl WeatherService {
    /// Create a new service around an upstream client and a time source
    pub fn new(client: Arc<dyn WeatherApi>, clock: Arc<dyn Clock>) -> Self {
        Self { client, clock }
    }

    /// Produce a full weather report for a free-text city name.
    ///
    /// # Errors
    /// `InvalidInput` for a blank name (no network call is made),
    /// `NotFound` when geocoding has no match (the aggregator is never
    /// called), upstream failures otherwise.
    #[instrument(skip(self))]
    pub async fn weather_for_city(&self, city: &str) -> Result<WeatherReport> {
        let city = city.trim();
        if city.is_empty() {
            return Err(SkycastError::invalid_input("city name must not be empty"));
        }

        let location = LocationResolver::resolve(self.client.as_ref(), city).await?;
        let report =
            Aggregator::aggregate(self.client.as_ref(), self.clock.as_ref(), location).await?;

        info!(
            "Served weather for {}, {} with {} forecast day(s)",
            report.location.city,
            report.location.country,
            report.forecast.len()
        );
        Ok(report)
    }
}
