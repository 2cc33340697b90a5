//! Location Resolution Module
//!
//! Resolves a free-text city name into a structured [`Location`] via the
//! upstream geocoding lookup. Only one match is requested and considered;
//! there is no disambiguation between candidates.

use tracing::debug;

use crate::models::Location;
use crate::openweather::WeatherApi;
use crate::{Result, SkycastError};

/// Service for resolving city names into locations
pub struct LocationResolver;

impl LocationResolver {
    /// Resolve a city name into a [`Location`].
    ///
    /// The caller guarantees `city` is non-empty after trimming.
    ///
    /// # Errors
    /// `NotFound` when geocoding returns zero matches; upstream failures
    /// propagate unchanged.
    pub async fn resolve(client: &dyn WeatherApi, city: &str) -> Result<Location> {
        debug!("Geocoding city name: {city}");

        let entries = client.geocode(city).await?;
        let Some(entry) = entries.into_iter().next() else {
            return Err(SkycastError::not_found(city));
        };

        let location = Location::new(entry.name, entry.country, entry.lat, entry.lon);
        debug!(
            "Resolved {city} to {}, {} at ({})",
            location.city,
            location.country,
            location.format_coordinates()
        );
        Ok(location)
    }
}
