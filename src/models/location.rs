//! Location model for geographic coordinates and metadata

use serde::{Deserialize, Serialize};

/// A resolved city location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    /// City name as returned by geocoding
    pub city: String,
    /// Country code (ISO 3166-1 alpha-2)
    pub country: String,
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Location {
    /// Create a new location
    #[must_use]
    pub fn new(city: String, country: String, latitude: f64, longitude: f64) -> Self {
        Self {
            city,
            country,
            latitude,
            longitude,
        }
    }

    /// Format location as coordinates string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}
