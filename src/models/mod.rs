//! Data models for the Skycast service
//!
//! This module contains the core domain models organized by concern:
//! - Location: Geographic coordinates and city metadata
//! - Weather: A single metric-unit observation (current or forecast)
//! - Report: The merged location + current + forecast payload

pub mod location;
pub mod report;
pub mod weather;

// Re-export all public types for convenient access
pub use location::Location;
pub use report::WeatherReport;
pub use weather::WeatherSnapshot;
