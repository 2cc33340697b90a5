//! Weather observation model shared by current conditions and forecast days

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single weather observation in metric units.
///
/// The same shape describes the current conditions and each reduced
/// forecast day; only `observed_at` distinguishes them.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherSnapshot {
    /// Timestamp of the observation or forecast sample (UTC)
    pub observed_at: DateTime<Utc>,
    /// Temperature in Celsius
    pub temperature_c: f32,
    /// Relative humidity in percent
    pub humidity_pct: u8,
    /// Wind speed in m/s
    pub wind_speed_mps: f32,
    /// Short condition group, e.g. "Clouds" or "Rain"
    pub condition_code: String,
    /// Human-readable condition text, e.g. "scattered clouds"
    pub condition_description: String,
    /// Provider icon identifier, e.g. "03d"
    pub icon_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_serializes_with_contract_field_names() {
        let snapshot = WeatherSnapshot {
            observed_at: Utc.timestamp_opt(1_700_000_000, 0).unwrap(),
            temperature_c: 21.5,
            humidity_pct: 64,
            wind_speed_mps: 3.2,
            condition_code: "Clouds".to_string(),
            condition_description: "scattered clouds".to_string(),
            icon_id: "03d".to_string(),
        };

        let json = serde_json::to_value(&snapshot).unwrap();
        assert_eq!(json["temperature_c"], 21.5);
        assert_eq!(json["humidity_pct"], 64);
        assert_eq!(json["condition_code"], "Clouds");
        assert_eq!(json["icon_id"], "03d");
    }
}
