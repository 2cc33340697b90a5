//! Merged weather report returned to the service boundary

use serde::{Deserialize, Serialize};

use super::{Location, WeatherSnapshot};

/// The final merged payload: where, what now, and what is coming.
///
/// `forecast` holds at most three entries, one per distinct future UTC
/// calendar day, in chronological order. Today is covered by `current`
/// and never appears in `forecast`.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct WeatherReport {
    pub location: Location,
    pub current: WeatherSnapshot,
    pub forecast: Vec<WeatherSnapshot>,
}
