//! Weather aggregation and forecast reduction
//!
//! The aggregator fetches current conditions and the raw forecast feed
//! for resolved coordinates, collapses the feed to one entry per future
//! calendar day, and merges everything into a [`WeatherReport`].

use std::collections::HashSet;

use chrono::NaiveDate;
use tracing::{debug, instrument};

use crate::Result;
use crate::clock::Clock;
use crate::models::{Location, WeatherReport, WeatherSnapshot};
use crate::openweather::WeatherApi;

/// Number of future days the reduced forecast covers
pub const FORECAST_DAYS: usize = 3;

/// Service combining current conditions and forecast for a location
pub struct Aggregator;

impl Aggregator {
    /// Fetch current conditions and forecast for `location` and merge
    /// them into a report.
    ///
    /// The two upstream calls are independent and issued concurrently.
    /// If either fails the whole aggregation fails; no partial report is
    /// ever returned.
    ///
    /// # Errors
    /// Upstream failures from either fetch propagate unchanged.
    #[instrument(skip(client, clock, location), fields(city = %location.city))]
    pub async fn aggregate(
        client: &dyn WeatherApi,
        clock: &dyn Clock,
        location: Location,
    ) -> Result<WeatherReport> {
        let (current, forecast) = futures::try_join!(
            client.current_weather(location.latitude, location.longitude),
            client.forecast(location.latitude, location.longitude),
        )?;

        let samples: Vec<WeatherSnapshot> =
            forecast.list.into_iter().map(WeatherSnapshot::from).collect();
        let forecast = reduce_to_daily(samples, clock.today());
        debug!("Reduced forecast to {} day(s)", forecast.len());

        Ok(WeatherReport {
            location,
            current: current.into(),
            forecast,
        })
    }
}

/// Collapse a chronological forecast feed into at most [`FORECAST_DAYS`]
/// entries, one per distinct future UTC calendar day.
///
/// Single forward pass. The first sample of each new day wins; samples
/// dated `today` are skipped because current conditions already cover
/// today. Returns fewer entries when the feed spans fewer future days,
/// and an empty sequence for an empty feed.
#[must_use]
pub fn reduce_to_daily(samples: Vec<WeatherSnapshot>, today: NaiveDate) -> Vec<WeatherSnapshot> {
    let mut emitted_dates: HashSet<NaiveDate> = HashSet::new();
    let mut daily = Vec::with_capacity(FORECAST_DAYS);

    for sample in samples {
        let date = sample.observed_at.date_naive();

        if date == today {
            continue;
        }
        if !emitted_dates.insert(date) {
            continue;
        }

        daily.push(sample);
        if daily.len() >= FORECAST_DAYS {
            break;
        }
    }

    daily
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use rstest::rstest;

    fn sample_at(time: DateTime<Utc>) -> WeatherSnapshot {
        WeatherSnapshot {
            observed_at: time,
            temperature_c: 15.0,
            humidity_pct: 60,
            wind_speed_mps: 3.0,
            condition_code: "Clear".to_string(),
            condition_description: "clear sky".to_string(),
            icon_id: "01d".to_string(),
        }
    }

    fn at(day: u32, hour: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, day, hour, 0, 0).unwrap()
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    #[test]
    fn test_first_sample_of_each_future_day_wins() {
        // day0 = today; its samples must be dropped entirely
        let feed = vec![
            sample_at(at(10, 3)),
            sample_at(at(10, 6)),
            sample_at(at(11, 0)),
            sample_at(at(11, 3)),
            sample_at(at(12, 0)),
            sample_at(at(13, 0)),
        ];

        let reduced = reduce_to_daily(feed, today());

        let times: Vec<DateTime<Utc>> = reduced.iter().map(|s| s.observed_at).collect();
        assert_eq!(times, vec![at(11, 0), at(12, 0), at(13, 0)]);
    }

    #[test]
    fn test_output_never_exceeds_three_days() {
        let feed: Vec<WeatherSnapshot> = (11..=17).map(|day| sample_at(at(day, 9))).collect();

        let reduced = reduce_to_daily(feed, today());

        assert_eq!(reduced.len(), FORECAST_DAYS);
        let dates: HashSet<NaiveDate> =
            reduced.iter().map(|s| s.observed_at.date_naive()).collect();
        assert_eq!(dates.len(), FORECAST_DAYS);
    }

    #[test]
    fn test_today_is_never_emitted() {
        let feed = vec![
            sample_at(at(10, 0)),
            sample_at(at(10, 21)),
            sample_at(at(11, 0)),
        ];

        let reduced = reduce_to_daily(feed, today());

        assert_eq!(reduced.len(), 1);
        assert_ne!(reduced[0].observed_at.date_naive(), today());
    }

    #[rstest]
    #[case::empty_feed(vec![], 0)]
    #[case::only_today(vec![at(10, 3), at(10, 9)], 0)]
    #[case::one_future_day(vec![at(11, 0), at(11, 3)], 1)]
    #[case::two_future_days(vec![at(11, 0), at(12, 0)], 2)]
    fn test_short_feeds_yield_fewer_entries(
        #[case] times: Vec<DateTime<Utc>>,
        #[case] expected: usize,
    ) {
        let feed: Vec<WeatherSnapshot> = times.into_iter().map(sample_at).collect();
        assert_eq!(reduce_to_daily(feed, today()).len(), expected);
    }

    #[test]
    fn test_reduction_is_idempotent() {
        let feed = vec![
            sample_at(at(11, 0)),
            sample_at(at(11, 6)),
            sample_at(at(12, 3)),
        ];

        let once = reduce_to_daily(feed.clone(), today());
        let again = reduce_to_daily(feed, today());
        assert_eq!(once, again);

        // Reducing an already-reduced sequence changes nothing
        let twice = reduce_to_daily(once.clone(), today());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_output_is_chronological() {
        let feed: Vec<WeatherSnapshot> = (11..=14).map(|day| sample_at(at(day, 12))).collect();

        let reduced = reduce_to_daily(feed, today());

        let mut sorted = reduced.clone();
        sorted.sort_by_key(|s| s.observed_at);
        assert_eq!(reduced, sorted);
    }
}
