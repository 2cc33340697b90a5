//! Injectable time source
//!
//! Forecast reduction compares sample dates against "today", so the
//! current time is injected rather than read from the wall clock inline.
//! Tests pin it to a fixed instant and stay deterministic across
//! midnight boundaries.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of the current time
pub trait Clock: Send + Sync {
    /// Current instant in UTC
    fn now(&self) -> DateTime<Utc>;

    /// Current UTC calendar date
    fn today(&self) -> NaiveDate {
        self.now().date_naive()
    }
}

/// Clock backed by the system wall clock
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Clock pinned to a fixed instant, for deterministic tests
pub struct FixedClock(pub DateTime<Utc>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<Utc> {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_fixed_clock_reports_pinned_date() {
        let instant = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 0).unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(
            clock.today(),
            NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
        );
    }
}
