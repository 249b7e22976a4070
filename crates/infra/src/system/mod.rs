use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

// Mocking out time so that it is possible to run tests that depend on time.
pub trait ISys: Send + Sync {
    /// The current timestamp in millis
    fn get_timestamp_millis(&self) -> i64;

    /// The current civil date in the given timezone. All scheduling
    /// arithmetic routes through this; there is no sub-day resolution.
    fn today(&self, tz: &Tz) -> NaiveDate {
        let now = DateTime::<Utc>::from_timestamp_millis(self.get_timestamp_millis())
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH);
        now.with_timezone(tz).date_naive()
    }
}

/// System that gets the real time and is used when not testing
pub struct RealSys {}
impl ISys for RealSys {
    fn get_timestamp_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct StaticTimeSys {
        millis: i64,
    }
    impl ISys for StaticTimeSys {
        fn get_timestamp_millis(&self) -> i64 {
            self.millis
        }
    }

    #[test]
    fn civil_date_follows_the_timezone() {
        // 2025-01-10 23:30:00 UTC
        let sys = StaticTimeSys {
            millis: 1736551800000,
        };
        assert_eq!(
            sys.today(&chrono_tz::UTC),
            NaiveDate::from_ymd_opt(2025, 1, 10).unwrap()
        );
        // Oslo is UTC+1 in January, so the civil day has already flipped
        assert_eq!(
            sys.today(&chrono_tz::Europe::Oslo),
            NaiveDate::from_ymd_opt(2025, 1, 11).unwrap()
        );
    }
}
