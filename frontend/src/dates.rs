//! Event date parsing and the fixed en-US presentation.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventDate {
    instant: DateTime<Utc>,
    /// Calendar day as written in the source string.
    day: NaiveDate,
}

impl EventDate {
    /// Accepts `YYYY-MM-DD` (midnight UTC), RFC 3339, and `YYYY-MM-DDTHH:MM[:SS]`
    /// without offset (read as UTC).
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if let Ok(day) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
            let instant = day.and_hms_opt(0, 0, 0)?.and_utc();
            return Some(Self { instant, day });
        }
        if let Ok(stamped) = DateTime::parse_from_rfc3339(raw) {
            return Some(Self {
                instant: stamped.with_timezone(&Utc),
                day: stamped.date_naive(),
            });
        }
        ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M"]
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
            .map(|naive| Self {
                instant: naive.and_utc(),
                day: naive.date(),
            })
    }

    pub fn instant(&self) -> DateTime<Utc> {
        self.instant
    }

    pub fn is_after(&self, now: DateTime<Utc>) -> bool {
        self.instant > now
    }

    /// Whole days until the event, rounded up; zero or negative once it has
    /// started.
    pub fn days_until(&self, now: DateTime<Utc>) -> i64 {
        let millis = (self.instant - now).num_milliseconds();
        if millis > 0 {
            (millis + MILLIS_PER_DAY - 1) / MILLIS_PER_DAY
        } else {
            millis / MILLIS_PER_DAY
        }
    }

    /// e.g. `Tuesday, June 4, 2024`
    pub fn long_format(&self) -> String {
        self.day.format("%A, %B %-d, %Y").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    #[test]
    fn date_only_strings_are_utc_midnight() {
        let date = EventDate::parse("2024-06-04").unwrap();
        assert_eq!(date.instant(), at(2024, 6, 4, 0));
        assert_eq!(date.long_format(), "Tuesday, June 4, 2024");
    }

    #[test]
    fn offsets_keep_their_own_calendar_day() {
        let date = EventDate::parse("2024-12-31T23:30:00-05:00").unwrap();
        assert_eq!(date.long_format(), "Tuesday, December 31, 2024");
        assert_eq!(date.instant(), Utc.with_ymd_and_hms(2025, 1, 1, 4, 30, 0).unwrap());
    }

    #[test]
    fn naive_times_are_accepted() {
        let date = EventDate::parse("2024-06-04T18:30").unwrap();
        assert_eq!(date.instant(), Utc.with_ymd_and_hms(2024, 6, 4, 18, 30, 0).unwrap());
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(EventDate::parse("next tuesday").is_none());
        assert!(EventDate::parse("2024-13-40").is_none());
        assert!(EventDate::parse("").is_none());
    }

    #[test]
    fn partial_days_round_up() {
        let date = EventDate::parse("2024-06-04").unwrap();
        assert_eq!(date.days_until(at(2024, 6, 1, 0)), 3);
        assert_eq!(date.days_until(at(2024, 6, 1, 10)), 3);
        assert_eq!(date.days_until(at(2024, 6, 3, 23)), 1);
        assert_eq!(date.days_until(at(2024, 6, 4, 0)), 0);
        assert_eq!(date.days_until(at(2024, 6, 5, 12)), -1);
    }

    #[test]
    fn upcoming_is_strictly_after_now() {
        let date = EventDate::parse("2024-06-04").unwrap();
        assert!(date.is_after(at(2024, 6, 3, 23)));
        assert!(!date.is_after(at(2024, 6, 4, 0)));
    }
}
