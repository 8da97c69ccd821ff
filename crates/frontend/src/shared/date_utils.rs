//! Date formatting for table cells.
//!
//! Timestamps arrive from the API as RFC 3339 strings. Anything that does not
//! parse is shown as-is.

use chrono::{DateTime, NaiveDate, Utc};

const MINUTES_IN_HOUR: i64 = 60;
const MINUTES_IN_DAY: i64 = 1_440;
const MINUTES_IN_ALMOST_TWO_DAYS: i64 = 2_520;
const MINUTES_IN_MONTH: i64 = 43_200;
const MINUTES_IN_TWO_MONTHS: i64 = 86_400;

pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .ok()
        .map(|dt| dt.with_timezone(&Utc))
}

/// Format a timestamp or plain date as "Mar 15, 2024".
pub fn format_date(value: &str) -> String {
    if let Some(dt) = parse_timestamp(value) {
        return dt.format("%b %-d, %Y").to_string();
    }
    match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        Ok(date) => date.format("%b %-d, %Y").to_string(),
        Err(_) => value.to_string(),
    }
}

/// "5 minutes ago", "about 3 hours ago", "in 2 days" relative to `now`.
pub fn time_ago_at(value: &str, now: DateTime<Utc>) -> String {
    let Some(at) = parse_timestamp(value) else {
        return value.to_string();
    };
    let seconds = (now - at).num_seconds();
    let words = distance_words(seconds.abs());
    if seconds >= 0 {
        format!("{} ago", words)
    } else {
        format!("in {}", words)
    }
}

/// [`time_ago_at`] against the current clock.
pub fn time_ago(value: &str) -> String {
    time_ago_at(value, Utc::now())
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

fn round_div(value: i64, divisor: i64) -> i64 {
    (value + divisor / 2) / divisor
}

/// Bucketed distance for a non-negative number of seconds.
fn distance_words(seconds: i64) -> String {
    let minutes = round_div(seconds, 60);

    if minutes < 1 {
        "less than a minute".to_string()
    } else if minutes < 2 {
        "1 minute".to_string()
    } else if minutes < 45 {
        plural(minutes, "minute")
    } else if minutes < 90 {
        "about 1 hour".to_string()
    } else if minutes < MINUTES_IN_DAY {
        format!("about {}", plural(round_div(minutes, MINUTES_IN_HOUR), "hour"))
    } else if minutes < MINUTES_IN_ALMOST_TWO_DAYS {
        "1 day".to_string()
    } else if minutes < MINUTES_IN_MONTH {
        plural(round_div(minutes, MINUTES_IN_DAY), "day")
    } else if minutes < MINUTES_IN_TWO_MONTHS {
        format!("about {}", plural(round_div(minutes, MINUTES_IN_MONTH), "month"))
    } else {
        let months = minutes / MINUTES_IN_MONTH;
        if months < 12 {
            return plural(round_div(minutes, MINUTES_IN_MONTH), "month");
        }
        let years = months / 12;
        match months % 12 {
            0..=2 => format!("about {}", plural(years, "year")),
            3..=8 => format!("over {}", plural(years, "year")),
            _ => format!("almost {}", plural(years + 1, "year")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap()
    }

    fn ago(duration: Duration) -> String {
        time_ago_at(&(now() - duration).to_rfc3339(), now())
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "Mar 15, 2024");
        assert_eq!(format_date("2024-03-05"), "Mar 5, 2024");
        assert_eq!(format_date("invalid"), "invalid");
    }

    #[test]
    fn test_short_distances() {
        assert_eq!(ago(Duration::seconds(10)), "less than a minute ago");
        assert_eq!(ago(Duration::seconds(70)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
        assert_eq!(ago(Duration::minutes(50)), "about 1 hour ago");
        assert_eq!(ago(Duration::hours(3)), "about 3 hours ago");
    }

    #[test]
    fn test_day_and_month_distances() {
        assert_eq!(ago(Duration::hours(24)), "1 day ago");
        assert_eq!(ago(Duration::days(5)), "5 days ago");
        assert_eq!(ago(Duration::days(35)), "about 1 month ago");
        assert_eq!(ago(Duration::days(120)), "4 months ago");
    }

    #[test]
    fn test_year_distances() {
        assert_eq!(ago(Duration::days(400)), "about 1 year ago");
        assert_eq!(ago(Duration::days(550)), "over 1 year ago");
        assert_eq!(ago(Duration::days(700)), "almost 2 years ago");
    }

    #[test]
    fn test_future_and_invalid() {
        let later = (now() + Duration::minutes(5)).to_rfc3339();
        assert_eq!(time_ago_at(&later, now()), "in 5 minutes");
        assert_eq!(time_ago_at("not a date", now()), "not a date");
    }
}
