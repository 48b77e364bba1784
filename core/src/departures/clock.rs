//! Clock-time helpers for departure boards
//!
//! Boards publish bare `HH:MM` times. A bare time is read as today when it is
//! later than now or within the last twelve hours, and as tomorrow otherwise,
//! so a 00:10 departure seen at 23:30 sorts after a 23:40 one.

use chrono::{DateTime, Days, NaiveTime, TimeDelta, TimeZone};
use regex::Regex;
use std::sync::OnceLock;
use std::time::Duration;

/// How far back a bare clock time may lie and still count as today
const LOOKBACK_HOURS: i64 = 12;

fn clock_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^\d{2}:\d{2}$").expect("clock pattern is valid"))
}

/// Whether a string is a bare `HH:MM` clock time
pub fn is_clock_time(value: &str) -> bool {
    clock_pattern().is_match(value)
}

/// Anchor a bare `HH:MM` clock time to a date relative to `now`
///
/// Returns `None` for anything that is not a valid clock time.
pub fn resolve_clock_time<Tz: TimeZone>(value: &str, now: &DateTime<Tz>) -> Option<DateTime<Tz>> {
    if !is_clock_time(value) {
        return None;
    }
    let time = NaiveTime::parse_from_str(value, "%H:%M").ok()?;
    let tz = now.timezone();

    let today = now.date_naive().and_time(time);
    let candidate = tz.from_local_datetime(&today).earliest()?;
    if candidate > now.clone() - TimeDelta::hours(LOOKBACK_HOURS) {
        return Some(candidate);
    }

    let tomorrow = now.date_naive().checked_add_days(Days::new(1))?.and_time(time);
    tz.from_local_datetime(&tomorrow).earliest()
}

/// Format a running time as `Uptime: D:HH:MM:SS`
pub fn format_uptime(elapsed: Duration) -> String {
    let total = elapsed.as_secs();
    let days = total / 86_400;
    let hours = (total % 86_400) / 3_600;
    let minutes = (total % 3_600) / 60;
    let seconds = total % 60;
    format!("Uptime: {}:{:02}:{:02}:{:02}", days, hours, minutes, seconds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn at(day: u32, hour: u32, minute: u32) -> DateTime<FixedOffset> {
        FixedOffset::east_opt(3_600)
            .unwrap()
            .with_ymd_and_hms(2024, 5, day, hour, minute, 0)
            .unwrap()
    }

    #[test]
    fn test_is_clock_time() {
        assert!(is_clock_time("09:05"));
        assert!(is_clock_time("23:59"));
        assert!(!is_clock_time("9:05"));
        assert!(!is_clock_time("09:05 "));
        assert!(!is_clock_time("Due"));
        assert!(!is_clock_time(""));
    }

    #[test]
    fn test_future_time_is_today() {
        let now = at(1, 10, 0);
        assert_eq!(resolve_clock_time("10:30", &now), Some(at(1, 10, 30)));
    }

    #[test]
    fn test_recent_past_time_is_today() {
        let now = at(1, 10, 0);
        assert_eq!(resolve_clock_time("09:58", &now), Some(at(1, 9, 58)));
        assert_eq!(resolve_clock_time("00:30", &now), Some(at(1, 0, 30)));
    }

    #[test]
    fn test_distant_past_time_is_tomorrow() {
        let now = at(1, 23, 30);
        assert_eq!(resolve_clock_time("00:10", &now), Some(at(2, 0, 10)));
        assert_eq!(resolve_clock_time("11:00", &now), Some(at(2, 11, 0)));
    }

    #[test]
    fn test_invalid_times_are_rejected() {
        let now = at(1, 10, 0);
        assert_eq!(resolve_clock_time("25:00", &now), None);
        assert_eq!(resolve_clock_time("10:7", &now), None);
        assert_eq!(resolve_clock_time("", &now), None);
    }

    #[test]
    fn test_format_uptime() {
        assert_eq!(format_uptime(Duration::from_secs(0)), "Uptime: 0:00:00:00");
        assert_eq!(format_uptime(Duration::from_secs(3_725)), "Uptime: 0:01:02:05");
        assert_eq!(
            format_uptime(Duration::from_secs(2 * 86_400 + 59)),
            "Uptime: 2:00:00:59"
        );
    }
}
