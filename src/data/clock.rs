//! Hong Kong civil time.
//!
//! Tariffs are defined in Hong Kong local time regardless of where the
//! process runs, so readings are derived from UTC plus the fixed +08:00
//! offset (Hong Kong has observed no DST since 1979). Keeping the offset
//! arithmetic explicit avoids depending on the host timezone database.

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Timelike, Utc};

const HK_UTC_OFFSET_HOURS: i64 = 8;

/// One clock observation, truncated to the minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockReading {
    pub date: NaiveDate,
    /// Minute of the civil day, 0–1439.
    pub minute_of_day: u16,
    /// 0 = Sunday .. 6 = Saturday.
    pub day_of_week: u8,
}

/// Current Hong Kong time.
pub fn now_hk() -> ClockReading {
    reading_from_utc(Utc::now().naive_utc())
}

fn reading_from_utc(utc: NaiveDateTime) -> ClockReading {
    let hk = utc + Duration::hours(HK_UTC_OFFSET_HOURS);
    ClockReading {
        date: hk.date(),
        minute_of_day: (hk.hour() * 60 + hk.minute()) as u16,
        day_of_week: hk.weekday().num_days_from_sunday() as u8,
    }
}

/// Reading for a caller-supplied date/minute pair (CLI overrides). The day
/// of week is derived from the date.
pub fn reading_for(date: NaiveDate, minute_of_day: u16) -> ClockReading {
    ClockReading {
        date,
        minute_of_day,
        day_of_week: date.weekday().num_days_from_sunday() as u8,
    }
}

/// `HH:MM` display form of a minute-of-day value.
pub fn hhmm(minute_of_day: u16) -> String {
    format!("{:02}:{:02}", minute_of_day / 60, minute_of_day % 60)
}

/// Parse an `HH:MM` string to a minute-of-day value. Accepts one- or
/// two-digit hours; rejects anything outside 00:00–23:59.
pub fn parse_hhmm(raw: &str) -> Option<u16> {
    let (hours, minutes) = raw.split_once(':')?;
    if hours.is_empty() || hours.len() > 2 || minutes.len() != 2 {
        return None;
    }
    let hours: u16 = hours.parse().ok()?;
    let minutes: u16 = minutes.parse().ok()?;
    if hours > 23 || minutes > 59 {
        return None;
    }
    Some(hours * 60 + minutes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_evening_rolls_into_the_next_hk_day() {
        // 2025-01-01 20:30 UTC is 2025-01-02 04:30 in Hong Kong (a Thursday).
        let utc = NaiveDate::from_ymd_opt(2025, 1, 1)
            .unwrap()
            .and_hms_opt(20, 30, 0)
            .unwrap();
        let reading = reading_from_utc(utc);
        assert_eq!(reading.date, NaiveDate::from_ymd_opt(2025, 1, 2).unwrap());
        assert_eq!(reading.minute_of_day, 4 * 60 + 30);
        assert_eq!(reading.day_of_week, 4);
    }

    #[test]
    fn sunday_maps_to_zero() {
        // 2025-01-05 is a Sunday in Hong Kong.
        let utc = NaiveDate::from_ymd_opt(2025, 1, 5)
            .unwrap()
            .and_hms_opt(1, 0, 0)
            .unwrap();
        assert_eq!(reading_from_utc(utc).day_of_week, 0);
    }

    #[test]
    fn hhmm_formats_with_leading_zeros() {
        assert_eq!(hhmm(0), "00:00");
        assert_eq!(hhmm(7 * 60 + 5), "07:05");
        assert_eq!(hhmm(23 * 60 + 59), "23:59");
    }

    #[test]
    fn parse_hhmm_accepts_valid_times() {
        assert_eq!(parse_hhmm("00:00"), Some(0));
        assert_eq!(parse_hhmm("08:30"), Some(510));
        assert_eq!(parse_hhmm("8:30"), Some(510));
        assert_eq!(parse_hhmm("23:59"), Some(1439));
    }

    #[test]
    fn parse_hhmm_rejects_malformed_input() {
        for raw in ["", "8", "24:00", "12:60", "12:5", "ab:cd", "12:345", "1200"] {
            assert_eq!(parse_hhmm(raw), None, "{raw:?} should be rejected");
        }
    }
}
