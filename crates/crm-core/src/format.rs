//! Presentation helpers for durations and timestamps.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

/// Fixed civil offset used by all reporting (São Paulo, UTC-3).
pub const REPORT_OFFSET_HOURS: i32 = -3;

fn report_offset() -> FixedOffset {
    FixedOffset::east_opt(REPORT_OFFSET_HOURS * 3600).expect("valid report offset")
}

/// Format an elapsed duration in seconds as a Portuguese bucket label.
///
/// Buckets use integer truncation at each step:
/// under 60 s → `segundos`, under 3600 s → `minutos`, under 86400 s →
/// `horas`, everything else → `dias`.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    if seconds < 60 {
        format!("{} segundos", seconds)
    } else if seconds < 3600 {
        format!("{} minutos", seconds / 60)
    } else if seconds < 86400 {
        format!("{} horas", seconds / 3600)
    } else {
        format!("{} dias", seconds / 86400)
    }
}

/// Format a timestamp in the fixed report offset, `dd/mm/yyyy HH:MM`.
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.with_timezone(&report_offset())
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// Civil date of a timestamp in the fixed report offset.
///
/// Date-range filters compare against this, not the UTC date.
pub fn report_date(ts: DateTime<Utc>) -> NaiveDate {
    ts.with_timezone(&report_offset()).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_seconds_bucket() {
        assert_eq!(format_duration(0), "0 segundos");
        assert_eq!(format_duration(59), "59 segundos");
    }

    #[test]
    fn test_minutes_bucket_boundaries() {
        assert_eq!(format_duration(60), "1 minutos");
        assert_eq!(format_duration(300), "5 minutos");
        assert_eq!(format_duration(3599), "59 minutos");
    }

    #[test]
    fn test_hours_bucket_boundaries() {
        assert_eq!(format_duration(3600), "1 horas");
        assert_eq!(format_duration(86399), "23 horas");
    }

    #[test]
    fn test_days_bucket_boundary() {
        assert_eq!(format_duration(86400), "1 dias");
        assert_eq!(format_duration(200000), "2 dias");
    }

    #[test]
    fn test_truncation_not_rounding() {
        // 119 seconds is still "1 minutos", not "2 minutos".
        assert_eq!(format_duration(119), "1 minutos");
        // 7199 seconds is still "1 horas".
        assert_eq!(format_duration(7199), "1 horas");
    }

    #[test]
    fn test_negative_input_clamps() {
        assert_eq!(format_duration(-5), "0 segundos");
    }

    #[test]
    fn test_format_timestamp_in_report_offset() {
        let ts = Utc.with_ymd_and_hms(2025, 3, 10, 12, 0, 0).unwrap();
        assert_eq!(format_timestamp(ts), "10/03/2025 09:00");
    }

    #[test]
    fn test_report_date_crosses_midnight() {
        // 01:30 UTC is still the previous civil day in the report offset.
        let ts = Utc.with_ymd_and_hms(2025, 3, 10, 1, 30, 0).unwrap();
        assert_eq!(
            report_date(ts),
            NaiveDate::from_ymd_opt(2025, 3, 9).unwrap()
        );
    }
}
