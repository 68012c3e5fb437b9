#[cfg(test)]
mod tests {
    use chrono::{Duration, NaiveDate, NaiveDateTime};
    use shiftrix::libs::formatter::{format_duration, format_ms, SegmentGroup};
    use shiftrix::libs::interval::{Interval, IntervalKind};
    use shiftrix::libs::splitter::split_by_day;

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    #[test]
    fn test_format_duration_zero() {
        assert_eq!(format_duration(&Duration::zero()), "00:00");
    }

    #[test]
    fn test_format_duration_minutes_only() {
        assert_eq!(format_duration(&Duration::minutes(30)), "00:30");
        assert_eq!(format_duration(&Duration::minutes(59)), "00:59");
        assert_eq!(format_duration(&Duration::minutes(1)), "00:01");
    }

    #[test]
    fn test_format_duration_hours_and_minutes() {
        assert_eq!(format_duration(&Duration::hours(8)), "08:00");
        assert_eq!(format_duration(&(Duration::hours(8) + Duration::minutes(45))), "08:45");
        assert_eq!(format_duration(&(Duration::hours(2) + Duration::minutes(5))), "02:05");
    }

    #[test]
    fn test_format_duration_large_hours() {
        assert_eq!(format_duration(&Duration::hours(24)), "24:00");
        assert_eq!(format_duration(&Duration::hours(100)), "100:00");
    }

    #[test]
    fn test_format_duration_negative_clamps() {
        assert_eq!(format_duration(&Duration::minutes(-90)), "00:00");
    }

    #[test]
    fn test_format_duration_drops_seconds() {
        assert_eq!(format_duration(&(Duration::minutes(5) + Duration::seconds(59))), "00:05");
    }

    #[test]
    fn test_format_ms() {
        assert_eq!(format_ms(0), "00:00");
        assert_eq!(format_ms(90 * 60 * 1000), "01:30");
        assert_eq!(format_ms(-1), "00:00");
        // The day clip's missing millisecond still reads as a full day
        assert_eq!(format_ms(24 * 3_600_000 - 1), "23:59");
    }

    #[test]
    fn test_segment_group_formatting() {
        let mut segments = split_by_day(&Interval::new(
            dt(2025, 3, 10, 9, 0, 0),
            dt(2025, 3, 10, 12, 30, 0),
            IntervalKind::Available,
        ));
        segments.extend(split_by_day(&Interval::new(
            dt(2025, 3, 10, 14, 0, 0),
            dt(2025, 3, 10, 18, 0, 0),
            IntervalKind::Unavailable,
        )));

        let formatted = segments.format();
        assert_eq!(formatted.len(), 2);
        assert_eq!(formatted[0].id, 1);
        assert_eq!(formatted[0].start, "09:00");
        assert_eq!(formatted[0].end, "12:30");
        assert_eq!(formatted[0].kind, "available");
        assert_eq!(formatted[1].id, 2);
        assert_eq!(formatted[1].kind, "unavailable");
    }

    #[test]
    fn test_segment_group_empty() {
        let segments: Vec<shiftrix::libs::splitter::DaySegment> = Vec::new();
        assert!(segments.format().is_empty());
    }
}
