#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use shiftrix::libs::interval::{Interval, IntervalKind};
    use shiftrix::libs::shift::{build_shift_windows, classify_window, ShiftPolicy, ShiftState, ShiftWindow};

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn window(start: NaiveDateTime, end: NaiveDateTime) -> ShiftWindow {
        ShiftWindow {
            label: "Shift".to_string(),
            start,
            end,
        }
    }

    #[test]
    fn test_default_policy_builds_one_window() {
        let windows = build_shift_windows(date(2025, 3, 10), &ShiftPolicy::default());

        assert_eq!(windows.len(), 1);
        assert_eq!(windows[0].label, "Shift");
        assert_eq!(windows[0].start, dt(2025, 3, 10, 8, 0, 0));
        assert_eq!(windows[0].end, dt(2025, 3, 10, 16, 0, 0));
    }

    #[test]
    fn test_three_shift_schedule_runs_back_to_back() {
        let policy = ShiftPolicy {
            shift_start: "06:00".to_string(),
            shift_length_hours: 8.0,
            shifts_per_day: 3,
        };
        let windows = build_shift_windows(date(2025, 3, 10), &policy);

        assert_eq!(windows.len(), 3);
        assert_eq!(windows[0].label, "Early");
        assert_eq!(windows[1].label, "Late");
        assert_eq!(windows[2].label, "Night");
        assert_eq!(windows[0].start, dt(2025, 3, 10, 6, 0, 0));
        assert_eq!(windows[1].start, dt(2025, 3, 10, 14, 0, 0));
        assert_eq!(windows[2].start, dt(2025, 3, 10, 22, 0, 0));
        // The night shift runs past midnight into the next day
        assert_eq!(windows[2].end, dt(2025, 3, 11, 6, 0, 0));
    }

    #[test]
    fn test_extra_windows_get_numbered_labels() {
        let policy = ShiftPolicy {
            shift_start: "00:00".to_string(),
            shift_length_hours: 6.0,
            shifts_per_day: 4,
        };
        let windows = build_shift_windows(date(2025, 3, 10), &policy);
        assert_eq!(windows[3].label, "Shift 4");
    }

    #[test]
    fn test_malformed_start_falls_back_to_midnight() {
        let policy = ShiftPolicy {
            shift_start: "late-ish".to_string(),
            shift_length_hours: 8.0,
            shifts_per_day: 1,
        };
        let windows = build_shift_windows(date(2025, 3, 10), &policy);
        assert_eq!(windows[0].start, dt(2025, 3, 10, 0, 0, 0));
    }

    #[test]
    fn test_no_overlap_classifies_as_none() {
        let w = window(dt(2025, 3, 10, 8, 0, 0), dt(2025, 3, 10, 16, 0, 0));
        let intervals = vec![Interval::new(dt(2025, 3, 10, 18, 0, 0), dt(2025, 3, 10, 20, 0, 0), IntervalKind::Available)];
        assert_eq!(classify_window(&w, &intervals), ShiftState::None);
        assert_eq!(classify_window(&w, &[]), ShiftState::None);
    }

    #[test]
    fn test_touching_endpoints_do_not_overlap() {
        let w = window(dt(2025, 3, 10, 8, 0, 0), dt(2025, 3, 10, 16, 0, 0));
        let intervals = vec![
            Interval::new(dt(2025, 3, 10, 6, 0, 0), dt(2025, 3, 10, 8, 0, 0), IntervalKind::Available),
            Interval::new(dt(2025, 3, 10, 16, 0, 0), dt(2025, 3, 10, 18, 0, 0), IntervalKind::Unavailable),
        ];
        assert_eq!(classify_window(&w, &intervals), ShiftState::None);
    }

    #[test]
    fn test_available_overlap_marks_window() {
        let w = window(dt(2025, 3, 10, 8, 0, 0), dt(2025, 3, 10, 16, 0, 0));
        let intervals = vec![Interval::new(dt(2025, 3, 10, 15, 59, 59), dt(2025, 3, 10, 20, 0, 0), IntervalKind::Available)];
        assert_eq!(classify_window(&w, &intervals), ShiftState::Available);
    }

    #[test]
    fn test_unavailable_wins_in_either_order() {
        let w = window(dt(2025, 3, 10, 8, 0, 0), dt(2025, 3, 10, 16, 0, 0));
        let available = Interval::new(dt(2025, 3, 10, 8, 0, 0), dt(2025, 3, 10, 12, 0, 0), IntervalKind::Available);
        let unavailable = Interval::new(dt(2025, 3, 10, 12, 0, 0), dt(2025, 3, 10, 16, 0, 0), IntervalKind::Unavailable);

        let forward = vec![available.clone(), unavailable.clone()];
        let backward = vec![unavailable, available];
        assert_eq!(classify_window(&w, &forward), ShiftState::Unavailable);
        assert_eq!(classify_window(&w, &backward), ShiftState::Unavailable);
    }

    #[test]
    fn test_unrelated_unavailability_does_not_veto() {
        let w = window(dt(2025, 3, 10, 8, 0, 0), dt(2025, 3, 10, 16, 0, 0));
        let intervals = vec![
            Interval::new(dt(2025, 3, 10, 9, 0, 0), dt(2025, 3, 10, 12, 0, 0), IntervalKind::Available),
            Interval::new(dt(2025, 3, 10, 20, 0, 0), dt(2025, 3, 10, 22, 0, 0), IntervalKind::Unavailable),
        ];
        assert_eq!(classify_window(&w, &intervals), ShiftState::Available);
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(ShiftState::None.label(), "-");
        assert_eq!(ShiftState::Available.label(), "available");
        assert_eq!(ShiftState::Unavailable.label(), "unavailable");
    }
}
