#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveDateTime};
    use shiftrix::db::availability::Availability;
    use shiftrix::libs::interval::{Interval, IntervalKind};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct AvailabilityTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for AvailabilityTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            AvailabilityTestContext { _temp_dir: temp_dir }
        }
    }

    fn dt(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d).unwrap().and_hms_opt(h, min, s).unwrap()
    }

    #[test_context(AvailabilityTestContext)]
    #[test]
    fn test_insert_and_fetch_round_trip(_ctx: &mut AvailabilityTestContext) {
        let mut availability = Availability::new().unwrap();

        let interval = Interval::new(dt(2025, 3, 10, 9, 0, 0), dt(2025, 3, 10, 17, 0, 0), IntervalKind::Available);
        availability.insert(1, &interval).unwrap();

        let stored = availability.fetch(1).unwrap();
        assert_eq!(stored, vec![interval]);
    }

    #[test_context(AvailabilityTestContext)]
    #[test]
    fn test_milliseconds_survive_storage(_ctx: &mut AvailabilityTestContext) {
        let mut availability = Availability::new().unwrap();

        let end = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap().and_hms_milli_opt(23, 59, 59, 999).unwrap();
        let interval = Interval::new(dt(2025, 3, 10, 22, 0, 0), end, IntervalKind::Unavailable);
        availability.insert(1, &interval).unwrap();

        let stored = availability.fetch(1).unwrap();
        assert_eq!(stored[0].end, end);
        assert_eq!(stored[0].kind, IntervalKind::Unavailable);
    }

    #[test_context(AvailabilityTestContext)]
    #[test]
    fn test_fetch_orders_by_start(_ctx: &mut AvailabilityTestContext) {
        let mut availability = Availability::new().unwrap();

        let late = Interval::new(dt(2025, 3, 10, 14, 0, 0), dt(2025, 3, 10, 16, 0, 0), IntervalKind::Available);
        let early = Interval::new(dt(2025, 3, 10, 8, 0, 0), dt(2025, 3, 10, 10, 0, 0), IntervalKind::Available);
        availability.insert(1, &late).unwrap();
        availability.insert(1, &early).unwrap();

        let stored = availability.fetch(1).unwrap();
        assert_eq!(stored, vec![early, late]);
    }

    #[test_context(AvailabilityTestContext)]
    #[test]
    fn test_fetch_is_scoped_to_employee(_ctx: &mut AvailabilityTestContext) {
        let mut availability = Availability::new().unwrap();

        let mine = Interval::new(dt(2025, 3, 10, 9, 0, 0), dt(2025, 3, 10, 17, 0, 0), IntervalKind::Available);
        let theirs = Interval::new(dt(2025, 3, 11, 9, 0, 0), dt(2025, 3, 11, 17, 0, 0), IntervalKind::Available);
        availability.insert(1, &mine).unwrap();
        availability.insert(2, &theirs).unwrap();

        assert_eq!(availability.fetch(1).unwrap(), vec![mine]);
        assert_eq!(availability.fetch(2).unwrap(), vec![theirs]);
        assert!(availability.fetch(3).unwrap().is_empty());
    }

    #[test_context(AvailabilityTestContext)]
    #[test]
    fn test_import_batch(_ctx: &mut AvailabilityTestContext) {
        let mut availability = Availability::new().unwrap();

        let intervals = vec![
            Interval::new(dt(2025, 3, 10, 9, 0, 0), dt(2025, 3, 10, 12, 0, 0), IntervalKind::Available),
            Interval::new(dt(2025, 3, 10, 13, 0, 0), dt(2025, 3, 10, 17, 0, 0), IntervalKind::Available),
            Interval::new(dt(2025, 3, 11, 9, 0, 0), dt(2025, 3, 11, 17, 0, 0), IntervalKind::Unavailable),
        ];
        let imported = availability.import(1, &intervals).unwrap();

        assert_eq!(imported, 3);
        assert_eq!(availability.fetch(1).unwrap().len(), 3);
    }

    #[test_context(AvailabilityTestContext)]
    #[test]
    fn test_delete_for_employee(_ctx: &mut AvailabilityTestContext) {
        let mut availability = Availability::new().unwrap();

        let interval = Interval::new(dt(2025, 3, 10, 9, 0, 0), dt(2025, 3, 10, 17, 0, 0), IntervalKind::Available);
        availability.insert(1, &interval).unwrap();
        availability.insert(2, &interval).unwrap();

        assert_eq!(availability.delete_for(1).unwrap(), 1);
        assert!(availability.fetch(1).unwrap().is_empty());
        assert_eq!(availability.fetch(2).unwrap().len(), 1);
    }

    #[test_context(AvailabilityTestContext)]
    #[test]
    fn test_json_import_format(_ctx: &mut AvailabilityTestContext) {
        // The mobile app export tags the kind as "type"
        let json = r#"[
            {"start": "2025-03-10T09:00:00.000", "end": "2025-03-10T17:00:00.000", "type": "available"},
            {"start": "2025-03-11T09:00:00.000", "end": "2025-03-11T12:00:00.000", "type": "unavailable"}
        ]"#;
        let intervals: Vec<Interval> = serde_json::from_str(json).unwrap();

        assert_eq!(intervals.len(), 2);
        assert_eq!(intervals[0].kind, IntervalKind::Available);
        assert_eq!(intervals[1].kind, IntervalKind::Unavailable);
        assert_eq!(intervals[0].start, dt(2025, 3, 10, 9, 0, 0));

        let mut availability = Availability::new().unwrap();
        assert_eq!(availability.import(7, &intervals).unwrap(), 2);
        assert_eq!(availability.fetch(7).unwrap(), intervals);
    }
}
