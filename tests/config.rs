#[cfg(test)]
mod tests {
    use shiftrix::libs::config::{Config, DisplayConfig, Granularity};
    use shiftrix::libs::shift::ShiftPolicy;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct ConfigTestContext {
        _temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            ConfigTestContext { _temp_dir: temp_dir }
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_missing_file_reads_as_defaults(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();

        assert!(config.policy.is_none());
        assert!(config.display.is_none());
        assert_eq!(config.policy(), ShiftPolicy::default());
        assert_eq!(config.default_granularity(), Granularity::Day);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_round_trip(_ctx: &mut ConfigTestContext) {
        let config = Config {
            policy: Some(ShiftPolicy {
                shift_start: "06:00".to_string(),
                shift_length_hours: 8.0,
                shifts_per_day: 3,
            }),
            display: Some(DisplayConfig {
                default_granularity: Granularity::Shift,
            }),
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.policy().shift_start, "06:00");
        assert_eq!(loaded.policy().shifts_per_day, 3);
        assert_eq!(loaded.default_granularity(), Granularity::Shift);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_partial_config_falls_back_per_section(_ctx: &mut ConfigTestContext) {
        let config = Config {
            policy: Some(ShiftPolicy {
                shift_start: "07:30".to_string(),
                shift_length_hours: 7.5,
                shifts_per_day: 2,
            }),
            display: None,
        };
        config.save().unwrap();

        let loaded = Config::read().unwrap();
        assert_eq!(loaded.policy().shift_start, "07:30");
        assert_eq!(loaded.default_granularity(), Granularity::Day);
    }

    #[test]
    fn test_default_policy_values() {
        let policy = ShiftPolicy::default();
        assert_eq!(policy.shift_start, "08:00");
        assert_eq!(policy.shift_length_hours, 8.0);
        assert_eq!(policy.shifts_per_day, 1);
        assert_eq!(policy.length_ms(), 8 * 3_600_000);
    }
}
