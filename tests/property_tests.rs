//! Property-based tests for fslog using proptest

use fslog::prelude::*;
use proptest::prelude::*;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop::sample::select(LogLevel::ALL.to_vec())
}

// ============================================================================
// LogLevel Tests
// ============================================================================

proptest! {
    /// Parsing the name of a level gives the level back
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);
    }

    /// Ordering follows the rank, most severe first
    #[test]
    fn test_log_level_ordering(level1 in any_level(), level2 in any_level()) {
        let rank1 = level1.rank();
        let rank2 = level2.rank();

        prop_assert_eq!(level1 <= level2, rank1 <= rank2);
        prop_assert_eq!(level1 < level2, rank1 < rank2);
        prop_assert_eq!(level1 >= level2, rank1 >= rank2);
    }

    /// Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// Ranks outside the set get a placeholder name and fail conversion
    #[test]
    fn test_unknown_rank_placeholder(raw in 8u8..=u8::MAX) {
        prop_assert_eq!(LogLevel::name_of(raw), format!("LogLevel({})", raw));
        prop_assert!(LogLevel::try_from(raw).is_err());
    }

    /// Known ranks convert back to the same level
    #[test]
    fn test_known_rank_roundtrip(level in any_level()) {
        prop_assert_eq!(LogLevel::try_from(level.rank()).unwrap(), level);
        prop_assert_eq!(LogLevel::name_of(level.rank()), level.to_str());
    }

    /// Parsing is case-sensitive, so lowercase names are rejected
    #[test]
    fn test_log_level_lowercase_rejected(level in any_level()) {
        let lower = level.to_str().to_lowercase();
        prop_assert!(lower.parse::<LogLevel>().is_err());
    }

    /// Anything that is not exactly a level name fails to parse and leaves
    /// the target unchanged
    #[test]
    fn test_log_level_invalid_parse(input in "[a-z0-9 _-]{0,12}", level in any_level()) {
        let mut target = level;
        let result = target.set(&input);

        prop_assert!(result.is_err());
        prop_assert_eq!(target, level);
        let message = result.unwrap_err().to_string();
        prop_assert!(message.starts_with("Unknown log level"), "{}", message);
    }

    /// Serde uses the uppercase level name
    #[test]
    fn test_log_level_json_serialization(level in any_level()) {
        let json = serde_json::to_string(&level).unwrap();
        prop_assert_eq!(&json, &format!("\"{}\"", level.to_str()));

        let deserialized: LogLevel = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(deserialized, level);
    }
}

// ============================================================================
// Threshold Tests
// ============================================================================

proptest! {
    /// A record is written exactly when its rank is at most the threshold's
    #[test]
    fn test_threshold_filtering(threshold in any_level(), level in any_level()) {
        // Terminal levels would exit or panic once written
        prop_assume!(!level.dispatch().is_terminal());

        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .log_level(threshold)
            .appender(memory.clone())
            .build()
            .unwrap();

        logger.log(level, None, format_args!("probe"), &[]);

        prop_assert_eq!(memory.len() == 1, level.rank() <= threshold.rank());
        prop_assert_eq!(logger.is_enabled(level), level.rank() <= threshold.rank());
    }

    /// Verbosity never makes quiet mode show more than errors
    #[test]
    fn test_quiet_wins(verbose in any::<u8>()) {
        prop_assert_eq!(LogLevel::from_verbosity(verbose, true), LogLevel::Error);
    }
}

// ============================================================================
// Field Annotation Tests
// ============================================================================

proptest! {
    /// Annotations render as nothing inside a message
    #[test]
    fn test_log_value_renders_empty(key in "[a-z]{1,8}", value in any::<i64>(), text in "[a-zA-Z ]*") {
        let rendered = format!("{}{}", text, log_value(key, value));
        prop_assert_eq!(rendered, text);
    }

    /// Later annotations win over earlier ones with the same key
    #[test]
    fn test_log_value_last_write_wins(key in "[a-z]{1,8}", first in any::<i64>(), second in any::<i64>()) {
        let mut context = LogContext::new();
        context.merge_values(&[log_value(key.clone(), first), log_value(key.clone(), second)]);

        prop_assert_eq!(context.len(), 1);
        prop_assert_eq!(context.get(&key), Some(&FieldValue::Int(second)));
    }

    /// JSON records are always a single parseable line
    #[test]
    fn test_json_record_is_one_line(message in ".*", value in ".*") {
        let memory = MemoryAppender::new();
        let logger = Logger::builder()
            .log_level(LogLevel::Debug)
            .use_json_log(true)
            .appender(memory.clone())
            .build()
            .unwrap();

        logger.info(None, format_args!("{}", message), &[log_value("value", value.clone())]);

        let line = &memory.lines()[0];
        prop_assert!(!line.contains('\n'));
        let parsed: serde_json::Value = serde_json::from_str(line).unwrap();
        prop_assert_eq!(parsed["message"].as_str(), Some(message.as_str()));
        prop_assert_eq!(parsed["value"].as_str(), Some(value.as_str()));
    }
}
