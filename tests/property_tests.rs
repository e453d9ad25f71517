//! Property-based tests for leveled_log using proptest

use leveled_log::prelude::*;
use leveled_log::{build_fields, build_format_fields, FORMAT_KEY};
use proptest::prelude::*;

fn recognized_level() -> impl Strategy<Value = Level> {
    prop::sample::select(Level::ALL.to_vec())
}

/// A level name with each character's case chosen independently
fn mixed_case_name() -> impl Strategy<Value = (Level, String)> {
    recognized_level().prop_flat_map(|level| {
        let name = level.as_str();
        prop::collection::vec(any::<bool>(), name.len()).prop_map(move |upper| {
            let mixed = name
                .chars()
                .zip(upper)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c })
                .collect();
            (level, mixed)
        })
    })
}

fn raw_logger() -> (Logger, MemorySink) {
    let sink = MemorySink::new();
    let logger = Logger::new(sink.clone(), Level::Debug, "PROP");
    logger.swap_formatter("raw");
    (logger, sink)
}

// ============================================================================
// Level Tests
// ============================================================================

proptest! {
    /// Test that level names roundtrip through parse
    #[test]
    fn test_level_str_roundtrip(level in recognized_level()) {
        prop_assert_eq!(Level::parse(level.as_str()), level);
        prop_assert_eq!(level.to_string(), level.as_str());
    }

    /// Test that parsing ignores case and stringifies to lowercase
    #[test]
    fn test_level_parse_case_insensitive((level, name) in mixed_case_name()) {
        let parsed = Level::parse(&name);
        prop_assert_eq!(parsed, level);
        prop_assert_eq!(parsed.as_str(), name.to_lowercase());
    }

    /// Test that unknown names parse to Unrecognized
    #[test]
    fn test_unknown_level_names(name in "[a-z]{0,12}") {
        prop_assume!(Level::ALL.iter().all(|l| l.as_str() != name));
        let parsed = Level::parse(&name);
        prop_assert_eq!(parsed, Level::Unrecognized);
        prop_assert_eq!(parsed.as_str(), "unrecognized");
    }

    /// Test that level ordering follows verbosity
    #[test]
    fn test_level_ordering(a in recognized_level(), b in recognized_level()) {
        let ia = Level::ALL.iter().position(|l| *l == a).unwrap();
        let ib = Level::ALL.iter().position(|l| *l == b).unwrap();
        prop_assert_eq!(a < b, ia < ib);
    }
}

// ============================================================================
// Field Tests
// ============================================================================

proptest! {
    /// Test that positional fields are numbered consecutively from start
    #[test]
    fn test_build_fields_numbering(
        start in 0usize..100,
        values in prop::collection::vec(".*", 0..20)
    ) {
        let fields = build_fields(start, values.iter().map(String::as_str));
        prop_assert_eq!(fields.len(), values.len());
        for (i, field) in fields.iter().enumerate() {
            prop_assert_eq!(field.order, start + i);
            prop_assert_eq!(&field.key, &format!("Field{}", start + i));
            prop_assert_eq!(field.value.as_str(), Some(values[i].as_str()));
        }
    }

    /// Test that format fields lead with the template
    #[test]
    fn test_build_format_fields_shape(values in prop::collection::vec(any::<i64>(), 0..10)) {
        let fields = build_format_fields("%v", values.clone());
        prop_assert_eq!(fields.len(), values.len() + 1);
        prop_assert_eq!(&fields[0].key, FORMAT_KEY);
        prop_assert_eq!(fields[0].order, 1);
        for pair in fields.windows(2) {
            prop_assert!(pair[0].order <= pair[1].order);
        }
    }
}

// ============================================================================
// Rendering Tests
// ============================================================================

proptest! {
    /// Test that the raw formatter concatenates values with no separator
    #[test]
    fn test_raw_output_is_concatenation(values in prop::collection::vec(".*", 0..10)) {
        let (logger, sink) = raw_logger();
        logger.at(Level::Info, values.iter().map(String::as_str));
        prop_assert_eq!(sink.contents_string(), format!("{}\n", values.concat()));
    }

    /// Test that entry field count matches the values given
    #[test]
    fn test_entry_field_count(
        values in prop::collection::vec(any::<u32>(), 0..20),
        level in recognized_level()
    ) {
        let (logger, _) = raw_logger();
        let mut entry = logger.entry(Level::Info, build_fields(0, values.clone()));
        prop_assert_eq!(entry.fields().len(), values.len());
        entry.set_entry_level(level);
        prop_assert_eq!(entry.entry_level(), level);
    }

    /// Test that a plain %s template reproduces its argument
    #[test]
    fn test_printf_string_identity(s in "[^%]*") {
        let (logger, sink) = raw_logger();
        logger.printf("%s", [s.as_str()]);
        prop_assert_eq!(sink.contents_string(), format!("{}\n", s));
    }

    /// Test that the null formatter never produces output
    #[test]
    fn test_null_formatter_silent(values in prop::collection::vec(".*", 0..5)) {
        let sink = MemorySink::new();
        let logger = Logger::new(sink.clone(), Level::Debug, "PROP");
        logger.info(values.iter().map(String::as_str));
        prop_assert!(sink.is_empty());
    }
}
