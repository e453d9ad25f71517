//! Formatter trait, the undecorated formatters and field-body rendering

use super::entry::Entry;
use super::error::Result;
use super::field::{self, Field, FieldValue};
use super::printf;

/// Converts a record into the bytes written to a sink.
pub trait Formatter: Send + Sync {
    fn format(&self, entry: &Entry<'_>) -> Result<Vec<u8>>;
}

/// Renders nothing; the default so a fresh logger stays silent.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullFormatter;

impl Formatter for NullFormatter {
    fn format(&self, _entry: &Entry<'_>) -> Result<Vec<u8>> {
        Ok(Vec::new())
    }
}

/// The field body followed by a newline, with no level or timestamp.
#[derive(Debug, Clone, Copy, Default)]
pub struct RawFormatter;

impl Formatter for RawFormatter {
    fn format(&self, entry: &Entry<'_>) -> Result<Vec<u8>> {
        let mut body = String::new();
        write_body(&mut body, &entry.sorted_fields());
        body.push('\n');
        Ok(body.into_bytes())
    }
}

/// Render fields (in any order) to their message body.
pub fn render_body(fields: &[Field]) -> String {
    let mut out = String::new();
    write_body(&mut out, &field::sorted(fields));
    out
}

/// Append the body of already-sorted fields.
///
/// A `Format` field turns the other values into arguments of its template;
/// without one the values are concatenated with no separator.
pub fn write_body(out: &mut String, fields: &[&Field]) {
    let mut template: Option<&FieldValue> = None;
    let mut args: Vec<&FieldValue> = Vec::with_capacity(fields.len());
    for f in fields {
        if f.is_format() {
            template = Some(&f.value);
        } else {
            args.push(&f.value);
        }
    }

    match template {
        Some(FieldValue::String(t)) => out.push_str(&printf::sprintf(t, &args)),
        Some(other) => out.push_str(&printf::sprintf(&other.to_string(), &args)),
        None => {
            for v in args {
                out.push_str(&v.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::field::{build_fields, build_format_fields, FORMAT_KEY};
    use crate::core::level::Level;
    use crate::core::logger::Logger;

    #[test]
    fn test_null_is_empty() {
        let logger = Logger::new(std::io::sink(), Level::Debug, "TEST");
        let entry = logger.entry(Level::Panic, build_fields(0, ["MESSAGE", "DEBUG"]));
        assert!(NullFormatter.format(&entry).unwrap().is_empty());
    }

    #[test]
    fn test_raw_concatenates() {
        let logger = Logger::new(std::io::sink(), Level::Debug, "TEST");
        let entry = logger.entry(Level::Info, build_fields(0, [FieldValue::from("n="), 5.into()]));
        assert_eq!(RawFormatter.format(&entry).unwrap(), b"n=5\n");
    }

    #[test]
    fn test_raw_applies_template() {
        let logger = Logger::new(std::io::sink(), Level::Debug, "TEST");
        let entry = logger.entry(
            Level::Info,
            build_format_fields("%s took %dms", [FieldValue::from("load"), 12.into()]),
        );
        let out = RawFormatter.format(&entry).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "load took 12ms\n");
        assert!(!String::from_utf8(RawFormatter.format(&entry).unwrap())
            .unwrap()
            .contains("INFO"));
    }

    #[test]
    fn test_body_template_from_hand_built_fields() {
        let fields = vec![
            Field::new(3, "b", "world"),
            Field::new(0, FORMAT_KEY, "%s, %s!"),
            Field::new(1, "a", "hello"),
        ];
        assert_eq!(render_body(&fields), "hello, world!");
    }

    #[test]
    fn test_body_without_fields() {
        assert_eq!(render_body(&[]), "");
    }
}
