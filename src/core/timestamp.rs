//! Timestamp formatting utilities
//!
//! Provides the timestamp layouts the text and JSON formatters can stamp
//! records with. The default is a syslog-like stamp with nanosecond
//! precision (`Jan  2 15:04:05.000000000`).

use super::error::{LoggerError, Result};
use chrono::{DateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Write};

const STAMP_NANO: &str = "%b %e %H:%M:%S%.9f";

/// Timestamp layout options
///
/// # Examples
///
/// ```
/// use leveled_log::TimestampFormat;
/// use chrono::{TimeZone, Utc};
///
/// let at = Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45).unwrap();
/// assert_eq!(TimestampFormat::StampNano.format(&at), "Jan  8 10:30:45.000000000");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Month, space-padded day and time with nanoseconds: `Jan  8 10:30:45.123456000`
    #[default]
    StampNano,

    /// ISO 8601 with milliseconds and offset: `2025-01-08T10:30:45.123+00:00`
    Iso8601,

    /// RFC 3339: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Format `datetime`, reporting an unusable custom layout as an error.
    pub fn try_format<Tz>(&self, datetime: &DateTime<Tz>) -> Result<String>
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        let mut out = String::with_capacity(32);
        let written = match self {
            TimestampFormat::StampNano => write!(out, "{}", datetime.format(STAMP_NANO)),
            TimestampFormat::Iso8601 => {
                write!(out, "{}", datetime.format("%Y-%m-%dT%H:%M:%S%.3f%:z"))
            }
            TimestampFormat::Rfc3339 => write!(out, "{}", datetime.to_rfc3339()),
            TimestampFormat::Unix => write!(out, "{}", datetime.timestamp()),
            TimestampFormat::UnixMillis => write!(out, "{}", datetime.timestamp_millis()),
            TimestampFormat::Custom(layout) => write!(out, "{}", datetime.format(layout)),
        };
        written.map_err(|_| {
            LoggerError::formatter("timestamp", format!("invalid layout {:?}", self.layout()))
        })?;
        Ok(out)
    }

    /// Format `datetime`; an unusable custom layout yields an empty string.
    #[must_use]
    pub fn format<Tz>(&self, datetime: &DateTime<Tz>) -> String
    where
        Tz: TimeZone,
        Tz::Offset: fmt::Display,
    {
        self.try_format(datetime).unwrap_or_default()
    }

    fn layout(&self) -> &str {
        match self {
            TimestampFormat::StampNano => STAMP_NANO,
            TimestampFormat::Iso8601 => "%Y-%m-%dT%H:%M:%S%.3f%:z",
            TimestampFormat::Rfc3339 => "rfc3339",
            TimestampFormat::Unix => "unix",
            TimestampFormat::UnixMillis => "unix-millis",
            TimestampFormat::Custom(layout) => layout,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn fixed_datetime() -> DateTime<Utc> {
        // 2025-01-08 10:30:45.123456 UTC
        Utc.with_ymd_and_hms(2025, 1, 8, 10, 30, 45)
            .single()
            .expect("valid datetime")
            + chrono::Duration::microseconds(123456)
    }

    #[test]
    fn test_stamp_nano_format() {
        let result = TimestampFormat::StampNano.format(&fixed_datetime());
        assert_eq!(result, "Jan  8 10:30:45.123456000");
    }

    #[test]
    fn test_iso8601_format() {
        let result = TimestampFormat::Iso8601.format(&fixed_datetime());
        assert_eq!(result, "2025-01-08T10:30:45.123+00:00");
    }

    #[test]
    fn test_rfc3339_format() {
        let result = TimestampFormat::Rfc3339.format(&fixed_datetime());
        assert!(result.starts_with("2025-01-08T10:30:45"));
        assert!(result.contains("+00:00") || result.ends_with('Z'));
    }

    #[test]
    fn test_unix_formats() {
        let secs: i64 = TimestampFormat::Unix
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix timestamp");
        let millis: i64 = TimestampFormat::UnixMillis
            .format(&fixed_datetime())
            .parse()
            .expect("valid unix millis timestamp");
        assert_eq!(secs, 1736332245);
        assert_eq!(millis, 1736332245123);
    }

    #[test]
    fn test_custom_format() {
        let format = TimestampFormat::Custom("%Y/%m/%d %H:%M".to_string());
        assert_eq!(format.format(&fixed_datetime()), "2025/01/08 10:30");
    }

    #[test]
    fn test_invalid_custom_layout_is_an_error() {
        let format = TimestampFormat::Custom("%Q".to_string());
        assert!(matches!(
            format.try_format(&fixed_datetime()),
            Err(LoggerError::Formatter { .. })
        ));
        assert_eq!(format.format(&fixed_datetime()), "");
    }

    #[test]
    fn test_default_is_stamp_nano() {
        assert_eq!(TimestampFormat::default(), TimestampFormat::StampNano);
    }

    #[test]
    fn test_serialization() {
        let json = serde_json::to_string(&TimestampFormat::StampNano).expect("serialize");
        assert_eq!(json, "\"StampNano\"");

        let format: TimestampFormat =
            serde_json::from_str(r#"{"Custom":"%Y-%m-%d"}"#).expect("deserialize Custom");
        assert_eq!(format, TimestampFormat::Custom("%Y-%m-%d".to_string()));
    }
}
