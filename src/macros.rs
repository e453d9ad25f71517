//! Variadic macros over the logger's call surface.
//!
//! Logger methods take any iterator of values convertible into
//! [`FieldValue`](crate::FieldValue); these macros accept mixed value types
//! directly, the way a variadic call would.
//!
//! # Examples
//!
//! ```
//! use leveled_log::prelude::*;
//! use leveled_log::{at, atf, fields};
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone(), Level::Info, "app");
//! logger.swap_formatter("raw");
//!
//! at!(logger, Level::Info, "port ", 8080);
//! atf!(logger, Level::Warn, "%d of %d retries", 3, 5);
//! logger.print(fields!["ok=", true]);
//!
//! assert_eq!(sink.contents_string(), "port 8080\n3 of 5 retries\nok=true\n");
//! ```

/// Build a `Vec<FieldValue>` from values of mixed types.
#[macro_export]
macro_rules! fields {
    () => {
        ::std::vec::Vec::<$crate::FieldValue>::new()
    };
    ($($value:expr),+ $(,)?) => {
        ::std::vec![$($crate::FieldValue::from($value)),+]
    };
}

/// Log values at a level, bypassing the logger's level gate.
#[macro_export]
macro_rules! at {
    ($logger:expr, $level:expr $(, $value:expr)* $(,)?) => {
        $logger.at($level, $crate::fields![$($value),*])
    };
}

/// Log a format template and its arguments at a level, bypassing the gate.
#[macro_export]
macro_rules! atf {
    ($logger:expr, $level:expr, $format:expr $(, $value:expr)* $(,)?) => {
        $logger.atf($level, $format, $crate::fields![$($value),*])
    };
}
