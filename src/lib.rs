//! # Leveled Log
//!
//! A structured, leveled logging engine.
//!
//! Callers emit records made of a level and ordered key/value fields. The
//! logger gates records on its minimum level, fires hooks before rendering,
//! renders through a swappable named formatter, writes the bytes to its sink
//! under a single lock, and fires hooks after the write.
//!
//! ## Features
//!
//! - **Ordered fields**: positional values or a printf-style `Format` template
//! - **Pluggable formatters**: `null` (default), `raw`, `text`, plus your own
//! - **Hooks**: per timing and level; `Fatal` exits and `Panic` panics after
//!   the record is written
//! - **Thread safe**: formatter swaps and sink writes share one lock
//!
//! ```
//! use leveled_log::prelude::*;
//!
//! let sink = MemorySink::new();
//! let logger = Logger::new(sink.clone(), Level::Debug, "app");
//! logger.swap_formatter("raw");
//!
//! logger.infof("%s listening on %d", [FieldValue::from("api"), 8080.into()]);
//! assert_eq!(sink.contents_string(), "api listening on 8080\n");
//! ```

pub mod core;
pub mod formatters;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        hook_fn, Entry, Field, FieldValue, Formatter, Hook, Level, Logger, LoggerBuilder,
        LoggerError, Result, Timing, TimestampFormat,
    };
    pub use crate::formatters::TextFormatter;
    #[cfg(feature = "json")]
    pub use crate::formatters::JsonFormatter;
    #[cfg(feature = "file")]
    pub use crate::sinks::FileSink;
    pub use crate::sinks::MemorySink;
}

pub use crate::core::{
    build_fields, build_format_fields, color, hook_fn, Color, Entry, ExitHook, Field, FieldValue,
    Formatter, Hook, Hooks, Level, Logger, LoggerBuilder, LoggerError, NullFormatter, PanicHook,
    RawFormatter, Result, SinkGuard, Timing, TimestampFormat, DEFAULT_FORMATTER, FORMAT_KEY,
};
pub use formatters::TextFormatter;
#[cfg(feature = "json")]
pub use formatters::JsonFormatter;
#[cfg(feature = "file")]
pub use sinks::FileSink;
pub use sinks::MemorySink;
