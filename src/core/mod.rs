//! Core logger types and traits

pub mod color;
pub mod entry;
pub mod error;
pub mod field;
pub mod formatter;
pub mod hooks;
pub mod level;
pub mod logger;
pub mod printf;
pub mod template;
pub mod timestamp;

pub use color::Color;
pub use entry::Entry;
pub use error::{LoggerError, Result};
pub use field::{build_fields, build_format_fields, Field, FieldValue, FORMAT_KEY};
pub use formatter::{Formatter, NullFormatter, RawFormatter};
pub use hooks::{hook_fn, ExitHook, Hook, Hooks, PanicHook, Timing};
pub use level::Level;
pub use logger::{Logger, LoggerBuilder, SinkGuard, DEFAULT_FORMATTER};
pub use timestamp::TimestampFormat;
