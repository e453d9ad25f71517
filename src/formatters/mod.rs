//! Decorated formatter implementations

#[cfg(feature = "json")]
pub mod json;
pub mod text;

#[cfg(feature = "json")]
pub use json::JsonFormatter;
pub use text::TextFormatter;

// Re-export traits for convenience
pub use crate::core::formatter::{Formatter, NullFormatter, RawFormatter};
