//! Human-readable text formatter
//!
//! Output shape: `<LEVEL> <tag> <timestamp> <body>\n`, where each of the
//! three decorations is a [`Slot`] template colored on a terminal.

use crate::core::color::{self, BLACK, BLUE};
use crate::core::formatter::{write_body, Formatter};
use crate::core::template::Slot;
use crate::core::{Entry, Result, TimestampFormat};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextFormatter {
    name: String,
    timestamp_format: TimestampFormat,
}

impl TextFormatter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Set the timestamp format for this formatter
    ///
    /// # Examples
    ///
    /// ```
    /// use leveled_log::formatters::TextFormatter;
    /// use leveled_log::TimestampFormat;
    ///
    /// let formatter = TextFormatter::new("api")
    ///     .with_timestamp_format(TimestampFormat::Iso8601);
    /// ```
    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    pub(crate) fn render(&self, entry: &Entry<'_>, colored: bool) -> Result<Vec<u8>> {
        let mut out = Vec::with_capacity(64);

        let level = entry.entry_level();
        let level_text = Slot::Level.render(&level.as_str().to_uppercase())?;
        level.color().write_with(&mut out, level_text, colored)?;

        BLACK.write_with(&mut out, Slot::Name.render(&self.name)?, colored)?;

        let stamp = self.timestamp_format.try_format(&entry.created())?;
        BLUE.write_with(&mut out, Slot::Time.render(&stamp)?, colored)?;

        let mut body = String::new();
        write_body(&mut body, &entry.sorted_fields());
        out.extend_from_slice(body.as_bytes());
        out.push(b'\n');
        Ok(out)
    }
}

impl Formatter for TextFormatter {
    fn format(&self, entry: &Entry<'_>) -> Result<Vec<u8>> {
        self.render(entry, !color::no_color())
    }
}
