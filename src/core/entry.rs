//! A single log record

use super::error::Result;
use super::field::{self, Field, FieldValue};
use super::formatter;
use super::level::Level;
use super::logger::Logger;
use chrono::{DateTime, Local};
use std::fmt;

/// One log event: creation time, level, ordered fields and the logger it
/// was created by.
///
/// The entry borrows its logger; formatting and writing go through the
/// logger's active formatter, hooks and sink.
pub struct Entry<'a> {
    created: DateTime<Local>,
    level: Level,
    fields: Vec<Field>,
    logger: &'a Logger,
}

impl<'a> Entry<'a> {
    pub fn new(logger: &'a Logger, level: Level, fields: Vec<Field>) -> Self {
        Self {
            created: Local::now(),
            level,
            fields,
            logger,
        }
    }

    pub fn created(&self) -> DateTime<Local> {
        self.created
    }

    pub fn logger(&self) -> &'a Logger {
        self.logger
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Fields by ascending order, ties in emission order
    pub fn sorted_fields(&self) -> Vec<&Field> {
        field::sorted(&self.fields)
    }

    /// Append a field ordered after every existing one.
    pub fn push_field(&mut self, key: impl Into<String>, value: impl Into<FieldValue>) {
        let order = self.fields.iter().map(|f| f.order.saturating_add(1)).max().unwrap_or(0);
        self.fields.push(Field::new(order, key, value));
    }

    pub fn set_entry_level(&mut self, level: Level) {
        self.level = level;
    }

    /// The explicit level, or the owning logger's level when unset.
    pub fn entry_level(&self) -> Level {
        if self.level != Level::Unrecognized {
            self.level
        } else {
            self.logger.level()
        }
    }

    /// Render through the owning logger's active formatter.
    pub fn render(&self) -> Result<Vec<u8>> {
        self.logger.format(self)
    }

    /// The field body alone, without decoration or trailing newline
    pub fn message(&self) -> String {
        formatter::render_body(&self.fields)
    }
}

impl fmt::Debug for Entry<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entry")
            .field("created", &self.created)
            .field("level", &self.level)
            .field("fields", &self.fields)
            .finish_non_exhaustive()
    }
}
