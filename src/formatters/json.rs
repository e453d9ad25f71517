//! JSON-lines formatter

use crate::core::formatter::{write_body, Formatter};
use crate::core::{Entry, Result};

/// One JSON object per record:
/// `{"level":"info","tag":"api","time":"...","message":"...","fields":{...}}`
///
/// `fields` holds every non-template field under its key. Not installed by
/// default; register it with [`Logger::set_formatter`](crate::Logger::set_formatter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JsonFormatter {
    tag: String,
}

impl JsonFormatter {
    pub fn new(tag: impl Into<String>) -> Self {
        Self { tag: tag.into() }
    }
}

impl Formatter for JsonFormatter {
    fn format(&self, entry: &Entry<'_>) -> Result<Vec<u8>> {
        let sorted = entry.sorted_fields();

        let mut message = String::new();
        write_body(&mut message, &sorted);

        let mut fields = serde_json::Map::new();
        for field in sorted.iter().filter(|f| !f.is_format()) {
            fields.insert(field.key.clone(), field.value.to_json_value());
        }

        let mut json_obj = serde_json::Map::new();
        json_obj.insert("level".to_string(), serde_json::to_value(entry.entry_level())?);
        json_obj.insert("tag".to_string(), serde_json::Value::String(self.tag.clone()));
        json_obj.insert(
            "time".to_string(),
            serde_json::Value::String(entry.created().to_rfc3339()),
        );
        json_obj.insert("message".to_string(), serde_json::Value::String(message));
        json_obj.insert("fields".to_string(), serde_json::Value::Object(fields));

        let mut out = serde_json::to_vec(&serde_json::Value::Object(json_obj))?;
        out.push(b'\n');
        Ok(out)
    }
}
