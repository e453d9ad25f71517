//! Single-substitution segment templates
//!
//! A template is literal text with `{{.Key}}` actions. The text formatter
//! decorates every record with three fixed segments ([`Slot`]), each compiled
//! once on first use and reused for every render afterwards.

use super::error::{LoggerError, Result};
use std::sync::LazyLock;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Action(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Template {
    pub fn parse(source: &str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = source;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                segments.push(Segment::Literal(rest[..open].to_string()));
            }
            let after = &rest[open + 2..];
            let close = after
                .find("}}")
                .ok_or_else(|| LoggerError::template(source, "unterminated action"))?;
            let action = after[..close].trim();
            let key = action
                .strip_prefix('.')
                .filter(|k| !k.is_empty() && k.chars().all(|c| c.is_alphanumeric() || c == '_'))
                .ok_or_else(|| {
                    LoggerError::template(source, format!("unsupported action {:?}", action))
                })?;
            segments.push(Segment::Action(key.to_string()));
            rest = &after[close + 2..];
        }
        if !rest.is_empty() {
            segments.push(Segment::Literal(rest.to_string()));
        }

        Ok(Self {
            source: source.to_string(),
            segments,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Append the template to `out`, substituting `value` for every `{{.key}}`.
    pub fn render_to(&self, out: &mut String, key: &str, value: &str) -> Result<()> {
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Action(k) if k == key => out.push_str(value),
                Segment::Action(k) => {
                    return Err(LoggerError::template(
                        &self.source,
                        format!("no value for key {:?}", k),
                    ))
                }
            }
        }
        Ok(())
    }

    pub fn render(&self, key: &str, value: &str) -> Result<String> {
        let mut out = String::with_capacity(self.source.len() + value.len());
        self.render_to(&mut out, key, value)?;
        Ok(out)
    }
}

/// The decorated segments of a text record, in output order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Level = 0,
    Name = 1,
    Time = 2,
}

static SLOT_TEMPLATES: LazyLock<[Template; 3]> = LazyLock::new(|| {
    [Slot::Level, Slot::Name, Slot::Time].map(|slot| {
        Template::parse(slot.source()).expect("built-in segment templates are well-formed")
    })
});

impl Slot {
    pub const fn key(self) -> &'static str {
        match self {
            Slot::Level => "Lvl",
            Slot::Name => "Name",
            Slot::Time => "Time",
        }
    }

    pub const fn source(self) -> &'static str {
        match self {
            Slot::Level => "{{.Lvl}} ",
            Slot::Name => "{{.Name}} ",
            Slot::Time => "{{.Time}} ",
        }
    }

    pub fn template(self) -> &'static Template {
        &SLOT_TEMPLATES[self as usize]
    }

    pub fn render(self, value: &str) -> Result<String> {
        self.template().render(self.key(), value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slots_append_single_space() {
        assert_eq!(Slot::Level.render("INFO").unwrap(), "INFO ");
        assert_eq!(Slot::Name.render("TEST").unwrap(), "TEST ");
        assert_eq!(
            Slot::Time.render("Jan  2 15:04:05.000000000").unwrap(),
            "Jan  2 15:04:05.000000000 "
        );
    }

    #[test]
    fn test_slot_templates_are_shared() {
        assert!(std::ptr::eq(Slot::Name.template(), Slot::Name.template()));
        assert_eq!(Slot::Time.template().source(), "{{.Time}} ");
    }

    #[test]
    fn test_parse_literals_and_actions() {
        let tmpl = Template::parse("[{{ .Who }}] said {{.Who}}").unwrap();
        assert_eq!(tmpl.render("Who", "ann").unwrap(), "[ann] said ann");
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(Template::parse("{{.Lvl"), Err(LoggerError::Template { .. })));
        assert!(Template::parse("{{Lvl}}").is_err());
        assert!(Template::parse("{{.}}").is_err());
    }

    #[test]
    fn test_render_with_wrong_key_fails() {
        let tmpl = Template::parse("{{.Lvl}} ").unwrap();
        assert!(tmpl.render("Name", "x").is_err());
    }
}
