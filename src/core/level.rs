//! Log level definitions

use super::color::{self, Color};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Severity of a record.
///
/// Ordered from most to least severe; a logger whose level is `Info` lets
/// through every call whose gate is `Info` or below (`Warn`, `Error`, ...).
/// `Unrecognized` sorts first and is what unknown names parse to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[repr(u8)]
pub enum Level {
    #[default]
    Unrecognized = 0,
    Panic = 1,
    Fatal = 2,
    Error = 3,
    Warn = 4,
    Info = 5,
    Debug = 6,
}

impl Level {
    /// Every recognized level, most severe first
    pub const ALL: [Level; 6] = [
        Level::Panic,
        Level::Fatal,
        Level::Error,
        Level::Warn,
        Level::Info,
        Level::Debug,
    ];

    /// Case-insensitive lookup; unknown names map to `Unrecognized`.
    pub fn parse(name: &str) -> Level {
        match name.to_lowercase().as_str() {
            "panic" => Level::Panic,
            "fatal" => Level::Fatal,
            "error" => Level::Error,
            "warn" => Level::Warn,
            "info" => Level::Info,
            "debug" => Level::Debug,
            _ => Level::Unrecognized,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Level::Panic => "panic",
            Level::Fatal => "fatal",
            Level::Error => "error",
            Level::Warn => "warn",
            Level::Info => "info",
            Level::Debug => "debug",
            Level::Unrecognized => "unrecognized",
        }
    }

    pub fn color(self) -> &'static Color {
        match self {
            Level::Panic => &color::RED,
            Level::Fatal => &color::MAGENTA,
            Level::Error => &color::CYAN,
            Level::Warn => &color::YELLOW,
            Level::Info => &color::GREEN,
            Level::Debug => &color::BLUE,
            Level::Unrecognized => &color::WHITE,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Level {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Level::parse(s))
    }
}

impl From<&str> for Level {
    fn from(s: &str) -> Self {
        Level::parse(s)
    }
}

impl Serialize for Level {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for Level {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Level::parse(&name))
    }
}
