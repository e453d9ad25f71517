//! ANSI color attribution for terminal output
//!
//! A [`Color`] is a `colored` foreground color plus optional extra styles.
//! Writing through a color wraps the content in its escape sequence unless
//! color output is disabled for the whole process (see [`no_color`]).

use colored::Colorize;
use std::borrow::Cow;
use std::fmt::Display;
use std::io::{self, IsTerminal, Write};
use std::sync::OnceLock;

pub use colored::Styles;

static NO_COLOR: OnceLock<bool> = OnceLock::new();

/// Fix the process-wide color switch before anything has been rendered.
///
/// Returns `false` if the switch was already decided, either by an earlier
/// call or because colored output has already been produced.
pub fn init_no_color(disabled: bool) -> bool {
    let mut decided_here = false;
    NO_COLOR.get_or_init(|| {
        decided_here = true;
        apply(disabled)
    });
    decided_here
}

/// Whether colored output is disabled for this process.
///
/// Decided once: color is off when stdout is not a terminal or when
/// `NO_COLOR` is set to a non-empty value.
pub fn no_color() -> bool {
    *NO_COLOR.get_or_init(|| apply(detect_no_color()))
}

fn detect_no_color() -> bool {
    let env_disabled = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
    env_disabled || !io::stdout().is_terminal()
}

/// `colored` follows the same decision from here on.
fn apply(disabled: bool) -> bool {
    colored::control::set_override(!disabled);
    disabled
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Color {
    fg: colored::Color,
    styles: Cow<'static, [Styles]>,
}

impl Color {
    /// A plain foreground color, usable in statics
    pub const fn fixed(fg: colored::Color) -> Self {
        Self {
            fg,
            styles: Cow::Borrowed(&[]),
        }
    }

    #[must_use]
    pub fn add(mut self, styles: &[Styles]) -> Self {
        self.styles.to_mut().extend_from_slice(styles);
        self
    }

    pub fn fg(&self) -> colored::Color {
        self.fg
    }

    pub fn styles(&self) -> &[Styles] {
        &self.styles
    }

    /// Write `content` wrapped in this color, honoring the process switch.
    pub fn fprint<W: Write + ?Sized>(&self, w: &mut W, content: impl Display) -> io::Result<()> {
        self.write_with(w, content, !no_color())
    }

    fn colorize(&self, content: impl Display) -> colored::ColoredString {
        self.styles
            .iter()
            .fold(content.to_string().color(self.fg), |s, style| match style {
                Styles::Clear => s.clear(),
                Styles::Bold => s.bold(),
                Styles::Dimmed => s.dimmed(),
                Styles::Underline => s.underline(),
                Styles::Reversed => s.reversed(),
                Styles::Italic => s.italic(),
                Styles::Blink => s.blink(),
                Styles::Hidden => s.hidden(),
                Styles::Strikethrough => s.strikethrough(),
            })
    }

    /// Write `content`, colored when `enabled` and the process switch allows.
    pub(crate) fn write_with<W: Write + ?Sized>(
        &self,
        w: &mut W,
        content: impl Display,
        enabled: bool,
    ) -> io::Result<()> {
        if !enabled {
            return write!(w, "{}", content);
        }
        write!(w, "{}", self.colorize(content))
    }
}

pub static BLACK: Color = Color::fixed(colored::Color::BrightBlack);
pub static RED: Color = Color::fixed(colored::Color::BrightRed);
pub static GREEN: Color = Color::fixed(colored::Color::BrightGreen);
pub static YELLOW: Color = Color::fixed(colored::Color::BrightYellow);
pub static BLUE: Color = Color::fixed(colored::Color::BrightBlue);
pub static MAGENTA: Color = Color::fixed(colored::Color::BrightMagenta);
pub static CYAN: Color = Color::fixed(colored::Color::BrightCyan);
pub static WHITE: Color = Color::fixed(colored::Color::BrightWhite);

#[cfg(test)]
pub(crate) fn enable_for_tests() {
    init_no_color(false);
    assert!(!no_color(), "color switch was already decided as disabled");
}
