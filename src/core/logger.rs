//! Main logger implementation

use super::{
    entry::Entry,
    error::Result,
    field::{self, Field, FieldValue},
    formatter::{Formatter, NullFormatter, RawFormatter},
    hooks::{Hook, Hooks, Timing},
    level::Level,
    timestamp::TimestampFormat,
};
use crate::formatters::TextFormatter;
use parking_lot::{Mutex, MutexGuard, RwLock};
use std::collections::HashMap;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Name of the formatter a new logger starts with
pub const DEFAULT_FORMATTER: &str = "null";

pub type Formatters = HashMap<String, Arc<dyn Formatter>>;

/// The pre-registered `null`, `raw` and `text` formatters
pub fn default_formatters(tag: &str, timestamp_format: TimestampFormat) -> Formatters {
    let mut formatters: Formatters = HashMap::with_capacity(3);
    formatters.insert("null".to_string(), Arc::new(NullFormatter));
    formatters.insert("raw".to_string(), Arc::new(RawFormatter));
    formatters.insert(
        "text".to_string(),
        Arc::new(TextFormatter::new(tag).with_timestamp_format(timestamp_format)),
    );
    formatters
}

/// State behind the logger's single lock
struct Shared {
    sink: Box<dyn Write + Send>,
    active: Arc<dyn Formatter>,
}

/// A leveled logger writing rendered records to one sink.
///
/// The logger's mutex guards both the active formatter and the sink, so a
/// formatter swap is seen by every record created afterwards on any thread,
/// and records never interleave inside the sink. Building entries and firing
/// hooks take no lock.
pub struct Logger {
    level: RwLock<Level>,
    formatters: RwLock<Formatters>,
    hooks: RwLock<Arc<Hooks>>,
    shared: Mutex<Shared>,
}

/// Exclusive access to a logger's sink
///
/// Holding the guard holds the logger's lock: records from other threads
/// wait until it is dropped.
pub struct SinkGuard<'a> {
    guard: MutexGuard<'a, Shared>,
}

impl Write for SinkGuard<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.guard.sink.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.guard.sink.flush()
    }
}

impl Logger {
    /// A logger over `sink` gated at `level`, whose text formatter is tagged
    /// with `tag`. Output stays silent until a formatter other than `null`
    /// is swapped in.
    #[must_use]
    pub fn new<W>(sink: W, level: Level, tag: &str) -> Self
    where
        W: Write + Send + 'static,
    {
        Self::from_parts(
            Box::new(sink),
            level,
            default_formatters(tag, TimestampFormat::default()),
            Hooks::new(),
        )
    }

    fn from_parts(
        sink: Box<dyn Write + Send>,
        level: Level,
        formatters: Formatters,
        hooks: Hooks,
    ) -> Self {
        let logger = Self {
            level: RwLock::new(level),
            formatters: RwLock::new(formatters),
            hooks: RwLock::new(Arc::new(hooks)),
            shared: Mutex::new(Shared {
                sink,
                active: Arc::new(NullFormatter),
            }),
        };
        logger.swap_formatter(DEFAULT_FORMATTER);
        logger
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use leveled_log::prelude::*;
    ///
    /// let sink = MemorySink::new();
    /// let logger = Logger::builder()
    ///     .sink(sink.clone())
    ///     .level(Level::Debug)
    ///     .tag("api")
    ///     .active("raw")
    ///     .build();
    ///
    /// logger.info(["ready"]);
    /// assert_eq!(sink.contents_string(), "ready\n");
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    pub fn level(&self) -> Level {
        *self.level.read()
    }

    pub fn set_level(&self, level: Level) {
        *self.level.write() = level;
    }

    /// Whether a call gated at `gate` passes this logger's level
    #[inline]
    pub fn enabled(&self, gate: Level) -> bool {
        self.level() >= gate
    }

    /// Take the logger's lock for direct writes to its sink.
    pub fn lock(&self) -> SinkGuard<'_> {
        SinkGuard {
            guard: self.shared.lock(),
        }
    }

    pub fn flush(&self) -> Result<()> {
        self.lock().flush()?;
        Ok(())
    }

    // ------------------------------------------------------------------
    // Formatters
    // ------------------------------------------------------------------

    /// Install `formatter` under `name`, replacing any previous one.
    ///
    /// Replacing the active formatter's name does not change what is
    /// active until the name is swapped in again.
    pub fn set_formatter<F>(&self, name: impl Into<String>, formatter: F)
    where
        F: Formatter + 'static,
    {
        self.set_shared_formatter(name, Arc::new(formatter));
    }

    pub fn set_shared_formatter(&self, name: impl Into<String>, formatter: Arc<dyn Formatter>) {
        self.formatters.write().insert(name.into(), formatter);
    }

    /// The formatter installed under `name`, or a null formatter.
    pub fn get_formatter(&self, name: &str) -> Arc<dyn Formatter> {
        match self.formatters.read().get(name) {
            Some(f) => Arc::clone(f),
            None => Arc::new(NullFormatter),
        }
    }

    /// Make the formatter named `name` the active one (null if absent).
    pub fn swap_formatter(&self, name: &str) {
        let formatter = self.get_formatter(name);
        self.shared.lock().active = formatter;
    }

    /// Installed formatter names, sorted
    pub fn formatter_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.formatters.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Render `entry` with the active formatter.
    ///
    /// The active formatter is read under the lock; rendering itself runs
    /// after the lock is released.
    pub fn format(&self, entry: &Entry<'_>) -> Result<Vec<u8>> {
        let active = Arc::clone(&self.shared.lock().active);
        active.format(entry)
    }

    // ------------------------------------------------------------------
    // Hooks
    // ------------------------------------------------------------------

    pub fn add_hook<H>(&self, timing: Timing, level: Level, hook: H)
    where
        H: Hook + 'static,
    {
        Arc::make_mut(&mut *self.hooks.write()).add(timing, level, Arc::new(hook));
    }

    pub fn add_hooks(
        &self,
        timing: Timing,
        level: Level,
        hooks: impl IntoIterator<Item = Arc<dyn Hook>>,
    ) {
        Arc::make_mut(&mut *self.hooks.write()).extend(timing, level, hooks);
    }

    /// Fire the hooks registered for `(timing, level)` against `entry`.
    ///
    /// Fires against a snapshot of the registry taken without holding the
    /// lock, so hooks may register further hooks. Registration copies the
    /// registry while a snapshot is alive.
    pub fn fire(&self, timing: Timing, level: Level, entry: &Entry<'_>) -> Result<()> {
        let snapshot = Arc::clone(&self.hooks.read());
        snapshot.fire(timing, level, entry)
    }

    // ------------------------------------------------------------------
    // Records
    // ------------------------------------------------------------------

    pub fn entry(&self, level: Level, fields: Vec<Field>) -> Entry<'_> {
        Entry::new(self, level, fields)
    }

    /// Run `entry` through its logger's pipeline, regardless of level.
    pub fn log(&self, entry: &Entry<'_>) {
        dispatch(entry);
    }

    fn emit(&self, gate: Level, level: Level, build: impl FnOnce() -> Vec<Field>) {
        if self.enabled(gate) {
            dispatch(&self.entry(level, build()));
        }
    }

    /// Log at `Fatal`, then exit the process with status 1.
    pub fn fatal(&self, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Fatal, Level::Fatal, || field::build_fields(0, values));
    }

    pub fn fatalf(&self, format: &str, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Fatal, Level::Fatal, || {
            field::build_format_fields(format, values)
        });
    }

    pub fn fatalln(&self, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.fatal(values);
    }

    /// Log at `Panic`, then panic with `"panic hook"`.
    pub fn panic(&self, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Panic, Level::Panic, || field::build_fields(0, values));
    }

    pub fn panicf(&self, format: &str, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Panic, Level::Panic, || {
            field::build_format_fields(format, values)
        });
    }

    pub fn panicln(&self, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.panic(values);
    }

    /// Log at `Info` when the logger's level is `Error` or more verbose.
    ///
    /// The gate is deliberately stricter than the emitted level: a logger at
    /// `Warn` prints, a logger at `Fatal` does not.
    pub fn print(&self, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Error, Level::Info, || field::build_fields(0, values));
    }

    pub fn printf(&self, format: &str, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Error, Level::Info, || {
            field::build_format_fields(format, values)
        });
    }

    pub fn println(&self, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.print(values);
    }

    #[inline]
    pub fn error(&self, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Error, Level::Error, || field::build_fields(0, values));
    }

    #[inline]
    pub fn errorf(&self, format: &str, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Error, Level::Error, || {
            field::build_format_fields(format, values)
        });
    }

    #[inline]
    pub fn warn(&self, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Warn, Level::Warn, || field::build_fields(0, values));
    }

    #[inline]
    pub fn warnf(&self, format: &str, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Warn, Level::Warn, || {
            field::build_format_fields(format, values)
        });
    }

    #[inline]
    pub fn info(&self, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Info, Level::Info, || field::build_fields(0, values));
    }

    #[inline]
    pub fn infof(&self, format: &str, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Info, Level::Info, || {
            field::build_format_fields(format, values)
        });
    }

    #[inline]
    pub fn debug(&self, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Debug, Level::Debug, || field::build_fields(0, values));
    }

    #[inline]
    pub fn debugf(&self, format: &str, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        self.emit(Level::Debug, Level::Debug, || {
            field::build_format_fields(format, values)
        });
    }

    /// Log at `level` whatever the logger's own level is.
    pub fn at(&self, level: Level, values: impl IntoIterator<Item = impl Into<FieldValue>>) {
        dispatch(&self.entry(level, field::build_fields(0, values)));
    }

    pub fn atf(
        &self,
        level: Level,
        format: &str,
        values: impl IntoIterator<Item = impl Into<FieldValue>>,
    ) {
        dispatch(&self.entry(level, field::build_format_fields(format, values)));
    }

    /// Like [`Logger::at`], but writes to `to` instead of the logger's sink.
    ///
    /// The write does not take the logger's lock; callers sharing `to`
    /// between threads synchronize it themselves.
    pub fn at_to<W>(
        &self,
        level: Level,
        to: &mut W,
        values: impl IntoIterator<Item = impl Into<FieldValue>>,
    ) where
        W: Write + ?Sized,
    {
        dispatch_to(&self.entry(level, field::build_fields(0, values)), to);
    }

    pub fn at_tof<W>(
        &self,
        level: Level,
        to: &mut W,
        format: &str,
        values: impl IntoIterator<Item = impl Into<FieldValue>>,
    ) where
        W: Write + ?Sized,
    {
        dispatch_to(&self.entry(level, field::build_format_fields(format, values)), to);
    }
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("level", &self.level())
            .field("formatters", &self.formatter_names())
            .field("hooks", &**self.hooks.read())
            .finish_non_exhaustive()
    }
}

// ----------------------------------------------------------------------
// Record pipeline
// ----------------------------------------------------------------------

/// PRE hooks, render, write under the lock, POST hooks.
///
/// Failures short of the built-in exit/panic hooks are reported on stderr
/// and never reach the caller. POST hooks only run once the write returned.
fn dispatch(entry: &Entry<'_>) {
    let logger = entry.logger();
    let level = entry.entry_level();

    fire(logger, Timing::Pre, level, entry);
    if let Some(rendered) = render(entry) {
        let mut sink = logger.lock();
        copy(&mut sink, &rendered, "write entry");
    }
    fire(logger, Timing::Post, level, entry);
}

fn dispatch_to<W: Write + ?Sized>(entry: &Entry<'_>, to: &mut W) {
    let logger = entry.logger();
    let level = entry.entry_level();

    fire(logger, Timing::Pre, level, entry);
    if let Some(rendered) = render(entry) {
        copy(to, &rendered, "write entry to alternate sink");
    }
    fire(logger, Timing::Post, level, entry);
}

fn render(entry: &Entry<'_>) -> Option<Vec<u8>> {
    match entry.render() {
        Ok(rendered) => Some(rendered),
        Err(e) => {
            eprintln!("[LOGGER ERROR] Failed to render entry: {}", e);
            None
        }
    }
}

fn copy<W: Write + ?Sized>(to: &mut W, rendered: &[u8], what: &str) {
    if rendered.is_empty() {
        return;
    }
    if let Err(e) = to.write_all(rendered) {
        eprintln!("[LOGGER ERROR] Failed to {}: {}", what, e);
    }
}

fn fire(logger: &Logger, timing: Timing, level: Level, entry: &Entry<'_>) {
    if let Err(e) = logger.fire(timing, level, entry) {
        eprintln!("[LOGGER ERROR] Failed to fire {} hook at {}: {}", timing, level, e);
    }
}

// ----------------------------------------------------------------------
// Builder
// ----------------------------------------------------------------------

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```
/// use leveled_log::prelude::*;
///
/// let logger = Logger::builder()
///     .sink(std::io::stderr())
///     .level(Level::Warn)
///     .tag("worker")
///     .timestamp_format(TimestampFormat::Rfc3339)
///     .active("text")
///     .build();
/// assert_eq!(logger.level(), Level::Warn);
/// ```
pub struct LoggerBuilder {
    sink: Option<Box<dyn Write + Send>>,
    level: Level,
    tag: String,
    timestamp_format: TimestampFormat,
    formatters: Vec<(String, Arc<dyn Formatter>)>,
    active: String,
    hooks: Vec<(Timing, Level, Arc<dyn Hook>)>,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            sink: None,
            level: Level::Info,
            tag: String::new(),
            timestamp_format: TimestampFormat::default(),
            formatters: Vec::new(),
            active: DEFAULT_FORMATTER.to_string(),
            hooks: Vec::new(),
        }
    }

    /// Set the output sink (stdout when unset)
    #[must_use = "builder methods return a new value"]
    pub fn sink<W: Write + Send + 'static>(mut self, sink: W) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Set minimum log level
    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Tag shown by the text formatter
    #[must_use = "builder methods return a new value"]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    /// Timestamp layout of the pre-registered text formatter
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Install an extra named formatter (or replace a default one)
    #[must_use = "builder methods return a new value"]
    pub fn formatter<F: Formatter + 'static>(mut self, name: impl Into<String>, formatter: F) -> Self {
        self.formatters.push((name.into(), Arc::new(formatter)));
        self
    }

    /// Formatter active once built
    #[must_use = "builder methods return a new value"]
    pub fn active(mut self, name: impl Into<String>) -> Self {
        self.active = name.into();
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn hook<H: Hook + 'static>(mut self, timing: Timing, level: Level, hook: H) -> Self {
        self.hooks.push((timing, level, Arc::new(hook)));
        self
    }

    /// Build the Logger
    pub fn build(self) -> Logger {
        let sink = self
            .sink
            .unwrap_or_else(|| Box::new(io::stdout()) as Box<dyn Write + Send>);

        let mut formatters = default_formatters(&self.tag, self.timestamp_format);
        formatters.extend(self.formatters);

        let mut hooks = Hooks::new();
        for (timing, level, hook) in self.hooks {
            hooks.add(timing, level, hook);
        }

        let logger = Logger::from_parts(sink, self.level, formatters, hooks);
        logger.swap_formatter(&self.active);
        logger
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
