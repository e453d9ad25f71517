//! Hooks fired before rendering and after writing a record
//!
//! Hooks are registered per exact `(Timing, Level)` pair and fire in
//! registration order. The first hook that returns an error stops the rest of
//! that firing; the record itself is still rendered and written.
//!
//! Every registry starts with two control-flow hooks: `Post`/`Fatal` exits
//! the process with status 1 and `Post`/`Panic` panics with `"panic hook"`.
//! Both only ever run after the record has reached the sink.

use super::entry::Entry;
use super::error::Result;
use super::level::Level;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Timing {
    /// Before the record is rendered
    Pre,
    /// After the rendered record was written
    Post,
}

impl fmt::Display for Timing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timing::Pre => f.write_str("pre"),
            Timing::Post => f.write_str("post"),
        }
    }
}

/// A side effect attached to records of one timing and level.
///
/// Hooks run on the logging thread without any lock held; implementations
/// that touch shared state synchronize it themselves.
pub trait Hook: Send + Sync {
    fn fire(&self, entry: &Entry<'_>) -> Result<()>;

    fn name(&self) -> &str {
        "hook"
    }
}

impl<F> Hook for F
where
    F: Fn(&Entry<'_>) -> Result<()> + Send + Sync,
{
    fn fire(&self, entry: &Entry<'_>) -> Result<()> {
        self(entry)
    }
}

/// Pin a closure to the hook signature so its argument type is inferred.
///
/// ```
/// use leveled_log::{hook_fn, Level, Logger, Timing};
///
/// let logger = Logger::new(std::io::sink(), Level::Debug, "app");
/// logger.add_hook(Timing::Pre, Level::Error, hook_fn(|entry| {
///     assert_eq!(entry.entry_level(), Level::Error);
///     Ok(())
/// }));
/// ```
pub fn hook_fn<F>(f: F) -> F
where
    F: Fn(&Entry<'_>) -> Result<()> + Send + Sync,
{
    f
}

/// Terminates the process with status 1
#[derive(Debug, Clone, Copy, Default)]
pub struct ExitHook;

impl Hook for ExitHook {
    fn fire(&self, entry: &Entry<'_>) -> Result<()> {
        if let Err(e) = entry.logger().flush() {
            eprintln!("[LOGGER ERROR] Failed to flush before exit: {}", e);
        }
        std::process::exit(1)
    }

    fn name(&self) -> &str {
        "exit"
    }
}

/// Raises an unrecoverable panic carrying `"panic hook"`
#[derive(Debug, Clone, Copy, Default)]
pub struct PanicHook;

impl Hook for PanicHook {
    fn fire(&self, _entry: &Entry<'_>) -> Result<()> {
        panic!("panic hook")
    }

    fn name(&self) -> &str {
        "panic"
    }
}

/// Append-only registry of hooks keyed by timing then level
#[derive(Clone)]
pub struct Hooks {
    table: HashMap<Timing, HashMap<Level, Vec<Arc<dyn Hook>>>>,
}

impl Hooks {
    /// A registry holding the built-in exit and panic hooks
    pub fn new() -> Self {
        let mut hooks = Self::empty();
        hooks.add(Timing::Post, Level::Fatal, Arc::new(ExitHook));
        hooks.add(Timing::Post, Level::Panic, Arc::new(PanicHook));
        hooks
    }

    /// A registry without the built-in hooks
    pub fn empty() -> Self {
        let mut table = HashMap::with_capacity(2);
        table.insert(Timing::Pre, HashMap::new());
        table.insert(Timing::Post, HashMap::new());
        Self { table }
    }

    pub fn add(&mut self, timing: Timing, level: Level, hook: Arc<dyn Hook>) {
        self.extend(timing, level, [hook]);
    }

    pub fn extend(
        &mut self,
        timing: Timing,
        level: Level,
        hooks: impl IntoIterator<Item = Arc<dyn Hook>>,
    ) {
        self.table
            .entry(timing)
            .or_default()
            .entry(level)
            .or_default()
            .extend(hooks);
    }

    pub fn count(&self, timing: Timing, level: Level) -> usize {
        self.table
            .get(&timing)
            .and_then(|by_level| by_level.get(&level))
            .map_or(0, Vec::len)
    }

    /// Fire the hooks registered for exactly this pair, in registration
    /// order, stopping at the first error. An unregistered pair is a no-op.
    pub fn fire(&self, timing: Timing, level: Level, entry: &Entry<'_>) -> Result<()> {
        let Some(list) = self.table.get(&timing).and_then(|by_level| by_level.get(&level)) else {
            return Ok(());
        };
        for hook in list {
            hook.fire(entry)?;
        }
        Ok(())
    }
}

impl Default for Hooks {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for (timing, by_level) in &self.table {
            for (level, list) in by_level {
                let names: Vec<&str> = list.iter().map(|h| h.name()).collect();
                map.entry(&(timing, level), &names);
            }
        }
        map.finish()
    }
}
