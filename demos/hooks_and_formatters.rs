//! Hooks and custom formatters example
//!
//! Demonstrates PRE/POST hooks, a custom formatter, the JSON formatter and
//! the panic hook.
//!
//! Run with: cargo run --example hooks_and_formatters

use leveled_log::prelude::*;
use leveled_log::{at, atf};
use std::panic::{self, AssertUnwindSafe};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Renders `[level] message`
struct Bracketed;

impl Formatter for Bracketed {
    fn format(&self, entry: &Entry<'_>) -> Result<Vec<u8>> {
        Ok(format!("[{}] {}\n", entry.entry_level(), entry.message()).into_bytes())
    }
}

fn main() -> Result<()> {
    println!("=== Leveled Log - Hooks and Formatters Example ===\n");

    let logger = Logger::builder()
        .sink(std::io::stdout())
        .level(Level::Debug)
        .tag("hooks")
        .formatter("bracketed", Bracketed)
        .formatter("json", JsonFormatter::new("hooks"))
        .active("bracketed")
        .build();

    println!("Installed formatters: {:?}\n", logger.formatter_names());

    println!("1. Hooks fire for their exact timing and level:");
    let errors = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&errors);
    logger.add_hook(
        Timing::Post,
        Level::Error,
        hook_fn(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }),
    );
    logger.add_hook(
        Timing::Pre,
        Level::Warn,
        hook_fn(|entry| {
            println!("   (pre-warn hook saw {} fields)", entry.fields().len());
            Ok(())
        }),
    );

    logger.warn(["low disk"]);
    logger.error(["write failed"]);
    logger.errorf("retry %d failed", [2]);
    logger.info(["not counted"]);
    println!("   error hook fired {} times", errors.load(Ordering::SeqCst));

    println!("\n2. JSON lines:");
    logger.swap_formatter("json");
    atf!(logger, Level::Info, "%s signed in", "alice");
    at!(logger, Level::Debug, "cache ", "warm");

    println!("\n3. Writing to an alternate sink:");
    let mut buffer = Vec::new();
    logger.swap_formatter("bracketed");
    logger.at_tof(Level::Warn, &mut buffer, "%d%% sampled", [10]);
    print!("   buffered: {}", String::from_utf8_lossy(&buffer));

    println!("\n4. Panic records are written before unwinding:");
    let result = panic::catch_unwind(AssertUnwindSafe(|| logger.panic(["unrecoverable"])));
    println!("   caught panic: {}", result.is_err());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
