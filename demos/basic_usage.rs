//! Basic logger usage example
//!
//! Demonstrates level gating, the built-in formatters and logging to a file.
//!
//! Run with: cargo run --example basic_usage

use leveled_log::prelude::*;

fn main() -> Result<()> {
    println!("=== Leveled Log - Basic Usage Example ===\n");

    // A new logger is silent until a formatter is swapped in
    let logger = Logger::new(std::io::stdout(), Level::Debug, "demo");
    logger.info(["This is swallowed by the null formatter"]);
    logger.swap_formatter("text");

    println!("1. Logging at different levels:");
    logger.debug(["This is a debug message"]);
    logger.info(["This is an info message"]);
    logger.warn(["This is a warning message"]);
    logger.error(["This is an error message"]);

    println!("\n2. Format templates:");
    logger.infof("%s listening on port %d", [FieldValue::from("api"), 8080.into()]);
    logger.warnf("disk %.1f%% full", [93.25]);
    logger.errorf("%d of %d retries", [3]);

    println!("\n3. Minimum level set to WARN - debug and info won't show:");
    logger.set_level(Level::Warn);
    logger.debug(["Debug message (hidden)"]);
    logger.info(["Info message (hidden)"]);
    logger.warn(["Warning message (visible)"]);
    logger.print(["Print passes an Error gate and logs at INFO"]);

    println!("\n4. At bypasses the minimum level:");
    logger.at(Level::Debug, ["Debug via at (visible)"]);

    println!("\n5. Raw formatter:");
    logger.swap_formatter("raw");
    logger.at(Level::Info, ["no ", "decoration ", "at ", "all"]);

    println!("\n6. Logging to a file:");
    let path = std::env::temp_dir().join("leveled_log_demo.log");
    let file_logger = Logger::builder()
        .sink(FileSink::new(&path)?)
        .level(Level::Info)
        .tag("file-demo")
        .timestamp_format(TimestampFormat::Rfc3339)
        .active("text")
        .build();
    for i in 1..=3 {
        file_logger.infof("Processing item %d/3", [i]);
    }
    file_logger.flush()?;
    println!("   wrote {}", path.display());

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
