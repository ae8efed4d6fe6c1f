//! Basic logger usage example
//!
//! Demonstrates fan-out logging with per-writer thresholds and the logging
//! macros.
//!
//! Run with: cargo run --example basic_usage

use fanlog::prelude::*;
use fanlog::{debug, error, info, warn};

fn main() -> Result<()> {
    println!("=== Fanlog - Basic Usage Example ===\n");

    // A private context; dropping it at the end flushes every device
    let context = LoggingContext::new();
    let logger = context.default_logger();

    println!("1. Logging at different levels:");
    debug!(logger, "This is a debug message");
    info!(logger, "This is an info message");
    warn!(logger, "This is a warning message");
    error!(logger, "This is an error message");

    println!("\n2. A second writer with its own threshold:");
    logger.push_writer(Writer::new(Severity::Error, Device::stream()));
    info!(logger, "Only the console writer sees this");
    error!(logger, "Both writers see this");

    println!("\n3. Retargeting thresholds at runtime:");
    context.set_level("default", WriterSelect::All, "warn")?;
    debug!(logger, "Hidden now");
    warn!(logger, "Warnings still show");

    println!("\n4. The process-wide default logger:");
    info!("No logger argument means the global default");

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
