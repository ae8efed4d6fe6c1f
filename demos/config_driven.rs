//! Config-driven setup example
//!
//! Demonstrates wiring named loggers from a TOML document and addressing
//! them through the process-wide context.
//!
//! Run with: cargo run --example config_driven

use fanlog::prelude::*;
use fanlog::{error, info, warn};
use std::thread;
use std::time::Duration;

const CONFIG: &str = r#"
[[logger]]
name = "default"
level = "debug"
writer = "console"

[[logger]]
name = "access"
level = "info"
writer = "stdout"

[[logger]]
name = "access"
level = "error"
writer = "file:access"
"#;

fn main() -> Result<()> {
    println!("=== Fanlog - Config Driven Example ===\n");

    println!("1. Applying the configuration:");
    fanlog::init_from_str(CONFIG);

    println!("\n2. Writing through named loggers:");
    let access = fanlog::lookup("access");
    info!(access, "GET /health 200");
    warn!(access, "GET /admin 403");
    error!(access, "GET /orders 500");

    println!("\n3. Unregistered names fall back to the default logger:");
    let metrics = fanlog::lookup("metrics");
    info!(metrics, "counter flushed");

    println!("\n4. Quieting one writer by position:");
    fanlog::set_level("access", WriterSelect::At(0), "error")?;
    info!(access, "No longer reaches the stream writer");
    error!(access, "Errors still fan out everywhere");

    // The global context is never dropped, so give its flusher one tick
    // to drain the buffered writers before the process exits
    thread::sleep(Duration::from_millis(1100));

    println!("\n=== Example completed successfully! ===");
    println!("Check the logs directory for the access file output");
    Ok(())
}
