//! # Fanlog
//!
//! A leveled, fan-out logging facility: each named logger formats a record
//! once and hands it to any number of writers, each pairing a severity
//! threshold with an output device.
//!
//! ## Features
//!
//! - **Leveled Fan-Out**: One logger, many writers, each with its own threshold
//! - **Rotating Files**: Daily or hourly log files named after their time bucket
//! - **Queue Publishing**: Ship records to an NSQ topic over TCP
//! - **Config Driven**: TOML documents wire loggers to devices at startup
//! - **Thread Safe**: Designed for concurrent environments

pub mod config;
pub mod core;
pub mod devices;
pub mod macros;

use std::path::Path;
use std::process;
use std::sync::{Arc, OnceLock};

pub mod prelude {
    pub use crate::config::{Config, LoggerDef};
    pub use crate::core::{
        BufferPool, ClockCache, Formatter, LogError, Logger, LoggingContext, Result, Severity,
        Writer, WriterSelect,
    };
    pub use crate::devices::{
        ConsoleDevice, Device, FileDevice, NsqPublisher, Publish, QueueDescriptor, QueueDevice,
        Rotation, StreamDevice,
    };
}

pub use config::{Config, LoggerDef};
pub use core::{
    BufferPool, ClockCache, Formatter, LogError, Logger, LoggingContext, Result, Severity, Writer,
    WriterSelect,
};
pub use devices::{
    ConsoleDevice, Device, FileDevice, NsqPublisher, Publish, QueueDescriptor, QueueDevice,
    Rotation, StreamDevice,
};

static GLOBAL: OnceLock<LoggingContext> = OnceLock::new();

fn global() -> &'static LoggingContext {
    GLOBAL.get_or_init(LoggingContext::new)
}

/// The process-wide default logger.
pub fn default_logger() -> Arc<Logger> {
    global().default_logger()
}

/// Look up a logger by name, falling back to the default logger when no
/// logger with that name is registered.
pub fn lookup(name: &str) -> Arc<Logger> {
    global().lookup(name)
}

/// Apply logger definitions to the process-wide context.
pub fn init(entries: &[LoggerDef]) {
    global().init(entries);
}

/// Configure the process-wide context from a TOML document. Exits the
/// process when the document does not decode.
pub fn init_from_str(text: &str) {
    if let Err(err) = global().init_from_str(text) {
        eprintln!("[LOGGER ERROR] {}", err);
        process::exit(1);
    }
}

/// Configure the process-wide context from a TOML file. Exits the process
/// when the file cannot be read or does not decode.
pub fn init_from_file(path: impl AsRef<Path>) {
    if let Err(err) = global().init_from_file(path) {
        eprintln!("[LOGGER ERROR] {}", err);
        process::exit(1);
    }
}

/// Retarget the threshold of one writer, or of every writer, on a named
/// logger in the process-wide context.
pub fn set_level(name: &str, select: WriterSelect, level: &str) -> Result<()> {
    global().set_level(name, select, level)
}
