//! TOML configuration for logger setup
//!
//! A document holds any number of `[[logger]]` tables, each describing one
//! writer to attach:
//!
//! ```toml
//! [[logger]]
//! name = "default"
//! level = "info"
//! writer = "console"
//!
//! [[logger]]
//! name = "access"
//! level = "warn"
//! writer = "file:access"
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::core::error::Result;

/// One writer definition: which logger it belongs to, the minimum level it
/// accepts, and the device descriptor it writes to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct LoggerDef {
    pub name: String,
    pub level: String,
    pub writer: String,
}

/// Decoded configuration document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub logger: Vec<LoggerDef>,
}

/// Decode a TOML document.
pub fn decode(text: &str) -> Result<Config> {
    Ok(toml::from_str(text)?)
}

/// Read and decode a TOML file.
pub fn load(path: impl AsRef<Path>) -> Result<Config> {
    decode(&fs::read_to_string(path)?)
}
