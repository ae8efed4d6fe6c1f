//! Severity levels and threshold matching

use std::fmt;
use std::str::FromStr;

use crate::core::error::LogError;

/// Record severity, ordered from `Debug` up to `Fatal`.
///
/// `Disable` is not an emittable level. It sits between `Error` and `Fatal`
/// so that it can serve as a writer threshold meaning "match nothing",
/// `Fatal` included.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
    Disable = 4,
    Fatal = 5,
}

impl Severity {
    /// Single-character code at the head of a formatted record.
    pub fn code(self) -> u8 {
        match self {
            Severity::Debug => b'D',
            Severity::Info => b'I',
            Severity::Warn => b'W',
            Severity::Error => b'E',
            Severity::Fatal => b'F',
            Severity::Disable => {
                eprintln!("[LOGGER ERROR] no record code for level 'disable'");
                b'I'
            }
        }
    }

    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Debug => "debug",
            Severity::Info => "info",
            Severity::Warn => "warn",
            Severity::Error => "error",
            Severity::Disable => "disable",
            Severity::Fatal => "fatal",
        }
    }

    /// Whether a writer with this threshold accepts a record at `level`.
    #[inline]
    pub fn permits(self, level: Severity) -> bool {
        self != Severity::Disable && level >= self
    }

    /// Lenient parse used on configuration input: unrecognized strings are
    /// reported and mapped to `Info`.
    pub fn parse_or_info(s: &str) -> Self {
        s.parse().unwrap_or_else(|err| {
            eprintln!("[LOGGER ERROR] {}", err);
            Severity::Info
        })
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "d" | "debug" => Ok(Severity::Debug),
            "i" | "info" => Ok(Severity::Info),
            "w" | "warn" | "warning" => Ok(Severity::Warn),
            "e" | "err" | "error" => Ok(Severity::Error),
            "disable" => Ok(Severity::Disable),
            _ => Err(LogError::UnknownLevel(s.to_string())),
        }
    }
}
