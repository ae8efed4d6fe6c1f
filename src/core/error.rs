//! Error types for the logging facility

pub type Result<T> = std::result::Result<T, LogError>;

#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// No logger registered under the requested name
    #[error("log name not found: {0}")]
    NameNotFound(String),

    /// Writer index outside the logger's writer list
    #[error("log writer index exceeds {count}: {index}")]
    IndexOutOfBound { index: usize, count: usize },

    /// Unrecognized severity string
    #[error("logger level unknown: {0}")]
    UnknownLevel(String),

    /// Unrecognized sink descriptor
    #[error("logger writer unknown: {0}")]
    UnknownSink(String),

    /// Queue sink descriptor missing one of host:port:name:topic
    #[error("queue sink args invalid: {0}")]
    MalformedQueueSink(String),

    /// Configuration document failed to decode
    #[error("logger read config: {0}")]
    ConfigDecode(#[from] toml::de::Error),

    /// Configuration file could not be read
    #[error("logger read config: {0}")]
    ConfigRead(#[from] std::io::Error),
}

impl LogError {
    /// Create a name lookup error
    pub fn name_not_found(name: impl Into<String>) -> Self {
        LogError::NameNotFound(name.into())
    }

    /// Create a writer index error
    pub fn index_out_of_bound(index: usize, count: usize) -> Self {
        LogError::IndexOutOfBound { index, count }
    }

    /// Create an unknown level error
    pub fn unknown_level(level: impl Into<String>) -> Self {
        LogError::UnknownLevel(level.into())
    }

    /// Create an unknown sink error
    pub fn unknown_sink(sink: impl Into<String>) -> Self {
        LogError::UnknownSink(sink.into())
    }

    /// Create a malformed queue sink error
    pub fn malformed_queue_sink(args: impl Into<String>) -> Self {
        LogError::MalformedQueueSink(args.into())
    }
}
