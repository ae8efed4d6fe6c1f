//! Core logger types and traits

pub mod buffer_pool;
pub mod clock;
pub mod error;
pub mod format;
pub mod level;
pub mod logger;
pub mod registry;

pub use buffer_pool::BufferPool;
pub use clock::ClockCache;
pub use error::{LogError, Result};
pub use format::Formatter;
pub use level::Severity;
pub use logger::{Logger, Writer, WriterSelect};
pub use registry::LoggingContext;
