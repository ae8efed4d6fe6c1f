//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`. Each macro comes
//! in two forms: with an explicit logger as the first argument, or without
//! one, in which case the record goes to the process-wide default logger.
//!
//! # Examples
//!
//! ```
//! use fanlog::prelude::*;
//! use fanlog::info;
//!
//! let context = LoggingContext::new();
//! let logger = context.default_logger();
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! // Through the default logger
//! info!("Server listening on port {}", port);
//! ```

/// Log a message at an explicit level.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let context = LoggingContext::new();
/// # let logger = context.default_logger();
/// use fanlog::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($level:expr, $fmt:literal $($rest:tt)*) => {
        $crate::default_logger().write($level, format_args!($fmt $($rest)*))
    };
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.write($level, format_args!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let context = LoggingContext::new();
/// # let logger = context.default_logger();
/// use fanlog::debug;
/// debug!(logger, "Debug information");
/// debug!("Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($fmt:literal $($rest:tt)*) => {
        $crate::default_logger().debug(format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.debug(format_args!($($arg)+))
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let context = LoggingContext::new();
/// # let logger = context.default_logger();
/// use fanlog::info;
/// info!(logger, "Application started");
/// info!("Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($fmt:literal $($rest:tt)*) => {
        $crate::default_logger().info(format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.info(format_args!($($arg)+))
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let context = LoggingContext::new();
/// # let logger = context.default_logger();
/// use fanlog::warn;
/// warn!(logger, "Low disk space");
/// warn!("Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($fmt:literal $($rest:tt)*) => {
        $crate::default_logger().warn(format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.warn(format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use fanlog::prelude::*;
/// # let context = LoggingContext::new();
/// # let logger = context.default_logger();
/// use fanlog::error;
/// error!(logger, "Failed to connect to database");
/// error!("Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($fmt:literal $($rest:tt)*) => {
        $crate::default_logger().error(format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.error(format_args!($($arg)+))
    };
}

/// Log a fatal-level message, flush every device, and exit the process
/// with a non-zero status.
///
/// # Examples
///
/// ```no_run
/// # use fanlog::prelude::*;
/// # let context = LoggingContext::new();
/// # let logger = context.default_logger();
/// use fanlog::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($fmt:literal $($rest:tt)*) => {
        $crate::default_logger().fatal(format_args!($fmt $($rest)*))
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format_args!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{LoggingContext, Severity};

    #[test]
    fn test_log_macro() {
        let context = LoggingContext::new();
        let logger = context.default_logger();
        log!(logger, Severity::Info, "Test message");
        log!(logger, Severity::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_debug_macro() {
        let context = LoggingContext::new();
        let logger = context.default_logger();
        debug!(logger, "Debug message");
        debug!(logger, "Count: {}", 5);
    }

    #[test]
    fn test_info_macro() {
        let context = LoggingContext::new();
        let logger = context.default_logger();
        info!(logger, "Info message");
        info!(logger, "Items: {}", 100);
    }

    #[test]
    fn test_warn_macro() {
        let context = LoggingContext::new();
        let logger = context.default_logger();
        warn!(logger, "Warning message");
        warn!(logger, "Retry {} of {}", 1, 3);
    }

    #[test]
    fn test_error_macro() {
        let context = LoggingContext::new();
        let logger = context.default_logger();
        error!(logger, "Error message");
        error!(logger, "Code: {}", 500);
    }

    #[test]
    fn test_global_macro_forms() {
        log!(Severity::Info, "global message");
        info!("global items: {}", 100);
        warn!("global warning");
        error!("global error: {}", 500);
        debug!("global debug");
    }
}
