//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use structlog::{info, Logger, MemorySink, Sink};
//!
//! let buffer = MemorySink::new();
//! let logger = Logger::new(Sink::new(buffer.clone()));
//!
//! // Basic logging
//! info!(logger, "Server started");
//!
//! // With format arguments
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//!
//! assert_eq!(buffer.lines().len(), 2);
//! ```

/// Log a message with automatic formatting.
///
/// # Examples
///
/// ```
/// # use structlog::{Logger, LogLevel, MemorySink, Sink};
/// # let logger = Logger::new(Sink::new(MemorySink::new()));
/// use structlog::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use structlog::{Logger, LogLevel, MemorySink, Sink};
/// # let logger = Logger::new(Sink::new(MemorySink::new()));
/// # logger.set_level(LogLevel::Debug);
/// use structlog::debug;
/// debug!(logger, "Debug information");
/// debug!(logger, "Counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use structlog::{Logger, MemorySink, Sink};
/// # let logger = Logger::new(Sink::new(MemorySink::new()));
/// use structlog::info;
/// info!(logger, "Application started");
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use structlog::{Logger, MemorySink, Sink};
/// # let logger = Logger::new(Sink::new(MemorySink::new()));
/// use structlog::warn;
/// warn!(logger, "Low disk space");
/// warn!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warn, $($arg)+)
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use structlog::{Logger, MemorySink, Sink};
/// # let logger = Logger::new(Sink::new(MemorySink::new()));
/// use structlog::error;
/// error!(logger, "Failed to connect to database");
/// error!(logger, "Error code: {}, message: {}", 500, "Internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a fatal-level message and terminate the process.
///
/// # Examples
///
/// ```no_run
/// # use structlog::{Logger, MemorySink, Sink};
/// # let logger = Logger::new(Sink::new(MemorySink::new()));
/// use structlog::fatal;
/// fatal!(logger, "Unable to recover from error: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}
