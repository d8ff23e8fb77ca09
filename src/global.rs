//! Process-wide default logger and forwarding free functions
//!
//! The default instance writes to standard output at `Info` threshold and
//! lives for the process lifetime; there is no teardown. Every free
//! function here is a plain forwarder to the corresponding `Logger`
//! method.

use crate::core::{FieldValue, Fields, Logger, LogLevel};
use crate::sink::Sink;
use once_cell::sync::Lazy;

static DEFAULT_LOGGER: Lazy<Logger> = Lazy::new(|| Logger::new(Sink::stdout()));

/// The process-wide default logger
pub fn default_logger() -> &'static Logger {
    &DEFAULT_LOGGER
}

/// Set the default logger's severity threshold
pub fn set_level(level: LogLevel) -> &'static Logger {
    DEFAULT_LOGGER.set_level(level)
}

/// Replace the default logger's output sink
pub fn set_output(sink: Sink) -> &'static Logger {
    DEFAULT_LOGGER.set_output(sink)
}

/// Replace the default logger's timestamp pattern
pub fn set_time_format(format: impl Into<String>) -> &'static Logger {
    DEFAULT_LOGGER.set_time_format(format)
}

/// Derive a logger from the default instance with one extra field
///
/// The default instance itself is unchanged; callers may retain the
/// returned logger.
pub fn with_field<K, V>(key: K, value: V) -> Logger
where
    K: Into<String>,
    V: Into<FieldValue>,
{
    DEFAULT_LOGGER.with_field(key, value)
}

/// Derive a logger from the default instance with a merged field set
pub fn with_fields(fields: Fields) -> Logger {
    DEFAULT_LOGGER.with_fields(fields)
}

pub fn debug(message: impl Into<String>) {
    DEFAULT_LOGGER.debug(message);
}

pub fn info(message: impl Into<String>) {
    DEFAULT_LOGGER.info(message);
}

pub fn warn(message: impl Into<String>) {
    DEFAULT_LOGGER.warn(message);
}

pub fn error(message: impl Into<String>) {
    DEFAULT_LOGGER.error(message);
}

/// Log at `Fatal` severity on the default logger and exit the process
pub fn fatal(message: impl Into<String>) -> ! {
    DEFAULT_LOGGER.fatal(message)
}

/// Log at `Panic` severity on the default logger and panic
pub fn panic(message: impl Into<String>) -> ! {
    DEFAULT_LOGGER.panic(message)
}
