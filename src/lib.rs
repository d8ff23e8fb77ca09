//! # structlog
//!
//! A minimal structured logging library: entries are formatted as
//! single-line JSON objects tagged with a severity level, a timestamp, and
//! contextual key/value fields, then written to a configurable sink.
//!
//! ## Features
//!
//! - **Leveled output**: ordered severities from `Debug` to `Panic` with a
//!   configurable threshold
//! - **Contextual fields**: derive child loggers carrying extra key/value
//!   fields without mutating the parent
//! - **Pluggable sinks**: stdout, files, in-memory buffers, anything `Write`
//! - **Default instance**: process-wide logger behind free functions
//!
//! ## Example
//!
//! ```
//! use structlog::{Logger, LogLevel, MemorySink, Sink};
//!
//! let buffer = MemorySink::new();
//! let logger = Logger::new(Sink::new(buffer.clone()));
//!
//! logger.set_level(LogLevel::Debug);
//! logger.with_field("req_id", "abc123").info("request accepted");
//!
//! let line = &buffer.lines()[0];
//! assert!(line.contains("\"level\":\"INFO\""));
//! assert!(line.contains("\"req_id\":\"abc123\""));
//! ```

pub mod core;
pub mod global;
pub mod macros;
pub mod sink;

pub mod prelude {
    pub use crate::core::{
        FieldValue, Fields, LogEntry, LogLevel, Logger, LoggerError, Result, DEFAULT_TIME_FORMAT,
    };
    pub use crate::sink::{MemorySink, Sink};
}

pub use crate::core::{
    FieldValue, Fields, LogEntry, LogLevel, Logger, LoggerError, Result, DEFAULT_TIME_FORMAT,
};
pub use global::{
    debug, default_logger, error, fatal, info, panic, set_level, set_output, set_time_format,
    warn, with_field, with_fields,
};
pub use sink::{MemorySink, Sink};
