//! Core logger types

pub mod error;
pub mod fields;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod timestamp;

pub use error::{LoggerError, Result};
pub use fields::{FieldValue, Fields};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use timestamp::DEFAULT_TIME_FORMAT;
