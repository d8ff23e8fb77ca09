//! Main logger implementation

use super::{
    error::LoggerError,
    fields::{FieldValue, Fields},
    log_entry::{fallback_line, LogEntry},
    log_level::LogLevel,
    timestamp::{self, DEFAULT_TIME_FORMAT},
};
use crate::sink::Sink;
use parking_lot::RwLock;
use std::sync::Arc;

/// Immutable configuration view published by the mutators
///
/// Emission clones the current `Arc` and works from a consistent snapshot,
/// so a concurrent `set_level`/`set_output`/`set_time_format` can never be
/// observed half-applied by an in-flight log call.
#[derive(Clone)]
struct Snapshot {
    level: LogLevel,
    time_format: String,
    fields: Fields,
    sink: Sink,
}

/// Leveled JSON logger writing newline-terminated entries to a sink
///
/// Two API families coexist on purpose:
/// - `set_level` / `set_output` / `set_time_format` mutate the receiver in
///   place and return `&Self` for chaining;
/// - `with_field` / `with_fields` leave the receiver untouched and return a
///   derived `Logger` sharing the same sink with an extended field set.
///
/// # Example
///
/// ```
/// use structlog::{Logger, LogLevel, MemorySink, Sink};
///
/// let buffer = MemorySink::new();
/// let logger = Logger::new(Sink::new(buffer.clone()));
/// logger.set_level(LogLevel::Debug);
///
/// let request_logger = logger.with_field("req_id", "abc123");
/// request_logger.info("request accepted");
///
/// assert_eq!(buffer.lines().len(), 1);
/// assert!(buffer.contents().contains("\"req_id\":\"abc123\""));
/// ```
pub struct Logger {
    snapshot: RwLock<Arc<Snapshot>>,
}

impl Logger {
    /// Create a logger writing to the given sink
    ///
    /// Defaults: threshold `Info`, timestamp format `%Y-%m-%d %H:%M:%S`,
    /// empty field set.
    pub fn new(sink: Sink) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(Snapshot {
                level: LogLevel::Info,
                time_format: DEFAULT_TIME_FORMAT.to_string(),
                fields: Fields::new(),
                sink,
            })),
        }
    }

    fn from_snapshot(snapshot: Snapshot) -> Self {
        Self {
            snapshot: RwLock::new(Arc::new(snapshot)),
        }
    }

    fn snapshot(&self) -> Arc<Snapshot> {
        Arc::clone(&self.snapshot.read())
    }

    /// Publish a modified copy of the current snapshot
    fn update<F>(&self, apply: F) -> &Self
    where
        F: FnOnce(&mut Snapshot),
    {
        let mut guard = self.snapshot.write();
        let mut next = Snapshot::clone(&guard);
        apply(&mut next);
        *guard = Arc::new(next);
        self
    }

    /// Set the minimum severity that will be emitted
    ///
    /// Messages below the threshold are silently dropped.
    pub fn set_level(&self, level: LogLevel) -> &Self {
        self.update(|snapshot| snapshot.level = level)
    }

    /// Replace the destination log lines are written to
    pub fn set_output(&self, sink: Sink) -> &Self {
        self.update(|snapshot| snapshot.sink = sink)
    }

    /// Replace the strftime pattern used to render entry timestamps
    pub fn set_time_format(&self, format: impl Into<String>) -> &Self {
        let format = format.into();
        self.update(|snapshot| snapshot.time_format = format)
    }

    /// Derive a logger with one additional field
    ///
    /// The receiver is not modified; the returned logger shares the
    /// receiver's threshold, sink, and time format, and carries a copy of
    /// its field set with `key` inserted (overwriting an existing key).
    pub fn with_field<K, V>(&self, key: K, value: V) -> Logger
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        let snapshot = self.snapshot();
        let mut next = Snapshot::clone(&snapshot);
        next.fields.insert(key, value);
        Self::from_snapshot(next)
    }

    /// Derive a logger with an entire field set merged in
    ///
    /// Keys from `fields` overwrite the receiver's values; non-overlapping
    /// keys are preserved. The receiver is not modified.
    pub fn with_fields(&self, fields: Fields) -> Logger {
        let snapshot = self.snapshot();
        let mut next = Snapshot::clone(&snapshot);
        next.fields.merge(fields);
        Self::from_snapshot(next)
    }

    /// Current severity threshold
    pub fn level(&self) -> LogLevel {
        self.snapshot().level
    }

    /// Current timestamp pattern
    pub fn time_format(&self) -> String {
        self.snapshot().time_format.clone()
    }

    /// Copy of the current field set
    pub fn fields(&self) -> Fields {
        self.snapshot().fields.clone()
    }

    /// Emit one entry at the given level
    ///
    /// Below-threshold messages return before any entry is built. A
    /// serialization failure diverts to the fixed fallback line; write
    /// failures are discarded.
    pub fn log(&self, level: LogLevel, message: impl Into<String>) {
        let snapshot = self.snapshot();
        if level < snapshot.level {
            return;
        }

        let entry = LogEntry::new(
            level,
            message.into(),
            timestamp::render(&snapshot.time_format),
            snapshot.fields.clone(),
        );

        let line = match entry.to_json() {
            Ok(line) => line,
            Err(err) => fallback_line(
                &serialization_error_text(&err),
                &timestamp::render(&snapshot.time_format),
            ),
        };

        snapshot.sink.write_line(&line);
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    #[inline]
    pub fn warn(&self, message: impl Into<String>) {
        self.log(LogLevel::Warn, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Log at `Fatal` severity and terminate the process with status 1
    ///
    /// No cleanup hooks run; the only flush guarantee is whatever the
    /// underlying write already performed.
    pub fn fatal(&self, message: impl Into<String>) -> ! {
        self.log(LogLevel::Fatal, message);
        std::process::exit(1);
    }

    /// Log at `Panic` severity and panic with the message text
    ///
    /// The panic unwinds normally and can be caught with
    /// `std::panic::catch_unwind`; uncaught, it terminates the process.
    pub fn panic(&self, message: impl Into<String>) -> ! {
        let message = message.into();
        self.log(LogLevel::Panic, message.clone());
        panic!("{}", message);
    }
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let snapshot = self.snapshot();
        f.debug_struct("Logger")
            .field("level", &snapshot.level)
            .field("time_format", &snapshot.time_format)
            .field("fields", &snapshot.fields)
            .finish_non_exhaustive()
    }
}

/// Error text placed in the fallback line
///
/// Unwraps the serde layer so the line carries the serializer's own message
/// rather than this crate's error prefix.
fn serialization_error_text(err: &LoggerError) -> String {
    match err {
        LoggerError::JsonError(inner) => inner.to_string(),
        other => other.to_string(),
    }
}
