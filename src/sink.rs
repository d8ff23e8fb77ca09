//! Output sinks for log lines
//!
//! A `Sink` is a clonable handle over any byte-stream destination: stdout,
//! stderr, a file, or an in-memory buffer. The logger only ever writes
//! newline-terminated lines to it; it never opens, closes, or flushes the
//! underlying writer beyond the write itself.

use parking_lot::Mutex;
use std::fmt;
use std::io::{self, Write};
use std::sync::Arc;

/// Clonable handle to a log output destination
///
/// Cloning a `Sink` yields another handle to the same underlying writer,
/// so a derived logger shares its parent's destination. The internal lock
/// serializes individual line writes; no ordering guarantee beyond that is
/// added by this layer.
#[derive(Clone)]
pub struct Sink {
    writer: Arc<Mutex<Box<dyn Write + Send>>>,
}

impl Sink {
    /// Wrap an arbitrary writer as a sink
    pub fn new<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Arc::new(Mutex::new(Box::new(writer))),
        }
    }

    /// Sink writing to the process standard output stream
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }

    /// Sink writing to the process standard error stream
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }

    /// Write one line followed by a newline
    ///
    /// Write errors are discarded: a failed write is not retried and not
    /// surfaced to the caller.
    pub(crate) fn write_line(&self, line: &str) {
        let mut writer = self.writer.lock();
        let _ = writeln!(writer, "{}", line);
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink").finish_non_exhaustive()
    }
}

/// In-memory sink backed by a shared buffer
///
/// Clones share the buffer, so a test can hand one clone to the logger and
/// read captured output through another.
#[derive(Clone, Default)]
pub struct MemorySink {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Captured output as a UTF-8 string
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buffer.lock()).into_owned()
    }

    /// Captured output split into lines
    pub fn lines(&self) -> Vec<String> {
        self.contents().lines().map(String::from).collect()
    }

    /// Discard everything captured so far
    pub fn clear(&self) {
        self.buffer.lock().clear();
    }
}

impl Write for MemorySink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.buffer.lock().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl fmt::Debug for MemorySink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemorySink")
            .field("len", &self.buffer.lock().len())
            .finish()
    }
}
