//! Log sinks.

use std::sync::{Arc, Mutex};

use crate::logging::{LogEntry, LogLevel};

/// Destination for rendered log entries.
pub trait LogSink: Send + Sync {
    /// Write one entry. `rendered` is the entry in the logger's configured format.
    fn write(&self, entry: &LogEntry, rendered: &str);
}

/// Writes rendered entries to stderr.
#[derive(Debug, Clone, Copy, Default)]
pub struct StderrSink;

impl LogSink for StderrSink {
    fn write(&self, _entry: &LogEntry, rendered: &str) {
        eprintln!("{}", rendered);
    }
}

/// Keeps entries in memory. Cloning shares the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything written so far.
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    /// Entries at exactly `level`.
    pub fn at_level(&self, level: LogLevel) -> Vec<LogEntry> {
        self.entries()
            .into_iter()
            .filter(|e| e.level == level)
            .collect()
    }

    /// Whether any entry's message contains `needle`.
    pub fn contains(&self, needle: &str) -> bool {
        self.entries().iter().any(|e| e.message.contains(needle))
    }
}

impl LogSink for MemorySink {
    fn write(&self, entry: &LogEntry, _rendered: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(entry.clone());
        }
    }
}
