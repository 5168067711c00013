use boutique_observability::{LogEntry, LogLevel, LogSink};

/// Writes log entries to the browser console at the matching level.
pub struct ConsoleSink;

impl LogSink for ConsoleSink {
    fn write(&self, entry: &LogEntry, rendered: &str) {
        let line = rendered.into();
        match entry.level {
            LogLevel::Error => web_sys::console::error_1(&line),
            LogLevel::Warn => web_sys::console::warn_1(&line),
            LogLevel::Info => web_sys::console::info_1(&line),
            LogLevel::Debug | LogLevel::Trace => web_sys::console::debug_1(&line),
        }
    }
}
