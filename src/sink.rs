// Copyright (c) 2026 Bountyy Oy. All rights reserved.
// This software is proprietary and confidential.

//! Log sinks for interceptor records

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::Error;

/// tracing target used by [`TracingSink`]
pub const LOG_TARGET: &str = "masklog::api";

/// Destination for formatted log records
pub trait LogSink: Send + Sync {
    /// Informational record
    fn info(&self, message: &str);

    /// Something worth a look that did not stop the call
    fn warn(&self, message: &str);

    /// Failure reported to the caller as well
    fn error(&self, message: &str, error: &Error);
}

/// Forwards records to `tracing`
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn info(&self, message: &str) {
        tracing::info!(target: LOG_TARGET, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: LOG_TARGET, "{}", message);
    }

    fn error(&self, message: &str, error: &Error) {
        tracing::error!(target: LOG_TARGET, error = %error, "{}", message);
    }
}

/// Log level of a recorded entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Info,
    Warn,
    Error,
}

/// Recorded log entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
    /// Display form of the error for error entries
    pub error: Option<String>,
}

/// Keeps records in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all entries
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Messages at the given level
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    pub fn clear(&self) {
        self.entries.lock().clear();
    }

    fn push(&self, level: LogLevel, message: &str, error: Option<String>) {
        self.entries.lock().push(LogEntry {
            level,
            message: message.to_string(),
            error,
        });
    }
}

impl LogSink for MemorySink {
    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message, None);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message, None);
    }

    fn error(&self, message: &str, error: &Error) {
        self.push(LogLevel::Error, message, Some(error.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_sink_records_levels() {
        let sink = MemorySink::new();
        sink.info("one");
        sink.warn("two");
        sink.error("three", &Error::body_read("reset"));

        let entries = sink.entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(sink.messages(LogLevel::Info), vec!["one".to_string()]);
        assert_eq!(entries[2].error.as_deref(), Some("Body read error: reset"));
    }

    #[test]
    fn test_memory_sink_shared_between_clones() {
        let sink = MemorySink::new();
        let other = sink.clone();
        other.info("hello");
        assert_eq!(sink.entries().len(), 1);

        sink.clear();
        assert!(other.entries().is_empty());
    }

    #[test]
    fn test_tracing_sink_without_subscriber() {
        let sink = TracingSink;
        sink.info("no subscriber installed");
        sink.error("still fine", &Error::BodyConsumed);
    }
}
