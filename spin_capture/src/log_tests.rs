//! Unit tests for log.rs
//!
//! Tests Logger trait, LogEntry, LogSeverity and DefaultLogger formatting.

use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
use std::sync::{Arc, Mutex};
use std::time::SystemTime;

fn entry(severity: LogSeverity, file: Option<&'static str>, line: Option<u32>) -> LogEntry {
    LogEntry {
        severity,
        timestamp: SystemTime::now(),
        source: "spin::RenderTarget".to_string(),
        message: "created 64x64 target".to_string(),
        file,
        line,
    }
}

// ============================================================================
// LOG SEVERITY TESTS
// ============================================================================

#[test]
fn test_log_severity_ordering() {
    assert!(LogSeverity::Trace < LogSeverity::Debug);
    assert!(LogSeverity::Debug < LogSeverity::Info);
    assert!(LogSeverity::Info < LogSeverity::Warn);
    assert!(LogSeverity::Warn < LogSeverity::Error);
}

#[test]
fn test_log_severity_labels_are_fixed_width() {
    for severity in [
        LogSeverity::Trace,
        LogSeverity::Debug,
        LogSeverity::Info,
        LogSeverity::Warn,
        LogSeverity::Error,
    ] {
        assert_eq!(severity.label().len(), 5);
    }
}

// ============================================================================
// DEFAULT LOGGER TESTS
// ============================================================================

#[test]
fn test_default_logger_min_severity() {
    assert_eq!(DefaultLogger::default().min_severity(), LogSeverity::Info);
    assert_eq!(DefaultLogger::new(LogSeverity::Trace).min_severity(), LogSeverity::Trace);
}

#[test]
fn test_format_plain_without_location() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Info, None, None));
    assert!(line.contains("[INFO ]"));
    assert!(line.contains("[spin::RenderTarget]"));
    assert!(line.ends_with("created 64x64 target"));
}

#[test]
fn test_format_plain_with_location() {
    let line = DefaultLogger::format_plain(&entry(LogSeverity::Error, Some("sequencer.rs"), Some(88)));
    assert!(line.contains("[ERROR]"));
    assert!(line.ends_with("(sequencer.rs:88)"));
}

#[test]
fn test_default_logger_filtered_entry_does_not_panic() {
    let logger = DefaultLogger::new(LogSeverity::Error);
    logger.log(&entry(LogSeverity::Trace, None, None));
}

// ============================================================================
// CUSTOM LOGGER TESTS
// ============================================================================

struct CollectingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl Logger for CollectingLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

#[test]
fn test_custom_logger_receives_entries() {
    let entries = Arc::new(Mutex::new(Vec::new()));
    let logger = CollectingLogger { entries: entries.clone() };

    logger.log(&entry(LogSeverity::Warn, None, None));
    logger.log(&entry(LogSeverity::Error, Some("a.rs"), Some(1)));

    let captured = entries.lock().unwrap();
    assert_eq!(captured.len(), 2);
    assert_eq!(captured[0].severity, LogSeverity::Warn);
    assert_eq!(captured[1].file, Some("a.rs"));
    assert_eq!(captured[1].line, Some(1));
}
