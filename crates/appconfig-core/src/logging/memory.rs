//! Capturing logger

use parking_lot::Mutex;

use super::traits::{LogLevel, Logger};

/// One captured log line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub level: LogLevel,
    pub message: String,
}

/// A logger that keeps every entry in memory
///
/// Hosts without a usable stdout (a webview, an embedded page) can drain the
/// entries and forward them to their own console.
///
/// # Example
///
/// ```
/// use appconfig_core::logging::{Logger, MemoryLogger, LogLevel};
///
/// let logger = MemoryLogger::new();
/// logger.warn("SUPABASE_URL not set");
/// assert_eq!(logger.messages(LogLevel::Warn), vec!["SUPABASE_URL not set".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct MemoryLogger {
    entries: Mutex<Vec<LogEntry>>,
}

impl MemoryLogger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all captured entries
    pub fn entries(&self) -> Vec<LogEntry> {
        self.entries.lock().clone()
    }

    /// Messages logged at exactly the given level
    pub fn messages(&self, level: LogLevel) -> Vec<String> {
        self.entries
            .lock()
            .iter()
            .filter(|e| e.level == level)
            .map(|e| e.message.clone())
            .collect()
    }

    /// Check if any entry at the given level contains `needle`
    pub fn contains(&self, level: LogLevel, needle: &str) -> bool {
        self.entries
            .lock()
            .iter()
            .any(|e| e.level == level && e.message.contains(needle))
    }

    /// Remove and return all captured entries
    pub fn drain(&self) -> Vec<LogEntry> {
        std::mem::take(&mut *self.entries.lock())
    }

    fn push(&self, level: LogLevel, message: &str) {
        self.entries.lock().push(LogEntry {
            level,
            message: message.to_string(),
        });
    }
}

impl Logger for MemoryLogger {
    fn debug(&self, message: &str) {
        self.push(LogLevel::Debug, message);
    }

    fn info(&self, message: &str) {
        self.push(LogLevel::Info, message);
    }

    fn warn(&self, message: &str) {
        self.push(LogLevel::Warn, message);
    }

    fn error(&self, message: &str) {
        self.push(LogLevel::Error, message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_logger_captures() {
        let logger = MemoryLogger::new();
        logger.debug("one");
        crate::log_warn!(logger, "missing {}", "SUPABASE_URL");
        crate::log_error!(logger, "code {}", 7);

        assert_eq!(logger.entries().len(), 3);
        assert!(logger.contains(LogLevel::Warn, "SUPABASE_URL"));
        assert_eq!(logger.messages(LogLevel::Error), vec!["code 7".to_string()]);

        let drained = logger.drain();
        assert_eq!(drained[0].level, LogLevel::Debug);
        assert!(logger.entries().is_empty());
    }
}
