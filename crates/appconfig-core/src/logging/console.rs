//! Console logger implementation

use std::env;

use super::traits::{LogLevel, Logger};

/// Environment variable selecting the console's minimum level
pub const LOG_LEVEL_ENV: &str = "APPCONFIG_LOG_LEVEL";

/// Prints resolver diagnostics to the console
///
/// Info goes to stdout, everything else to stderr. Lines below the minimum
/// level are dropped; the default is `info`, or whatever `APPCONFIG_LOG_LEVEL`
/// names, so per-source resolution traces only show up when asked for.
#[derive(Debug, Clone)]
pub struct ConsoleLogger {
    prefix: String,
    min_level: LogLevel,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleLogger {
    /// `[AppConfig]` prefix, level from the environment
    pub fn new() -> Self {
        let min_level = env::var(LOG_LEVEL_ENV)
            .ok()
            .and_then(|v| LogLevel::from_str(&v))
            .unwrap_or(LogLevel::Info);
        Self {
            prefix: "[AppConfig]".to_string(),
            min_level,
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_level(mut self, min_level: LogLevel) -> Self {
        self.min_level = min_level;
        self
    }

    /// Whether a line at `level` would be printed
    pub fn enabled(&self, level: LogLevel) -> bool {
        level >= self.min_level
    }

    fn format(&self, level: LogLevel, message: &str) -> Option<String> {
        self.enabled(level)
            .then(|| format!("{} {}: {}", self.prefix, level, message))
    }
}

impl Logger for ConsoleLogger {
    fn debug(&self, message: &str) {
        if let Some(line) = self.format(LogLevel::Debug, message) {
            eprintln!("{}", line);
        }
    }

    fn info(&self, message: &str) {
        if let Some(line) = self.format(LogLevel::Info, message) {
            println!("{}", line);
        }
    }

    fn warn(&self, message: &str) {
        if let Some(line) = self.format(LogLevel::Warn, message) {
            eprintln!("{}", line);
        }
    }

    fn error(&self, message: &str) {
        if let Some(line) = self.format(LogLevel::Error, message) {
            eprintln!("{}", line);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_gated_by_level() {
        let logger = ConsoleLogger::new().with_level(LogLevel::Info);
        assert!(!logger.enabled(LogLevel::Debug));
        assert!(logger.enabled(LogLevel::Warn));
        assert_eq!(logger.format(LogLevel::Debug, "Resolved SUPABASE_URL"), None);
        assert_eq!(
            logger.format(LogLevel::Warn, "SUPABASE_URL not found").as_deref(),
            Some("[AppConfig] WARN: SUPABASE_URL not found")
        );
    }

    #[test]
    fn test_custom_prefix_and_debug_level() {
        let logger = ConsoleLogger::new()
            .with_prefix("[Page]")
            .with_level(LogLevel::Debug);
        assert_eq!(
            logger.format(LogLevel::Debug, "x").as_deref(),
            Some("[Page] DEBUG: x")
        );
        // Doesn't panic at any level
        logger.debug("debug message");
        logger.error("error message");
    }
}
