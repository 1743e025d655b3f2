//! Built-in help surfaces

use super::text::help_text;
use super::traits::{HelpRequest, HelpSurface};
use crate::log_info;
use crate::logging::{Logger, SharedLogger};

/// Writes the setup instructions through a logger
///
/// The default surface for hosts with no UI of their own.
#[derive(Clone)]
pub struct LogHelpSurface {
    logger: SharedLogger,
}

impl LogHelpSurface {
    pub fn new(logger: SharedLogger) -> Self {
        Self { logger }
    }
}

impl HelpSurface for LogHelpSurface {
    fn show(&self, request: &HelpRequest) {
        self.logger.info(&help_text());
        log_info!(self.logger, "Required variables: {}", request.variables.join(", "));
    }
}

impl std::fmt::Debug for LogHelpSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LogHelpSurface").finish_non_exhaustive()
    }
}

/// Shows nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHelpSurface;

impl HelpSurface for NoHelpSurface {
    fn show(&self, _request: &HelpRequest) {}
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::logging::{LogLevel, MemoryLogger};
    use crate::types::SecretName;

    #[test]
    fn test_log_surface_writes_help() {
        let logger = Arc::new(MemoryLogger::new());
        let surface = LogHelpSurface::new(logger.clone());

        surface.show(&HelpRequest::new(vec![SecretName::SupabaseAnonKey], "VITE_"));

        assert!(logger.contains(LogLevel::Info, "Configuration Setup Required"));
        assert!(logger.contains(LogLevel::Info, "VITE_SUPABASE_ANON_KEY"));
    }
}
