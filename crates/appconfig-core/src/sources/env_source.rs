//! Process environment variable source

use std::env;

use super::traits::VariableSource;

/// Source that reads from the process environment
///
/// This source is read-only and reads the environment on every lookup, so
/// variables set after the resolver was built are only seen by a new resolver.
/// Values that are not valid UTF-8 are treated as absent.
///
/// # Example
///
/// ```
/// use appconfig_core::sources::{VariableSource, ProcessEnvSource};
///
/// let source = ProcessEnvSource::new();
/// // source.get("VITE_SUPABASE_URL") reads $VITE_SUPABASE_URL
/// ```
#[derive(Debug, Default)]
pub struct ProcessEnvSource {
    _private: (), // Prevent direct construction, use new()
}

impl ProcessEnvSource {
    /// Create a new process environment source
    pub fn new() -> Self {
        Self { _private: () }
    }
}

impl VariableSource for ProcessEnvSource {
    fn name(&self) -> &str {
        "env"
    }

    fn get(&self, variable: &str) -> Option<String> {
        env::var(variable).ok()
    }
}
