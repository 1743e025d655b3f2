//! Core trait for variable sources

use std::sync::Arc;

/// A place the resolver can look variables up in
///
/// Implementations can be:
/// - Values baked in at build time (`BuildTimeSource`)
/// - A runtime global object injected by a deployment pipeline (`RuntimeGlobalSource`)
/// - The process environment (`ProcessEnvSource`)
/// - In-memory tables for development overrides and tests (`MemorySource`)
///
/// Sources return raw values. Deciding whether a value is acceptable
/// (non-empty, not `"undefined"`) is the resolver's job.
///
/// # Example
///
/// ```
/// use appconfig_core::sources::{VariableSource, MemorySource};
///
/// let source = MemorySource::new("dev");
/// source.set("SUPABASE_URL", "http://localhost:54321");
/// assert_eq!(source.get("SUPABASE_URL"), Some("http://localhost:54321".to_string()));
/// ```
pub trait VariableSource: Send + Sync {
    /// Human-readable name of this source, used in diagnostics
    fn name(&self) -> &str;

    /// Check if this source exists in the current environment
    ///
    /// For example, the runtime global object is absent when the page was
    /// not served through the deployment pipeline. Unavailable sources are skipped.
    fn is_available(&self) -> bool {
        true
    }

    /// Look up a variable by its exact name
    fn get(&self, variable: &str) -> Option<String>;

    /// Check if a variable exists
    fn has(&self, variable: &str) -> bool {
        self.get(variable).is_some()
    }
}

/// Type alias for an Arc-wrapped source
pub type SharedSource = Arc<dyn VariableSource>;
