//! In-memory variable source

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::VariableSource;

/// In-memory variable table
///
/// Used for the development fallback table (manual local overrides) and in
/// tests. The table can be edited after creation.
///
/// # Example
///
/// ```
/// use appconfig_core::sources::{VariableSource, MemorySource};
///
/// let dev = MemorySource::new("dev-fallback");
/// dev.set("USERBASE_APP_ID", "local-app");
/// assert!(dev.has("USERBASE_APP_ID"));
/// ```
#[derive(Debug)]
pub struct MemorySource {
    name: String,
    values: RwLock<HashMap<String, String>>,
}

impl Default for MemorySource {
    fn default() -> Self {
        Self::new("memory")
    }
}

impl MemorySource {
    /// Create a new empty source
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: RwLock::new(HashMap::new()),
        }
    }

    /// Create a source with initial values
    pub fn with_values<I, K, V>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let values = values
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self {
            name: name.into(),
            values: RwLock::new(values),
        }
    }

    /// Set a variable
    pub fn set(&self, variable: &str, value: &str) {
        self.values.write().insert(variable.to_string(), value.to_string());
    }

    /// Remove a variable, returning its previous value
    pub fn remove(&self, variable: &str) -> Option<String> {
        self.values.write().remove(variable)
    }

    /// Clear all variables
    pub fn clear(&self) {
        self.values.write().clear();
    }

    /// Number of variables in the table
    pub fn len(&self) -> usize {
        self.values.read().len()
    }

    /// Check if the table is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl VariableSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    fn get(&self, variable: &str) -> Option<String> {
        self.values.read().get(variable).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_source_basic() {
        let source = MemorySource::new("dev");
        assert_eq!(source.name(), "dev");
        assert!(source.is_empty());

        source.set("SUPABASE_URL", "http://localhost:54321");
        assert_eq!(source.len(), 1);
        assert_eq!(source.get("SUPABASE_URL"), Some("http://localhost:54321".to_string()));

        assert_eq!(source.remove("SUPABASE_URL"), Some("http://localhost:54321".to_string()));
        assert_eq!(source.get("SUPABASE_URL"), None);
    }

    #[test]
    fn test_memory_source_with_values() {
        let source = MemorySource::with_values("memory", [("A", "1"), ("B", "2")]);
        assert_eq!(source.len(), 2);
        assert!(source.has("B"));

        source.clear();
        assert!(source.is_empty());
    }

    #[test]
    fn test_memory_source_returns_raw_values() {
        // Filtering of empty / "undefined" values happens in the resolver
        let source = MemorySource::with_values("memory", [("EMPTY", ""), ("UNDEF", "undefined")]);
        assert_eq!(source.get("EMPTY"), Some(String::new()));
        assert_eq!(source.get("UNDEF"), Some("undefined".to_string()));
    }
}
