//! Build-time injected variable source

use std::collections::HashMap;

use super::traits::VariableSource;

/// Capture `option_env!` for each listed variable into `(name, value)` pairs
macro_rules! captured {
    ($($var:literal),* $(,)?) => {
        [$(($var, option_env!($var))),*]
    };
}

/// Values fixed when the artifact was built
///
/// The front-end equivalent is a bundler's define step. In Rust the same role
/// is played by `option_env!`: [`BuildTimeSource::compiled`] captures the
/// prefixed and bare forms of every secret from the environment of the
/// `cargo build` that compiled this crate.
///
/// A build pipeline that computes its own table (see
/// [`BuildInjection`](crate::build::BuildInjection)) can use
/// [`BuildTimeSource::from_map`] instead.
#[derive(Debug, Clone, Default)]
pub struct BuildTimeSource {
    values: HashMap<String, String>,
}

impl BuildTimeSource {
    /// Values captured when this crate was compiled
    pub fn compiled() -> Self {
        let captured = captured![
            "VITE_SUPABASE_URL",
            "SUPABASE_URL",
            "VITE_SUPABASE_ANON_KEY",
            "SUPABASE_ANON_KEY",
            "VITE_USERBASE_APP_ID",
            "USERBASE_APP_ID",
        ];
        let values = captured
            .into_iter()
            .filter_map(|(name, value)| value.map(|v| (name.to_string(), v.to_string())))
            .collect();
        Self { values }
    }

    /// Values produced by a build step
    pub fn from_map<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }

    /// Number of captured variables
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Check if nothing was captured
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl VariableSource for BuildTimeSource {
    fn name(&self) -> &str {
        "build"
    }

    fn get(&self, variable: &str) -> Option<String> {
        self.values.get(variable).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_map() {
        let source = BuildTimeSource::from_map([("VITE_SUPABASE_URL", "https://abc.supabase.co")]);
        assert_eq!(source.name(), "build");
        assert_eq!(source.len(), 1);
        assert_eq!(
            source.get("VITE_SUPABASE_URL"),
            Some("https://abc.supabase.co".to_string())
        );
        assert_eq!(source.get("SUPABASE_URL"), None);
    }

    #[test]
    fn test_compiled_only_holds_known_names() {
        let source = BuildTimeSource::compiled();
        assert!(source.len() <= 6);
        assert_eq!(source.get("PATH"), None);
    }
}
