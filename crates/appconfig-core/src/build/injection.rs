//! Mapping loaded variables into what the page receives

use std::collections::BTreeMap;
use std::path::Path;

use serde_json::{Map, Value};

use super::env_files::load_env;
use crate::config::ConfigResult;
use crate::resolver::is_accepted;
use crate::sources::{BuildTimeSource, RuntimeGlobalSource};
use crate::types::SecretName;

/// Name of the runtime global object the page reads
pub const RUNTIME_GLOBAL_NAME: &str = "window.__ENV__";

/// The three secrets as a build step would inject them
///
/// Each secret takes the prefixed variable when it holds an accepted value,
/// falling back to the bare variable.
///
/// # Example
///
/// ```
/// use std::collections::BTreeMap;
/// use appconfig_core::build::BuildInjection;
/// use appconfig_core::types::SecretName;
///
/// let mut env = BTreeMap::new();
/// env.insert("SUPABASE_URL".to_string(), "https://abcd1234.supabase.co".to_string());
///
/// let injection = BuildInjection::from_env(&env, "VITE_");
/// assert_eq!(injection.value(SecretName::SupabaseUrl), Some("https://abcd1234.supabase.co"));
/// assert_eq!(injection.runtime_global_json()["USERBASE_APP_ID"], serde_json::Value::Null);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInjection {
    prefix: String,
    values: BTreeMap<SecretName, String>,
}

impl BuildInjection {
    /// Pick each secret out of a loaded variable map
    pub fn from_env(env: &BTreeMap<String, String>, prefix: &str) -> Self {
        let values = SecretName::ALL
            .into_iter()
            .filter_map(|name| {
                name.candidates(prefix)
                    .iter()
                    .filter_map(|variable| env.get(variable))
                    .find(|value| is_accepted(value))
                    .map(|value| (name, value.clone()))
            })
            .collect();

        Self {
            prefix: prefix.to_string(),
            values,
        }
    }

    /// Load `.env` files for `mode` from `dir` and pick the secrets
    pub fn from_files(mode: &str, dir: impl AsRef<Path>, prefix: &str) -> ConfigResult<Self> {
        let env = load_env(mode, dir, &[""])?;
        Ok(Self::from_env(&env, prefix))
    }

    /// The injected value of a secret
    pub fn value(&self, name: SecretName) -> Option<&str> {
        self.values.get(&name).map(String::as_str)
    }

    /// The runtime global object, keyed by bare name; absent values are `null`
    pub fn runtime_global_json(&self) -> Value {
        let object: Map<String, Value> = SecretName::ALL
            .into_iter()
            .map(|name| {
                let value = self
                    .value(name)
                    .map_or(Value::Null, |v| Value::String(v.to_string()));
                (name.as_str().to_string(), value)
            })
            .collect();
        Value::Object(object)
    }

    /// Compile-time replacements, expression → JavaScript literal
    ///
    /// Produces `import.meta.env.<PREFIX><NAME>` and `window.__ENV__.<NAME>`
    /// for each secret, plus `window.__ENV__` for the whole object. Absent
    /// values become the literal `undefined`.
    pub fn define_constants(&self) -> BTreeMap<String, String> {
        let mut defines = BTreeMap::new();

        for name in SecretName::ALL {
            let literal = match self.value(name) {
                Some(v) => Value::String(v.to_string()).to_string(),
                None => "undefined".to_string(),
            };
            defines.insert(
                format!("import.meta.env.{}", name.prefixed(&self.prefix)),
                literal.clone(),
            );
            defines.insert(format!("{}.{}", RUNTIME_GLOBAL_NAME, name), literal);
        }
        defines.insert(
            RUNTIME_GLOBAL_NAME.to_string(),
            self.runtime_global_json().to_string(),
        );

        defines
    }

    /// The runtime global as a resolver source
    pub fn runtime_source(&self) -> RuntimeGlobalSource {
        RuntimeGlobalSource::from_map(
            self.values
                .iter()
                .map(|(name, value)| (name.as_str(), value.clone())),
        )
    }

    /// The compile-time constants as a resolver source
    pub fn build_time_source(&self) -> BuildTimeSource {
        BuildTimeSource::from_map(
            self.values
                .iter()
                .map(|(name, value)| (name.prefixed(&self.prefix), value.clone())),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::VariableSource;
    use std::fs;
    use tempfile::TempDir;

    fn env(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_prefixed_preferred_over_bare() {
        let injection = BuildInjection::from_env(
            &env(&[
                ("VITE_SUPABASE_URL", "https://prefixed.supabase.co"),
                ("SUPABASE_URL", "https://bare.supabase.co"),
                ("VITE_SUPABASE_ANON_KEY", "undefined"),
                ("SUPABASE_ANON_KEY", "bare-key"),
            ]),
            "VITE_",
        );

        assert_eq!(injection.value(SecretName::SupabaseUrl), Some("https://prefixed.supabase.co"));
        assert_eq!(injection.value(SecretName::SupabaseAnonKey), Some("bare-key"));
        assert_eq!(injection.value(SecretName::UserbaseAppId), None);
    }

    #[test]
    fn test_runtime_global_json() {
        let injection = BuildInjection::from_env(&env(&[("USERBASE_APP_ID", "app-1")]), "VITE_");
        let json = injection.runtime_global_json();

        assert_eq!(json["USERBASE_APP_ID"], "app-1");
        assert!(json["SUPABASE_URL"].is_null());
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    #[test]
    fn test_define_constants() {
        let injection = BuildInjection::from_env(
            &env(&[("VITE_SUPABASE_URL", "https://abcd1234.supabase.co")]),
            "VITE_",
        );
        let defines = injection.define_constants();

        assert_eq!(
            defines["import.meta.env.VITE_SUPABASE_URL"],
            "\"https://abcd1234.supabase.co\""
        );
        assert_eq!(defines["window.__ENV__.SUPABASE_ANON_KEY"], "undefined");
        assert_eq!(defines["import.meta.env.VITE_USERBASE_APP_ID"], "undefined");

        let global: Value = serde_json::from_str(&defines["window.__ENV__"]).unwrap();
        assert_eq!(global["SUPABASE_URL"], "https://abcd1234.supabase.co");
        assert_eq!(defines.len(), 7);
    }

    #[test]
    fn test_sources_feed_resolver() {
        let injection = BuildInjection::from_env(&env(&[("SUPABASE_URL", "https://x.supabase.co")]), "VITE_");

        let runtime = injection.runtime_source();
        assert!(runtime.is_available());
        assert_eq!(runtime.get("SUPABASE_URL"), Some("https://x.supabase.co".to_string()));

        let build = injection.build_time_source();
        assert_eq!(build.get("VITE_SUPABASE_URL"), Some("https://x.supabase.co".to_string()));
        assert_eq!(build.get("SUPABASE_URL"), None);
    }

    #[test]
    fn test_from_files() {
        // Prefix no real environment defines, so process values can't interfere
        const PREFIX: &str = "APPCONFIG_TEST_INJ_";
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join(".env"),
            format!("{PREFIX}SUPABASE_ANON_KEY=file-key\n{PREFIX}SUPABASE_URL=https://file.supabase.co\n"),
        )
        .unwrap();
        fs::write(
            dir.path().join(".env.test"),
            format!("{PREFIX}SUPABASE_ANON_KEY=mode-key\n"),
        )
        .unwrap();

        let injection = BuildInjection::from_files("test", dir.path(), PREFIX).unwrap();
        assert_eq!(injection.value(SecretName::SupabaseAnonKey), Some("mode-key"));
        assert_eq!(injection.value(SecretName::SupabaseUrl), Some("https://file.supabase.co"));
        assert_eq!(
            injection.define_constants()[&format!("import.meta.env.{PREFIX}SUPABASE_ANON_KEY")],
            "\"mode-key\""
        );
    }
}
