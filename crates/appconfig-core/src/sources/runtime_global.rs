//! Runtime global object source

use std::collections::HashMap;

use serde_json::Value;

use super::traits::VariableSource;
use crate::config::{ConfigError, ConfigResult};

/// The runtime global mapping (`__ENV__`) a deployment pipeline injects
///
/// Used where build-time injection is unavailable. Only string members are
/// visible. A page served without the object is modelled by
/// [`RuntimeGlobalSource::missing`], which reports itself unavailable.
///
/// # Example
///
/// ```
/// use appconfig_core::sources::{VariableSource, RuntimeGlobalSource};
///
/// let global = RuntimeGlobalSource::from_json_str(r#"{"SUPABASE_URL": "https://abc.supabase.co"}"#).unwrap();
/// assert!(global.has("SUPABASE_URL"));
/// ```
#[derive(Debug, Clone)]
pub struct RuntimeGlobalSource {
    values: HashMap<String, String>,
    present: bool,
}

impl RuntimeGlobalSource {
    /// Global object holding the given values
    pub fn from_map<I, K, V>(values: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            values: values.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
            present: true,
        }
    }

    /// The global object was not injected at all
    pub fn missing() -> Self {
        Self {
            values: HashMap::new(),
            present: false,
        }
    }

    /// Build from a JSON object
    ///
    /// Non-string members (including `null`) are dropped. Any value that is
    /// not an object is rejected.
    pub fn from_json(value: &Value) -> ConfigResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            ConfigError::InvalidRuntimeGlobal(format!("expected a JSON object, got {}", kind(value)))
        })?;

        let values = object
            .iter()
            .filter_map(|(k, v)| v.as_str().map(|s| (k.clone(), s.to_string())))
            .collect();

        Ok(Self { values, present: true })
    }

    /// Parse a JSON document holding the global object
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(&value)
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl VariableSource for RuntimeGlobalSource {
    fn name(&self) -> &str {
        "runtime"
    }

    fn is_available(&self) -> bool {
        self.present
    }

    fn get(&self, variable: &str) -> Option<String> {
        self.values.get(variable).cloned()
    }
}
