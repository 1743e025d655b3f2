//! Resolved configuration types

use serde::{Deserialize, Serialize};

use super::secret::SecretName;

/// Supabase connection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupabaseConfig {
    /// Project URL
    pub url: Option<String>,
    /// Anon/public API key
    pub key: Option<String>,
}

/// Userbase connection settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserbaseConfig {
    /// Application ID
    pub app_id: Option<String>,
}

/// The configuration handed to backend SDK initializers
///
/// Serializes to `{ "supabase": { "url", "key" }, "userbase": { "appId" } }`,
/// with absent values as `null`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedConfig {
    pub supabase: SupabaseConfig,
    pub userbase: UserbaseConfig,
}

impl ResolvedConfig {
    /// Create an empty configuration (every value absent)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the value stored for a secret
    pub fn value(&self, name: SecretName) -> Option<&str> {
        match name {
            SecretName::SupabaseUrl => self.supabase.url.as_deref(),
            SecretName::SupabaseAnonKey => self.supabase.key.as_deref(),
            SecretName::UserbaseAppId => self.userbase.app_id.as_deref(),
        }
    }

    /// Set (or clear) the value stored for a secret
    pub fn set(&mut self, name: SecretName, value: Option<String>) {
        match name {
            SecretName::SupabaseUrl => self.supabase.url = value,
            SecretName::SupabaseAnonKey => self.supabase.key = value,
            SecretName::UserbaseAppId => self.userbase.app_id = value,
        }
    }

    /// Builder-style setter
    pub fn with(mut self, name: SecretName, value: impl Into<String>) -> Self {
        self.set(name, Some(value.into()));
        self
    }

    /// Serialize to the JSON shape consumed by SDK bootstrap code
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "supabase": { "url": self.supabase.url, "key": self.supabase.key },
            "userbase": { "appId": self.userbase.app_id },
        })
    }
}

/// Result of resolving one secret, with source tracking
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedVariable {
    /// The accepted value
    pub value: String,
    /// Which source provided the value
    pub source: String,
    /// The exact variable name that matched (e.g. `VITE_SUPABASE_URL`)
    pub variable: String,
}

/// Per-field readiness report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigurationStatus {
    /// `supabase.url` is acceptably set
    pub supabase_url: bool,
    /// `supabase.key` is acceptably set
    pub supabase_key: bool,
    /// `userbase.appId` is acceptably set
    pub userbase_app_id: bool,
}

impl ConfigurationStatus {
    /// Status of a single field
    pub fn get(&self, name: SecretName) -> bool {
        match name {
            SecretName::SupabaseUrl => self.supabase_url,
            SecretName::SupabaseAnonKey => self.supabase_key,
            SecretName::UserbaseAppId => self.userbase_app_id,
        }
    }

    pub(crate) fn set(&mut self, name: SecretName, ok: bool) {
        match name {
            SecretName::SupabaseUrl => self.supabase_url = ok,
            SecretName::SupabaseAnonKey => self.supabase_key = ok,
            SecretName::UserbaseAppId => self.userbase_app_id = ok,
        }
    }

    /// True when every field is set
    pub fn all(&self) -> bool {
        self.supabase_url && self.supabase_key && self.userbase_app_id
    }

    /// `(field path, ok)` pairs in declaration order
    pub fn entries(&self) -> Vec<(&'static str, bool)> {
        SecretName::ALL
            .into_iter()
            .map(|name| (name.field_path(), self.get(name)))
            .collect()
    }

    /// Field paths that are not acceptably set
    pub fn failing(&self) -> Vec<&'static str> {
        self.entries()
            .into_iter()
            .filter(|(_, ok)| !ok)
            .map(|(path, _)| path)
            .collect()
    }
}
