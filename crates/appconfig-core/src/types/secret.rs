//! Logical secret names

use std::fmt;

/// The three secrets the front-end needs to talk to its backends
///
/// Each secret has a bare variable name (`SUPABASE_URL`) which build tools
/// usually expose with a client-side prefix (`VITE_SUPABASE_URL`), and a
/// field path (`supabase.url`) inside [`ResolvedConfig`](super::ResolvedConfig).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SecretName {
    /// Supabase project URL
    SupabaseUrl,
    /// Supabase anon/public key
    SupabaseAnonKey,
    /// Userbase application ID
    UserbaseAppId,
}

impl SecretName {
    /// All secrets, in the order they appear in the resolved configuration
    pub const ALL: [SecretName; 3] = [
        SecretName::SupabaseUrl,
        SecretName::SupabaseAnonKey,
        SecretName::UserbaseAppId,
    ];

    /// Variable name without any build-tool prefix
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretName::SupabaseUrl => "SUPABASE_URL",
            SecretName::SupabaseAnonKey => "SUPABASE_ANON_KEY",
            SecretName::UserbaseAppId => "USERBASE_APP_ID",
        }
    }

    /// Dotted path of the field this secret fills
    pub fn field_path(&self) -> &'static str {
        match self {
            SecretName::SupabaseUrl => "supabase.url",
            SecretName::SupabaseAnonKey => "supabase.key",
            SecretName::UserbaseAppId => "userbase.appId",
        }
    }

    /// Variable name with the given prefix applied
    pub fn prefixed(&self, prefix: &str) -> String {
        format!("{}{}", prefix, self.as_str())
    }

    /// Variable names to probe in each source, prefixed form first
    pub fn candidates(&self, prefix: &str) -> Vec<String> {
        if prefix.is_empty() {
            return vec![self.as_str().to_string()];
        }
        vec![self.prefixed(prefix), self.as_str().to_string()]
    }

    /// Look a secret up by its bare variable name or field path
    pub fn from_str(s: &str) -> Option<Self> {
        SecretName::ALL
            .into_iter()
            .find(|name| name.as_str() == s || name.field_path() == s)
    }
}

impl fmt::Display for SecretName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
