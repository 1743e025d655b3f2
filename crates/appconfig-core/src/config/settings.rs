//! Resolver settings, optionally loaded from YAML

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::ConfigResult;

/// Conventional prefix marking a variable for client-side exposure
pub const DEFAULT_PREFIX: &str = "VITE_";

/// Tunables for the resolver
///
/// ```yaml
/// prefix: VITE_
/// extra_placeholder_patterns: ["changeme"]
/// dev_fallback:
///   SUPABASE_URL: http://localhost:54321
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResolverSettings {
    /// Prefix tried before the bare variable name in every source
    pub prefix: String,
    /// Placeholder substrings checked on top of the standard set
    pub extra_placeholder_patterns: Vec<String>,
    /// Manual local overrides, consulted last
    pub dev_fallback: BTreeMap<String, String>,
}

impl Default for ResolverSettings {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            extra_placeholder_patterns: Vec::new(),
            dev_fallback: BTreeMap::new(),
        }
    }
}

impl ResolverSettings {
    /// Parse settings from a YAML document; omitted keys keep their defaults
    pub fn from_yaml_str(yaml: &str) -> ConfigResult<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Serialize to YAML
    pub fn to_yaml_string(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Load the most specific settings file that exists
    ///
    /// The workspace file wins over the user file; with neither present the
    /// defaults are returned.
    pub fn discover(workspace_root: impl AsRef<Path>) -> ConfigResult<Self> {
        let workspace = SettingsFile::workspace(workspace_root);
        if workspace.exists() {
            return workspace.load();
        }
        SettingsFile::user().load()
    }
}

/// Settings level (user or workspace)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsLevel {
    /// User-level settings (~/.config/appconfig/settings.yaml)
    User,
    /// Workspace-level settings (.config/appconfig/settings.yaml in the project root)
    Workspace,
}

impl SettingsLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsLevel::User => "user",
            SettingsLevel::Workspace => "workspace",
        }
    }
}

/// A settings file on disk
///
/// # Example
///
/// ```no_run
/// use appconfig_core::config::SettingsFile;
///
/// let settings = SettingsFile::workspace("/path/to/project").load().unwrap();
/// assert_eq!(settings.prefix, "VITE_");
/// ```
#[derive(Debug, Clone)]
pub struct SettingsFile {
    path: PathBuf,
    level: SettingsLevel,
}

impl SettingsFile {
    /// Settings file at a specific path
    pub fn new(path: impl Into<PathBuf>, level: SettingsLevel) -> Self {
        Self {
            path: path.into(),
            level,
        }
    }

    /// User-level settings (~/.config/appconfig/settings.yaml)
    pub fn user() -> Self {
        // XDG config directory on Linux, ~/Library/Application Support on macOS
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".config"));
        Self::new(config_dir.join("appconfig").join("settings.yaml"), SettingsLevel::User)
    }

    /// Workspace-level settings (.config/appconfig/settings.yaml)
    pub fn workspace(workspace_root: impl AsRef<Path>) -> Self {
        let path = workspace_root
            .as_ref()
            .join(".config")
            .join("appconfig")
            .join("settings.yaml");
        Self::new(path, SettingsLevel::Workspace)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn level(&self) -> SettingsLevel {
        self.level
    }

    /// Check if the file exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load settings; a missing file yields the defaults
    pub fn load(&self) -> ConfigResult<ResolverSettings> {
        if !self.exists() {
            return Ok(ResolverSettings::default());
        }
        let content = fs::read_to_string(&self.path)?;
        ResolverSettings::from_yaml_str(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let settings = ResolverSettings::default();
        assert_eq!(settings.prefix, "VITE_");
        assert!(settings.extra_placeholder_patterns.is_empty());
        assert!(settings.dev_fallback.is_empty());
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let settings = ResolverSettings::from_yaml_str(
            "dev_fallback:\n  SUPABASE_URL: http://localhost:54321\n",
        )
        .unwrap();

        assert_eq!(settings.prefix, "VITE_");
        assert_eq!(
            settings.dev_fallback.get("SUPABASE_URL").map(String::as_str),
            Some("http://localhost:54321")
        );
        assert_eq!(ResolverSettings::from_yaml_str("  \n").unwrap(), ResolverSettings::default());
    }

    #[test]
    fn test_yaml_round_trip() {
        let mut settings = ResolverSettings::default();
        settings.prefix = "PUBLIC_".to_string();
        let yaml = settings.to_yaml_string().unwrap();
        assert_eq!(ResolverSettings::from_yaml_str(&yaml).unwrap(), settings);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = ResolverSettings::from_yaml_str("prefix: [unclosed").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_workspace_file() {
        let dir = TempDir::new().unwrap();
        let file = SettingsFile::workspace(dir.path());
        assert_eq!(file.level(), SettingsLevel::Workspace);
        assert!(!file.exists());
        assert_eq!(file.load().unwrap(), ResolverSettings::default());

        fs::create_dir_all(file.path().parent().unwrap()).unwrap();
        fs::write(file.path(), "prefix: PUBLIC_\nextra_placeholder_patterns: [changeme]\n").unwrap();

        let settings = ResolverSettings::discover(dir.path()).unwrap();
        assert_eq!(settings.prefix, "PUBLIC_");
        assert_eq!(settings.extra_placeholder_patterns, vec!["changeme".to_string()]);
    }

    #[test]
    fn test_user_path() {
        let file = SettingsFile::user();
        assert_eq!(file.level().as_str(), "user");
        assert!(file.path().ends_with("appconfig/settings.yaml"));
    }
}
