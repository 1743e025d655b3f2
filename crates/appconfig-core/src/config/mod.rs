//! Resolver settings and error types
//!
//! Supports settings at two levels:
//! - user-level (`<config dir>/appconfig/settings.yaml`)
//! - workspace-level (`.config/appconfig/settings.yaml`)

mod error;
mod settings;

pub use error::{ConfigError, ConfigResult};
pub use settings::{ResolverSettings, SettingsFile, SettingsLevel, DEFAULT_PREFIX};
