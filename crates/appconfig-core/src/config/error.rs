//! Error types for the fallible edges of configuration loading
//!
//! Resolving a secret never fails (absence is a normal outcome). Errors only
//! come from reading and parsing files and injected documents.

/// Errors that can occur while loading settings or build inputs
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse env file {path}: {source}")]
    Dotenv {
        path: String,
        #[source]
        source: dotenvy::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("\"{0}\" cannot be used as a mode name")]
    InvalidMode(String),

    #[error("Invalid runtime global object: {0}")]
    InvalidRuntimeGlobal(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;
