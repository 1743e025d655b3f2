//! Mode-aware `.env` file loading

use std::collections::BTreeMap;
use std::env;
use std::path::Path;

use crate::config::{ConfigError, ConfigResult};

/// File names read for a mode, lowest priority first
pub fn env_file_names(mode: &str) -> [String; 4] {
    [
        ".env".to_string(),
        ".env.local".to_string(),
        format!(".env.{}", mode),
        format!(".env.{}.local", mode),
    ]
}

/// Load the variables a build in `mode` would see
///
/// Reads `.env`, `.env.local`, `.env.<mode>` and `.env.<mode>.local` from
/// `dir`; later files override earlier ones and missing files are skipped.
/// Only keys starting with one of `prefixes` are kept (`""` keeps
/// everything). Process environment variables matching a prefix override
/// file values. The process environment itself is never modified.
pub fn load_env(
    mode: &str,
    dir: impl AsRef<Path>,
    prefixes: &[&str],
) -> ConfigResult<BTreeMap<String, String>> {
    if mode == "local" {
        return Err(ConfigError::InvalidMode(mode.to_string()));
    }

    let matches = |key: &str| prefixes.iter().any(|p| key.starts_with(p));
    let mut vars = BTreeMap::new();

    for file in env_file_names(mode) {
        let path = dir.as_ref().join(&file);
        if !path.is_file() {
            continue;
        }
        let dotenv_err = |source: dotenvy::Error| ConfigError::Dotenv {
            path: path.display().to_string(),
            source,
        };
        for item in dotenvy::from_path_iter(&path).map_err(dotenv_err)? {
            let (key, value) = item.map_err(dotenv_err)?;
            if matches(&key) {
                vars.insert(key, value);
            }
        }
    }

    // Non UTF-8 entries can't be looked up by name anyway
    let process = env::vars_os()
        .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)));
    for (key, value) in process {
        if matches(&key) {
            vars.insert(key, value);
        }
    }

    Ok(vars)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const P: &str = "APPCONFIG_TEST_FILES_";

    fn write(dir: &TempDir, name: &str, content: &str) {
        fs::write(dir.path().join(name), content).unwrap();
    }

    #[test]
    fn test_file_names() {
        assert_eq!(
            env_file_names("production"),
            [".env", ".env.local", ".env.production", ".env.production.local"]
                .map(String::from)
        );
    }

    #[test]
    fn test_layering_order() {
        let dir = TempDir::new().unwrap();
        write(&dir, ".env", &format!("{P}A=base\n{P}B=base\n{P}C=base\n{P}D=base\n"));
        write(&dir, ".env.local", &format!("{P}B=local\n"));
        write(&dir, ".env.staging", &format!("{P}C=mode\n# comment\n"));
        write(&dir, ".env.staging.local", &format!("{P}D=\"mode local\"\n"));
        write(&dir, ".env.production", &format!("{P}A=wrong-mode\n"));

        let vars = load_env("staging", dir.path(), &[P]).unwrap();
        assert_eq!(vars[&format!("{P}A")], "base");
        assert_eq!(vars[&format!("{P}B")], "local");
        assert_eq!(vars[&format!("{P}C")], "mode");
        assert_eq!(vars[&format!("{P}D")], "mode local");
    }

    #[test]
    fn test_prefix_filter_and_missing_files() {
        let dir = TempDir::new().unwrap();
        write(&dir, ".env", &format!("{P}KEEP=1\nOTHER_APPCONFIG_DROP=2\n"));

        let vars = load_env("development", dir.path(), &[P]).unwrap();
        assert_eq!(vars.len(), 1);
        assert!(vars.contains_key(&format!("{P}KEEP")));

        let empty = TempDir::new().unwrap();
        assert!(load_env("development", empty.path(), &[P]).unwrap().is_empty());
    }

    #[test]
    fn test_process_env_wins() {
        let key = "APPCONFIG_TEST_PROC_OVERRIDE_X";
        let dir = TempDir::new().unwrap();
        write(&dir, ".env", &format!("{key}=from-file\n"));
        env::set_var(key, "from-process");

        let vars = load_env("development", dir.path(), &["APPCONFIG_TEST_PROC_"]).unwrap();
        assert_eq!(vars[key], "from-process");

        env::remove_var(key);
    }

    #[test]
    fn test_local_mode_rejected() {
        let dir = TempDir::new().unwrap();
        assert!(matches!(
            load_env("local", dir.path(), &[""]),
            Err(ConfigError::InvalidMode(_))
        ));
    }

    #[test]
    fn test_malformed_file() {
        let dir = TempDir::new().unwrap();
        write(&dir, ".env", "NOT A VALID LINE\n");

        let err = load_env("development", dir.path(), &[P]).unwrap_err();
        assert!(matches!(err, ConfigError::Dotenv { .. }));
        assert!(err.to_string().contains(".env"));
    }
}
