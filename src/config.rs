//! Configuration loading and management
//!
//! Handles parsing of `.trak.toml` configuration files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::storage::DEFAULT_STORE_FILE;

/// Name of the configuration file looked up in the working directory
pub const CONFIG_FILE: &str = ".trak.toml";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Store configuration
    #[serde(default)]
    pub store: StoreConfig,
}

/// Store-related configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StoreConfig {
    /// Path to the store file, relative to the working directory
    #[serde(default = "default_store_file")]
    pub file: PathBuf,
}

fn default_store_file() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            file: default_store_file(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Load configuration from a directory, or return defaults when no
    /// config file exists there.
    ///
    /// A present-but-unreadable file is an error, not a silent default.
    pub fn load_from_dir(dir: &Path) -> Result<Self> {
        let config_path = dir.join(CONFIG_FILE);
        if config_path.exists() {
            Self::load(&config_path)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn defaults_when_config_file_is_missing() {
        let dir = TempDir::new().expect("tempdir");
        let config = Config::load_from_dir(dir.path()).expect("load");
        assert_eq!(config.store.file, PathBuf::from("tasks.json"));
    }

    #[test]
    fn store_file_override_is_honored() {
        let dir = TempDir::new().expect("tempdir");
        let content = r#"
[store]
file = "notes/todo.json"
"#;
        fs::write(dir.path().join(CONFIG_FILE), content.trim()).expect("write config");

        let config = Config::load_from_dir(dir.path()).expect("load");
        assert_eq!(config.store.file, PathBuf::from("notes/todo.json"));
    }

    #[test]
    fn invalid_config_is_an_error() {
        let dir = TempDir::new().expect("tempdir");
        fs::write(dir.path().join(CONFIG_FILE), "store = 123").expect("write config");

        assert!(Config::load_from_dir(dir.path()).is_err());
    }
}
