use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// File whose content is pushed to the clipboard
    #[serde(default)]
    pub watch_file: Option<PathBuf>,

    /// Clipboard backend identifier: "wayland", "x11" or "darwin"
    #[serde(default = "default_clipboard_backend")]
    pub clipboard_backend: String,

    /// Log level: error, warn, info, debug, trace
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Optional log file (rotated daily); stderr only when unset
    #[serde(default)]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            watch_file: None,
            clipboard_backend: default_clipboard_backend(),
            log_level: default_log_level(),
            log_file: None,
        }
    }
}

// Default value functions for serde
fn default_clipboard_backend() -> String {
    "wayland".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Values given on the command line; `None` leaves the config value alone
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub watch_file: Option<PathBuf>,
    pub clipboard_backend: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// Apply command-line values on top of this configuration
    pub fn merge(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(watch_file) = overrides.watch_file {
            self.watch_file = Some(watch_file);
        }
        if let Some(backend) = overrides.clipboard_backend {
            self.clipboard_backend = backend;
        }
        if let Some(level) = overrides.log_level {
            self.log_level = level;
        }
        self
    }
}

/// Trait for configuration storage
pub trait ConfigStorage: Send + Sync {
    /// Load configuration from file
    fn load(&self) -> Result<Config, ConfigError>;

    /// Get the config file path
    fn path(&self) -> &Path;
}

/// TOML-based implementation of ConfigStorage
pub struct TomlConfigStorage {
    path: PathBuf,
}

impl TomlConfigStorage {
    /// Create a new TomlConfigStorage with the given path
    pub fn new(path: PathBuf) -> Self {
        TomlConfigStorage { path }
    }
}

impl ConfigStorage for TomlConfigStorage {
    fn load(&self) -> Result<Config, ConfigError> {
        let contents = fs::read_to_string(&self.path).map_err(|source| ConfigError::Read {
            path: self.path.clone(),
            source,
        })?;

        let config: Config = toml::from_str(&contents).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        Ok(config)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_config(contents: &str) -> (tempfile::TempDir, TomlConfigStorage) {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, contents).unwrap();
        (dir, TomlConfigStorage::new(path))
    }

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.watch_file, None);
        assert_eq!(config.clipboard_backend, "wayland");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_file, None);
    }

    #[test]
    fn test_reads_watch_file() {
        let (_dir, storage) = write_config(r#"watch_file = "/tmp/clipboard.txt""#);

        let config = storage.load().unwrap();

        assert_eq!(config.watch_file, Some(PathBuf::from("/tmp/clipboard.txt")));
    }

    #[test]
    fn test_backend_defaults_to_wayland() {
        let (_dir, storage) = write_config(r#"watch_file = "/tmp/clipboard.txt""#);

        let config = storage.load().unwrap();

        assert_eq!(config.clipboard_backend, "wayland");
    }

    #[test]
    fn test_reads_all_keys() {
        let (_dir, storage) = write_config(
            r#"
            watch_file = "/tmp/clipboard.txt"
            clipboard_backend = "x11"
            log_level = "debug"
            log_file = "/tmp/watcher.log"
            "#,
        );

        let config = storage.load().unwrap();

        assert_eq!(config.clipboard_backend, "x11");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_file, Some(PathBuf::from("/tmp/watcher.log")));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let storage = TomlConfigStorage::new(PathBuf::from("/nonexistent/config.toml"));

        assert_eq!(storage.path(), Path::new("/nonexistent/config.toml"));
        let err = storage.load().unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn test_invalid_toml_is_parse_error() {
        let (_dir, storage) = write_config("watch_file = [");

        let err = storage.load().unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn test_overrides_win_over_file_values() {
        let config = Config {
            watch_file: Some(PathBuf::from("/from/config.txt")),
            clipboard_backend: "x11".to_string(),
            ..Config::default()
        };

        let merged = config.merge(ConfigOverrides {
            watch_file: Some(PathBuf::from("/from/cli.txt")),
            clipboard_backend: None,
            log_level: Some("trace".to_string()),
        });

        assert_eq!(merged.watch_file, Some(PathBuf::from("/from/cli.txt")));
        assert_eq!(merged.clipboard_backend, "x11");
        assert_eq!(merged.log_level, "trace");
    }
}
