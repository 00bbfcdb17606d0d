pub mod config;

use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub use config::{Config, ConfigOverrides, ConfigStorage, TomlConfigStorage};

const APP_DIR: &str = "clipboard-txt-watcher";

/// Default config file location
///
/// XDG Base Directory Specification:
/// - Config: $XDG_CONFIG_HOME/clipboard-txt-watcher/config.toml
///   (default: ~/.config/clipboard-txt-watcher/config.toml)
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    let config_dir = match env::var("XDG_CONFIG_HOME") {
        Ok(xdg_config) if !xdg_config.is_empty() => PathBuf::from(xdg_config).join(APP_DIR),
        _ => {
            let home = env::var("HOME").map_err(|_| ConfigError::NoHome)?;
            PathBuf::from(home).join(".config").join(APP_DIR)
        }
    };

    Ok(config_dir.join("config.toml"))
}
