use clap::{ArgAction, Parser};
use std::path::PathBuf;

use crate::storage::ConfigOverrides;

#[derive(Debug, Parser)]
#[command(name = "clipboard-txt-watcher")]
#[command(version, disable_version_flag = true)]
#[command(about = "Copy a text file to the clipboard whenever it changes", long_about = None)]
pub struct Cli {
    /// Show version
    #[arg(short = 'v', long = "version", action = ArgAction::Version)]
    version: Option<bool>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Path to file to watch
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Clipboard backend (wayland, x11 or darwin)
    #[arg(short, long, value_name = "NAME")]
    pub backend: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(short, long, value_name = "LEVEL")]
    pub log_level: Option<String>,
}

impl Cli {
    /// Command-line values that take precedence over the config file
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            watch_file: self.file.clone(),
            clipboard_backend: self.backend.clone(),
            log_level: self.log_level.clone(),
        }
    }
}
