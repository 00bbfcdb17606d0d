use anyhow::{Context, Result, bail};
use clap::Parser;
use std::path::PathBuf;
use std::sync::mpsc;

use clipboard_txt_watcher::ConfigError;
use clipboard_txt_watcher::cli::Cli;
use clipboard_txt_watcher::clipboard::create_backend;
use clipboard_txt_watcher::logging::init_logger;
use clipboard_txt_watcher::storage::{
    Config, ConfigStorage, TomlConfigStorage, default_config_path,
};
use clipboard_txt_watcher::sync::{SyncOutcome, sync_to_clipboard};
use clipboard_txt_watcher::watcher::FileWatcher;

fn main() -> Result<()> {
    let cli = Cli::parse();

    let loaded = load_config(&cli);
    let file_config = match &loaded {
        Ok((_, config)) => config.clone(),
        Err(_) => Config::default(),
    };
    let config = file_config.merge(cli.overrides());

    init_logger(&config.log_level, config.log_file.as_deref())?;

    match loaded {
        Ok((path, _)) => log::info!("Loaded configuration from {}", path.display()),
        // No config file at the default location is the normal case
        Err(e) if e.is_not_found() && cli.config.is_none() => {
            log::debug!("{}; using defaults", e)
        }
        Err(e) => log::warn!("{}; using defaults", e),
    }

    let Some(watch_file) = config.watch_file.clone() else {
        bail!("No watch file specified. Use --file or config file.");
    };

    log::info!("Watching file: {}", watch_file.display());
    log::info!("Clipboard backend: {}", config.clipboard_backend);

    let backend = create_backend(&config.clipboard_backend);

    let watcher = FileWatcher::start(&watch_file, move |content| {
        match sync_to_clipboard(backend.as_ref(), &content) {
            Ok(SyncOutcome::Written) => log::info!("Clipboard updated from file"),
            Ok(SyncOutcome::Unchanged) => log::debug!("Clipboard already up to date"),
            Err(e) => log::error!("Failed to sync clipboard: {}", e),
        }
    })
    .with_context(|| format!("Failed to watch {}", watch_file.display()))?;

    wait_for_shutdown()?;

    log::info!("Shutting down...");
    if let Err(e) = watcher.stop() {
        log::warn!("{}", e);
    }

    Ok(())
}

/// Load the config file named on the command line, or the default one
fn load_config(cli: &Cli) -> Result<(PathBuf, Config), ConfigError> {
    let path = match &cli.config {
        Some(path) => path.clone(),
        None => default_config_path()?,
    };

    let config = TomlConfigStorage::new(path.clone()).load()?;
    Ok((path, config))
}

/// Block until SIGINT or SIGTERM
fn wait_for_shutdown() -> Result<()> {
    let (tx, rx) = mpsc::channel();

    ctrlc::set_handler(move || {
        let _ = tx.send(());
    })
    .context("Failed to install signal handler")?;

    rx.recv().context("Signal channel closed")?;
    Ok(())
}
