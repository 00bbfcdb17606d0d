use anyhow::{Context, Result};
use log::{LevelFilter, Log, Metadata, Record};
use std::fs;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use tracing_appender::rolling::{RollingFileAppender, Rotation};

/// Logger that writes every record to stderr and to a rolling log file
struct WatcherLogger {
    file_writer: Mutex<RollingFileAppender>,
    level: LevelFilter,
}

impl Log for WatcherLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let line = format!(
            "{} [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.level(),
            record.args()
        );

        eprintln!("{}", line);

        if let Ok(mut writer) = self.file_writer.lock() {
            let _ = writeln!(writer, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut writer) = self.file_writer.lock() {
            let _ = writer.flush();
        }
    }
}

/// Parse log level string to LevelFilter
pub fn parse_level(level_str: &str) -> LevelFilter {
    match level_str.to_lowercase().as_str() {
        "off" => LevelFilter::Off,
        "error" => LevelFilter::Error,
        "warn" => LevelFilter::Warn,
        "info" => LevelFilter::Info,
        "debug" => LevelFilter::Debug,
        "trace" => LevelFilter::Trace,
        _ => LevelFilter::Info, // Default to info
    }
}

/// Initialize the global logger
///
/// Without a log file this is env_logger at `level` (RUST_LOG still wins).
/// With one, records also go to a daily-rotated file next to `log_file`.
pub fn init_logger(level: &str, log_file: Option<&Path>) -> Result<()> {
    let level = parse_level(level);

    let Some(log_file_path) = log_file else {
        env_logger::Builder::new()
            .filter_level(level)
            .parse_default_env()
            .try_init()
            .context("Failed to set global logger")?;
        return Ok(());
    };

    let directory = log_file_path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    fs::create_dir_all(directory).context("Failed to create log directory")?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .max_log_files(3)
        .filename_prefix(
            log_file_path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("clipboard-txt-watcher"),
        )
        .filename_suffix(
            log_file_path
                .extension()
                .and_then(|s| s.to_str())
                .unwrap_or("log"),
        )
        .build(directory)
        .context("Failed to create rotating file appender")?;

    let logger = WatcherLogger {
        file_writer: Mutex::new(file_appender),
        level,
    };

    log::set_boxed_logger(Box::new(logger)).context("Failed to set global logger")?;
    log::set_max_level(level);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("error"), LevelFilter::Error);
        assert_eq!(parse_level("WARN"), LevelFilter::Warn);
        assert_eq!(parse_level("debug"), LevelFilter::Debug);
        assert_eq!(parse_level("trace"), LevelFilter::Trace);
        assert_eq!(parse_level("off"), LevelFilter::Off);
    }

    #[test]
    fn test_parse_level_defaults_to_info() {
        assert_eq!(parse_level("info"), LevelFilter::Info);
        assert_eq!(parse_level("verbose"), LevelFilter::Info);
        assert_eq!(parse_level(""), LevelFilter::Info);
    }
}
