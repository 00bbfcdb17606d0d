//! clipboard-txt-watcher - keep the system clipboard in sync with a text file
//!
//! Whenever the watched file is written, its content is pushed to the
//! clipboard unless the clipboard already holds exactly that text.

pub mod cli;
pub mod clipboard;
pub mod error;
pub mod logging;
pub mod storage;
pub mod sync;
pub mod watcher;

pub use error::{ClipboardError, ConfigError, WatchError};
