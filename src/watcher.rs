//! Watch a single file and hand its content to a callback on every write
//!
//! ```text
//! inotify / FSEvents
//!       │
//!       ▼
//!  notify watcher ──→ mpsc::channel ──→ worker thread ──→ callback(content)
//!                          ▲
//!  FileWatcher::stop ──────┘ (Stop message)
//! ```
//!
//! The worker thread is the only consumer of the channel, so callbacks run
//! one at a time in the order events were delivered. No coalescing is done:
//! a single save that produces several write events calls back several times.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;

use notify::event::ModifyKind;
use notify::{EventKind, RecommendedWatcher, RecursiveMode, Watcher};

use crate::error::WatchError;

/// Messages consumed by the worker thread
enum WatchMessage {
    Fs(notify::Result<notify::Event>),
    Stop,
}

/// Resources owned by a live watch session, released once by `stop`
struct Session {
    watcher: RecommendedWatcher,
    control: Sender<WatchMessage>,
}

/// An active watch on one file
///
/// Dropping the watcher stops it.
pub struct FileWatcher {
    path: PathBuf,
    stopped: Arc<AtomicBool>,
    session: Mutex<Option<Session>>,
}

impl FileWatcher {
    /// Start watching `path`, calling `callback` with the file's full content
    /// after each write-class modification
    ///
    /// Fails without spawning anything if the path cannot be watched
    /// (missing file, no permission, watch limit reached).
    pub fn start<P, F>(path: P, callback: F) -> Result<Self, WatchError>
    where
        P: AsRef<Path>,
        F: FnMut(String) + Send + 'static,
    {
        let path = path.as_ref().to_path_buf();
        let (tx, rx) = mpsc::channel();

        let event_tx = tx.clone();
        let mut watcher =
            notify::recommended_watcher(move |res: notify::Result<notify::Event>| {
                let _ = event_tx.send(WatchMessage::Fs(res));
            })
            .map_err(WatchError::Backend)?;

        watcher
            .watch(&path, RecursiveMode::NonRecursive)
            .map_err(|source| WatchError::PathUnavailable {
                path: path.clone(),
                source,
            })?;

        let stopped = Arc::new(AtomicBool::new(false));
        let worker = Worker {
            path: path.clone(),
            stopped: Arc::clone(&stopped),
            callback,
        };

        thread::Builder::new()
            .name("file-watcher".to_string())
            .spawn(move || worker.run(rx))
            .map_err(WatchError::Thread)?;

        log::debug!("Watching {:?} for changes", path);

        Ok(FileWatcher {
            path,
            stopped,
            session: Mutex::new(Some(Session {
                watcher,
                control: tx,
            })),
        })
    }

    /// Stop the watch session
    ///
    /// Safe to call repeatedly and from several threads: only the first call
    /// does any work. Once this returns no new callback starts; one that was
    /// already running is left to finish. Never waits on the callback.
    pub fn stop(&self) -> Result<(), WatchError> {
        if self.stopped.swap(true, Ordering::SeqCst) {
            return Ok(());
        }

        let session = self
            .session
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();

        let Some(Session {
            mut watcher,
            control,
        }) = session
        else {
            return Ok(());
        };

        let _ = control.send(WatchMessage::Stop);

        // The notify resource is released when `watcher` drops, whether or
        // not unwatch succeeds (it fails if the file was deleted meanwhile)
        let result = watcher
            .unwatch(&self.path)
            .map_err(|source| WatchError::Release {
                path: self.path.clone(),
                source,
            });

        log::debug!("Stopped watching {:?}", self.path);
        result
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

impl Drop for FileWatcher {
    fn drop(&mut self) {
        if let Err(e) = self.stop() {
            log::debug!("Error while dropping watcher: {}", e);
        }
    }
}

struct Worker<F> {
    path: PathBuf,
    stopped: Arc<AtomicBool>,
    callback: F,
}

impl<F: FnMut(String)> Worker<F> {
    fn run(mut self, rx: Receiver<WatchMessage>) {
        // Iteration ends when every sender is gone (watcher torn down)
        for message in rx {
            if self.is_stopped() {
                break;
            }

            match message {
                WatchMessage::Stop => break,
                WatchMessage::Fs(Ok(event)) => {
                    if is_write_event(&event.kind) {
                        self.deliver();
                    }
                }
                WatchMessage::Fs(Err(e)) => {
                    log::warn!("File watcher error: {}", e);
                }
            }
        }

        log::debug!("Watcher thread for {:?} exiting", self.path);
    }

    fn deliver(&mut self) {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) => {
                // Transient (file mid-replace, permissions flipped); wait for the next event
                log::debug!("Skipping change event, failed to read {:?}: {}", self.path, e);
                return;
            }
        };

        if self.is_stopped() {
            return;
        }

        (self.callback)(content);
    }

    fn is_stopped(&self) -> bool {
        self.stopped.load(Ordering::SeqCst)
    }
}

/// Content modifications only; metadata, rename, create, remove and access
/// events are not writes. `Modify(Any)` comes from backends that can't say
/// what changed.
fn is_write_event(kind: &EventKind) -> bool {
    matches!(
        kind,
        EventKind::Modify(ModifyKind::Data(_)) | EventKind::Modify(ModifyKind::Any)
    )
}
