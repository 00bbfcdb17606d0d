use super::backend::ClipboardBackend;
use super::command::{CommandRunner, SystemRunner, decode_text};
use crate::error::ClipboardError;

/// Wayland clipboard backend using wl-clipboard tools
/// Requires wl-paste and wl-copy to be installed
pub struct WaylandBackend<R = SystemRunner> {
    runner: R,
}

impl WaylandBackend {
    /// Create a new Wayland clipboard backend
    pub fn new() -> Self {
        WaylandBackend {
            runner: SystemRunner,
        }
    }
}

impl Default for WaylandBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> WaylandBackend<R> {
    pub fn with_runner(runner: R) -> Self {
        WaylandBackend { runner }
    }
}

impl<R: CommandRunner> ClipboardBackend for WaylandBackend<R> {
    fn read_text(&self) -> Result<String, ClipboardError> {
        // -n: don't append a trailing newline
        let bytes = self.runner.output("wl-paste", &["-n"])?;
        decode_text("wl-paste", bytes)
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.runner.run_with_stdin("wl-copy", &[], text)?;
        log::debug!("Wrote {} bytes text to clipboard", text.len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "Wayland"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clipboard::command::testing::RecordingRunner;

    #[test]
    fn test_read_calls_wl_paste() {
        let backend = WaylandBackend::with_runner(RecordingRunner::returning("clipboard content"));

        let content = backend.read_text().unwrap();

        assert_eq!(content, "clipboard content");
        let call = backend.runner.last_call();
        assert_eq!(call.program, "wl-paste");
        assert_eq!(call.args, vec!["-n"]);
    }

    #[test]
    fn test_write_calls_wl_copy_with_stdin() {
        let backend = WaylandBackend::with_runner(RecordingRunner::default());

        backend.write_text("test content\n").unwrap();

        let call = backend.runner.last_call();
        assert_eq!(call.program, "wl-copy");
        assert!(call.args.is_empty());
        assert_eq!(call.stdin.as_deref(), Some("test content\n"));
    }

    #[test]
    fn test_errors_propagate() {
        let backend = WaylandBackend::with_runner(RecordingRunner::failing());

        assert!(matches!(
            backend.read_text(),
            Err(ClipboardError::BackendUnavailable { .. })
        ));
        assert!(backend.write_text("content").is_err());
    }
}
