use super::backend::ClipboardBackend;
use super::command::{CommandRunner, SystemRunner, decode_text};
use crate::error::ClipboardError;

/// macOS pasteboard backend using pbpaste/pbcopy
pub struct DarwinBackend<R = SystemRunner> {
    runner: R,
}

impl DarwinBackend {
    pub fn new() -> Self {
        DarwinBackend {
            runner: SystemRunner,
        }
    }
}

impl Default for DarwinBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> DarwinBackend<R> {
    pub fn with_runner(runner: R) -> Self {
        DarwinBackend { runner }
    }
}

impl<R: CommandRunner> ClipboardBackend for DarwinBackend<R> {
    fn read_text(&self) -> Result<String, ClipboardError> {
        let bytes = self.runner.output("pbpaste", &[])?;
        decode_text("pbpaste", bytes)
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.runner.run_with_stdin("pbcopy", &[], text)?;
        log::debug!("Wrote {} bytes text to clipboard", text.len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "macOS"
    }
}
