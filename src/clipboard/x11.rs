use super::backend::ClipboardBackend;
use super::command::{CommandRunner, SystemRunner, decode_text};
use crate::error::ClipboardError;

const SELECTION: [&str; 2] = ["-selection", "clipboard"];

/// X11 clipboard backend using xclip on the CLIPBOARD selection
pub struct X11Backend<R = SystemRunner> {
    runner: R,
}

impl X11Backend {
    pub fn new() -> Self {
        X11Backend {
            runner: SystemRunner,
        }
    }
}

impl Default for X11Backend {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: CommandRunner> X11Backend<R> {
    pub fn with_runner(runner: R) -> Self {
        X11Backend { runner }
    }
}

impl<R: CommandRunner> ClipboardBackend for X11Backend<R> {
    fn read_text(&self) -> Result<String, ClipboardError> {
        let bytes = self
            .runner
            .output("xclip", &[SELECTION[0], SELECTION[1], "-o"])?;
        decode_text("xclip", bytes)
    }

    fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        self.runner.run_with_stdin("xclip", &SELECTION, text)?;
        log::debug!("Wrote {} bytes text to clipboard", text.len());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "X11"
    }
}
