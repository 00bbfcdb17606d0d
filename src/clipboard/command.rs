use std::io::Write;
use std::process::{Command, Output, Stdio};

use crate::error::ClipboardError;

/// Runs the external programs a clipboard backend delegates to
/// Lets backends be exercised without the real clipboard tools installed
pub trait CommandRunner: Send + Sync {
    /// Run `program` with `args` and return its stdout
    fn output(&self, program: &str, args: &[&str]) -> Result<Vec<u8>, ClipboardError>;

    /// Run `program` with `args`, feeding `stdin` to it
    fn run_with_stdin(&self, program: &str, args: &[&str], stdin: &str)
    -> Result<(), ClipboardError>;
}

/// CommandRunner backed by `std::process::Command`
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn output(&self, program: &str, args: &[&str]) -> Result<Vec<u8>, ClipboardError> {
        let output = Command::new(program)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .map_err(|source| ClipboardError::BackendUnavailable {
                program: program.to_string(),
                source,
            })?;

        check_status(program, &output)?;
        Ok(output.stdout)
    }

    fn run_with_stdin(
        &self,
        program: &str,
        args: &[&str],
        stdin: &str,
    ) -> Result<(), ClipboardError> {
        // wl-copy forks into the background to serve the selection and keeps
        // inherited pipes open, so only stdin is piped
        let mut child = Command::new(program)
            .args(args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|source| ClipboardError::BackendUnavailable {
                program: program.to_string(),
                source,
            })?;

        // A program that exits early closes its stdin; the exit status is the
        // real error then, so the write result is only reported afterwards
        let write_result = match child.stdin.take() {
            Some(mut pipe) => pipe.write_all(stdin.as_bytes()),
            None => Ok(()),
        };

        let status = child
            .wait()
            .map_err(|source| ClipboardError::BackendUnavailable {
                program: program.to_string(),
                source,
            })?;

        if !status.success() {
            return Err(ClipboardError::ExecutionError {
                program: program.to_string(),
                status,
                stderr: String::new(),
            });
        }

        write_result.map_err(|source| ClipboardError::BackendUnavailable {
            program: program.to_string(),
            source,
        })?;

        log::trace!("{} accepted {} bytes", program, stdin.len());
        Ok(())
    }
}

fn check_status(program: &str, output: &Output) -> Result<(), ClipboardError> {
    if output.status.success() {
        return Ok(());
    }

    Err(ClipboardError::ExecutionError {
        program: program.to_string(),
        status: output.status,
        stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
    })
}

/// Decode clipboard bytes returned by `program`
pub(crate) fn decode_text(program: &str, bytes: Vec<u8>) -> Result<String, ClipboardError> {
    String::from_utf8(bytes).map_err(|_| ClipboardError::InvalidUtf8 {
        program: program.to_string(),
    })
}
