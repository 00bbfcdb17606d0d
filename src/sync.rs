//! File-to-clipboard synchronization
//!
//! One synchronization attempt reads the clipboard, compares it with the
//! candidate text and writes only when they differ. Writing the same text
//! twice is a no-op the second time, so redundant triggers are harmless.

use crate::clipboard::ClipboardBackend;
use crate::error::ClipboardError;

/// Result of a successful synchronization attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncOutcome {
    /// Clipboard already held the text, nothing was written
    Unchanged,
    /// Clipboard differed and was overwritten
    Written,
}

/// Push `text` to the clipboard unless it already holds exactly that text
///
/// A failed read is returned before any write is attempted: an unreadable
/// clipboard is unknown, not empty. Comparison is byte-for-byte with no
/// line-ending or whitespace normalization.
pub fn sync_to_clipboard<B>(backend: &B, text: &str) -> Result<SyncOutcome, ClipboardError>
where
    B: ClipboardBackend + ?Sized,
{
    let current = backend.read_text()?;

    if current == text {
        return Ok(SyncOutcome::Unchanged);
    }

    backend.write_text(text)?;
    Ok(SyncOutcome::Written)
}
