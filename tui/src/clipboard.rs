//! System clipboard
//!
//! Backs the copy-e-mail button with `arboard`. Opening the clipboard can
//! fail (no display server, SSH session), so the handle is created on the
//! first copy and a failure is reported as a refused write.

use folio_core::Clipboard;
use thiserror::Error;

/// Clipboard failures
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened
    #[error("System clipboard unavailable: {0}")]
    Unavailable(String),

    /// The platform refused the write
    #[error("System clipboard write failed: {0}")]
    Write(String),
}

/// Lazily opened platform clipboard
#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<arboard::Clipboard>,
}

impl SystemClipboard {
    /// Clipboard that opens on first use
    pub fn new() -> Self {
        Self::default()
    }

    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if self.inner.is_none() {
            let opened =
                arboard::Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
            self.inner = Some(opened);
        }

        let Some(clipboard) = self.inner.as_mut() else {
            return Err(ClipboardError::Unavailable("not opened".to_string()));
        };
        clipboard
            .set_text(text)
            .map_err(|e| ClipboardError::Write(e.to_string()))
    }
}

impl Clipboard for SystemClipboard {
    fn write_text(&mut self, text: &str) -> bool {
        match self.set_text(text) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Copy to clipboard failed");
                if matches!(e, ClipboardError::Write(_)) {
                    self.inner = None;
                }
                false
            }
        }
    }
}
