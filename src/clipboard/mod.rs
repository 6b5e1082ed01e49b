//! Clipboard delivery
//!
//! [`ClipboardSink`] commits one string per call as `text/plain`. A commit
//! arms a one-shot [`PendingCopy`] and fires it straight away in the same
//! call, so the write happens inside the user gesture that asked for it.
//! `&mut self` rules out a second commit while one is in flight.

mod backend;

pub use backend::{
    ClipboardBackend, Delivery, DetachedClipboard, HOLDER_READY, MemoryClipboard, SystemClipboard,
    serve_until_replaced,
};

use crate::error::ClipboardError;

/// A copy payload that can be delivered exactly once.
#[derive(Debug)]
#[must_use = "a pending copy does nothing until fired"]
pub struct PendingCopy {
    text: String,
}

impl PendingCopy {
    /// Arm a copy of `text`, trimmed when `trim` is set.
    pub fn arm(text: &str, trim: bool) -> Self {
        let text = if trim { text.trim() } else { text };
        Self {
            text: text.to_string(),
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Deliver the payload. Consumes the copy whether or not the write succeeds.
    pub fn fire<B: ClipboardBackend + ?Sized>(self, backend: &mut B) -> Result<(), ClipboardError> {
        backend.set_text(&self.text)
    }
}

/// Commits final strings to a clipboard backend.
pub struct ClipboardSink<B: ClipboardBackend> {
    backend: B,
    trim: bool,
}

impl<B: ClipboardBackend> ClipboardSink<B> {
    #[must_use]
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            trim: true,
        }
    }

    /// Keep surrounding whitespace instead of trimming it.
    #[must_use]
    pub fn with_trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    /// Put `text` on the clipboard.
    ///
    /// # Errors
    ///
    /// Returns a [`ClipboardError`] if the platform refuses the write; in
    /// that case the clipboard is left as it was.
    pub fn commit(&mut self, text: &str) -> Result<(), ClipboardError> {
        let pending = PendingCopy::arm(text, self.trim);
        let len = pending.text().len();
        match pending.fire(&mut self.backend) {
            Ok(()) => {
                tracing::debug!(bytes = len, "Committed text to clipboard");
                Ok(())
            }
            Err(e) => {
                tracing::warn!(error = %e, "Clipboard write failed");
                Err(e)
            }
        }
    }

    #[must_use]
    pub fn backend(&self) -> &B {
        &self.backend
    }
}
