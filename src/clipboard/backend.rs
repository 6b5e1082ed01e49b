//! Clipboard backends: the platform clipboard via arboard, a detached holder
//! process for short-lived callers, and an in-memory stand-in for headless
//! hosts and tests.

use arboard::Clipboard;
use std::ffi::OsString;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::error::ClipboardError;

/// Line a holder process prints once it owns the selection.
pub const HOLDER_READY: &str = "clipboard-ready";

/// Somewhere a plain-text payload can be written.
pub trait ClipboardBackend {
    /// Replace the clipboard contents with `text`.
    ///
    /// # Errors
    ///
    /// Implementations return [`ClipboardError`] without writing anything
    /// when the write cannot be performed.
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError>;
}

impl<B: ClipboardBackend + ?Sized> ClipboardBackend for Box<B> {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        (**self).set_text(text)
    }
}

/// How a write reaches the system clipboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    /// Write from this process. Contents live as long as the platform keeps
    /// them after the writer goes away.
    InProcess,
    /// Hand the text to a detached holder that serves the selection until
    /// another owner replaces it.
    Detached,
}

impl Delivery {
    /// Delivery for a process that exits right after copying.
    ///
    /// On Linux (X11 and Wayland) the selection is served by its owner, so
    /// contents written in-process vanish at exit.
    #[must_use]
    pub fn for_short_lived_process() -> Self {
        if cfg!(target_os = "linux") {
            Delivery::Detached
        } else {
            Delivery::InProcess
        }
    }
}

/// The system clipboard.
///
/// The platform handle is opened on first write, so constructing one is
/// free on hosts that never copy.
#[derive(Default)]
pub struct SystemClipboard {
    handle: Option<Clipboard>,
}

impl SystemClipboard {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> Result<&mut Clipboard, ClipboardError> {
        let clipboard = match self.handle.take() {
            Some(clipboard) => clipboard,
            None => Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?,
        };
        Ok(self.handle.insert(clipboard))
    }
}

impl ClipboardBackend for SystemClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        self.handle()?.set_text(text).map_err(ClipboardError::from)
    }
}

/// Own the clipboard with `text` and keep serving it until replaced.
///
/// `ready` runs once the selection is owned. On Linux the call then blocks
/// until another owner takes the selection; elsewhere it returns at once.
///
/// # Errors
///
/// [`ClipboardError`] if the clipboard cannot be opened or written.
pub fn serve_until_replaced(text: &str, ready: impl FnOnce()) -> Result<(), ClipboardError> {
    let mut clipboard =
        Clipboard::new().map_err(|e| ClipboardError::Unavailable(e.to_string()))?;
    clipboard.set_text(text)?;
    ready();

    #[cfg(target_os = "linux")]
    {
        use arboard::SetExtLinux;
        clipboard.set().wait().text(text)?;
    }
    Ok(())
}

/// Clipboard writes delegated to a holder process.
///
/// The holder reads the text from stdin, takes the selection, prints
/// [`HOLDER_READY`] and keeps running after this process exits.
#[derive(Debug, Clone)]
pub struct DetachedClipboard {
    program: PathBuf,
    args: Vec<OsString>,
}

impl DetachedClipboard {
    #[must_use]
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}

impl ClipboardBackend for DetachedClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        let unavailable = |what: &str, e: std::io::Error| {
            ClipboardError::Unavailable(format!("{what} {}: {e}", self.program.display()))
        };

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .map_err(|e| unavailable("failed to start clipboard holder", e))?;

        // Dropping stdin closes it, so the holder sees the end of the text
        if let Some(mut stdin) = child.stdin.take() {
            stdin
                .write_all(text.as_bytes())
                .map_err(|e| unavailable("failed to hand text to", e))?;
        }

        let Some(stdout) = child.stdout.take() else {
            return Err(ClipboardError::Unavailable(
                "clipboard holder has no stdout".to_string(),
            ));
        };
        let mut line = String::new();
        BufReader::new(stdout)
            .read_line(&mut line)
            .map_err(|e| unavailable("no answer from", e))?;

        if line.trim() == HOLDER_READY {
            tracing::debug!(holder = %self.program.display(), "Clipboard holder owns the selection");
            Ok(())
        } else {
            let status = child.wait().ok();
            Err(ClipboardError::Unavailable(format!(
                "clipboard holder exited before taking the selection ({status:?})"
            )))
        }
    }
}

/// Clipboard held in memory.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    contents: Option<String>,
    writes: usize,
    rejection: Option<String>,
}

impl MemoryClipboard {
    #[must_use]
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Successful writes so far
    #[must_use]
    pub fn writes(&self) -> usize {
        self.writes
    }

    /// Make every later write fail with [`ClipboardError::Rejected`].
    pub fn reject_writes(&mut self, reason: &str) {
        self.rejection = Some(reason.to_string());
    }
}

impl ClipboardBackend for MemoryClipboard {
    fn set_text(&mut self, text: &str) -> Result<(), ClipboardError> {
        if let Some(reason) = &self.rejection {
            return Err(ClipboardError::Rejected(reason.clone()));
        }
        self.contents = Some(text.to_string());
        self.writes += 1;
        Ok(())
    }
}
