//! Error types for transcoding and clipboard delivery
//!
//! Per-node transcoding errors are recovered inside the pipeline; only the
//! facade-level [`CopyError`] is meant to reach a user.

use thiserror::Error;

use crate::dialect::Dialect;

/// Result type alias for transcoding operations
pub type TranscodeResult<T> = Result<T, TranscodeError>;

/// Errors raised while reading or rewriting a parsed fragment
#[derive(Debug, Error)]
pub enum TranscodeError {
    /// A math node lacks the named sub-element (`annotation` or `math`)
    #[error("math node has no <{0}> element")]
    NotationMissing(&'static str),

    /// A code fence has no language header
    #[error("code fence has no language header")]
    MalformedFence,

    /// Writing the parsed tree back out failed
    #[error("failed to serialize fragment: {0}")]
    Serialize(String),
}

impl From<anyhow::Error> for TranscodeError {
    fn from(error: anyhow::Error) -> Self {
        TranscodeError::Serialize(format!("{error:#}"))
    }
}

/// Errors raised by the system clipboard
///
/// Either variant means nothing was written.
#[derive(Debug, Error)]
pub enum ClipboardError {
    /// The platform clipboard could not be opened
    #[error("clipboard unavailable: {0}")]
    Unavailable(String),

    /// The platform refused the write
    #[error("clipboard write rejected: {0}")]
    Rejected(String),
}

impl From<arboard::Error> for ClipboardError {
    fn from(err: arboard::Error) -> Self {
        match err {
            arboard::Error::ClipboardNotSupported | arboard::Error::ClipboardOccupied => {
                ClipboardError::Unavailable(err.to_string())
            }
            other => ClipboardError::Rejected(other.to_string()),
        }
    }
}

/// Errors surfaced by [`crate::Copier`]
#[derive(Debug, Error)]
pub enum CopyError {
    /// Presentation assets have not finished loading
    #[error("copy requested before presentation assets were loaded")]
    AssetsNotReady,

    /// Whole-message copy in this dialect is switched off by configuration
    #[error("whole-message copy as {0} is disabled on this host")]
    DialectDisabled(Dialect),

    /// The result was empty after trimming
    #[error("nothing to copy")]
    NothingToCopy,

    #[error(transparent)]
    Transcode(#[from] TranscodeError),

    #[error(transparent)]
    Clipboard(#[from] ClipboardError),
}

impl CopyError {
    /// Whether the user should simply be told nothing was copied
    #[must_use]
    pub fn is_nothing_copied(&self) -> bool {
        matches!(
            self,
            CopyError::NothingToCopy | CopyError::Transcode(TranscodeError::NotationMissing(_))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notation_missing_names_element() {
        let err = TranscodeError::NotationMissing("annotation");
        assert_eq!(err.to_string(), "math node has no <annotation> element");
    }

    #[test]
    fn test_anyhow_converts_to_serialize() {
        let err: TranscodeError = anyhow::anyhow!("broken pipe").into();
        assert!(matches!(err, TranscodeError::Serialize(ref msg) if msg.contains("broken pipe")));
    }

    #[test]
    fn test_nothing_copied_classification() {
        assert!(CopyError::NothingToCopy.is_nothing_copied());
        assert!(CopyError::from(TranscodeError::NotationMissing("math")).is_nothing_copied());
        assert!(!CopyError::AssetsNotReady.is_nothing_copied());
        assert!(
            !CopyError::from(ClipboardError::Rejected("denied".into())).is_nothing_copied()
        );
    }
}
