//! Copy facade for UI collaborators
//!
//! Button and context-menu handlers call [`Copier::copy_message`] or
//! [`Copier::copy_equation`]. The facade applies the host gates from
//! [`CopyConfig`], runs the transcoder or extractor, and commits the result.

use kuchiki::NodeRef;

use crate::clipboard::{ClipboardBackend, ClipboardSink};
use crate::config::CopyConfig;
use crate::dialect::Dialect;
use crate::error::CopyError;
use crate::first_use::FirstUseFlag;
use crate::transcoder;

/// What a successful copy put on the clipboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyReport {
    pub dialect: Dialect,
    /// The committed text
    pub text: String,
    /// First whole-message Word copy: the host should show the paste hint
    pub show_word_hint: bool,
}

pub struct Copier<B: ClipboardBackend> {
    config: CopyConfig,
    sink: ClipboardSink<B>,
    word_notice: FirstUseFlag,
}

impl<B: ClipboardBackend> Copier<B> {
    #[must_use]
    pub fn new(config: CopyConfig, backend: B) -> Self {
        let sink = ClipboardSink::new(backend).with_trim(config.trim_output());
        Self {
            config,
            sink,
            word_notice: FirstUseFlag::new(),
        }
    }

    #[must_use]
    pub fn config(&self) -> &CopyConfig {
        &self.config
    }

    #[must_use]
    pub fn sink(&self) -> &ClipboardSink<B> {
        &self.sink
    }

    /// Transcode a whole message without committing it.
    ///
    /// # Errors
    ///
    /// [`CopyError::AssetsNotReady`], [`CopyError::DialectDisabled`], or
    /// [`CopyError::NothingToCopy`] when the message has no text.
    pub fn render_message(&self, root: &NodeRef, dialect: Dialect) -> Result<String, CopyError> {
        self.check_message_gates(dialect)?;
        non_empty(transcoder::transcode_node(root, dialect)?)
    }

    /// Like [`Copier::render_message`], from the message's inner markup.
    ///
    /// # Errors
    ///
    /// Same as [`Copier::render_message`].
    pub fn render_message_html(&self, markup: &str, dialect: Dialect) -> Result<String, CopyError> {
        self.check_message_gates(dialect)?;
        non_empty(transcoder::transcode_html(markup, dialect)?)
    }

    /// Extract one equation without committing it.
    ///
    /// # Errors
    ///
    /// [`CopyError::AssetsNotReady`], or a transcode error when the node has
    /// no notation.
    pub fn render_equation(&self, node: &NodeRef, dialect: Dialect) -> Result<String, CopyError> {
        self.check_assets()?;
        non_empty(transcoder::extract(node, dialect)?)
    }

    /// Copy a whole message.
    ///
    /// # Errors
    ///
    /// Any error from [`Copier::render_message`], or a clipboard failure.
    pub fn copy_message(
        &mut self,
        root: &NodeRef,
        dialect: Dialect,
    ) -> Result<CopyReport, CopyError> {
        let text = self.render_message(root, dialect)?;
        self.commit(text, dialect, true)
    }

    /// Like [`Copier::copy_message`], from the message's inner markup.
    ///
    /// # Errors
    ///
    /// Same as [`Copier::copy_message`].
    pub fn copy_message_html(
        &mut self,
        markup: &str,
        dialect: Dialect,
    ) -> Result<CopyReport, CopyError> {
        let text = self.render_message_html(markup, dialect)?;
        self.commit(text, dialect, true)
    }

    /// Copy the single equation under `node`.
    ///
    /// # Errors
    ///
    /// Any error from [`Copier::render_equation`], or a clipboard failure.
    pub fn copy_equation(
        &mut self,
        node: &NodeRef,
        dialect: Dialect,
    ) -> Result<CopyReport, CopyError> {
        let text = self.render_equation(node, dialect)?;
        self.commit(text, dialect, false)
    }

    fn check_assets(&self) -> Result<(), CopyError> {
        if self.config.assets_ready() {
            Ok(())
        } else {
            Err(CopyError::AssetsNotReady)
        }
    }

    fn check_message_gates(&self, dialect: Dialect) -> Result<(), CopyError> {
        self.check_assets()?;
        if !self.config.allows_message_copy(dialect) {
            return Err(CopyError::DialectDisabled(dialect));
        }
        Ok(())
    }

    fn commit(
        &mut self,
        text: String,
        dialect: Dialect,
        whole_message: bool,
    ) -> Result<CopyReport, CopyError> {
        let show_word_hint =
            whole_message && dialect == Dialect::ToWord && self.word_notice.check_and_set();

        self.sink.commit(&text)?;

        let text = if self.config.trim_output() {
            text.trim().to_string()
        } else {
            text
        };
        tracing::info!(%dialect, whole_message, chars = text.chars().count(), "Copied");
        Ok(CopyReport {
            dialect,
            text,
            show_word_hint,
        })
    }
}

fn non_empty(text: String) -> Result<String, CopyError> {
    if text.trim().is_empty() {
        Err(CopyError::NothingToCopy)
    } else {
        Ok(text)
    }
}
