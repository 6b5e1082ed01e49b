use crate::dialect::Dialect;

use super::builder::CopyConfigBuilder;

/// Host capabilities and readiness, fixed for the life of a [`crate::Copier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyConfig {
    pub(crate) word_enabled: bool,
    pub(crate) assets_ready: bool,
    pub(crate) trim_output: bool,
}

impl Default for CopyConfig {
    fn default() -> Self {
        Self {
            word_enabled: cfg!(windows),
            assets_ready: true,
            trim_output: true,
        }
    }
}

impl CopyConfig {
    #[must_use]
    pub fn builder() -> CopyConfigBuilder {
        CopyConfigBuilder::new()
    }

    /// Whole-message copy for Word is offered on this host.
    #[must_use]
    pub fn word_enabled(&self) -> bool {
        self.word_enabled
    }

    /// Presentation assets are loaded and copying may start.
    #[must_use]
    pub fn assets_ready(&self) -> bool {
        self.assets_ready
    }

    /// Committed text is trimmed.
    #[must_use]
    pub fn trim_output(&self) -> bool {
        self.trim_output
    }

    /// Whether a whole message may be copied in `dialect`.
    ///
    /// Single-equation copy is always available in both dialects.
    #[must_use]
    pub fn allows_message_copy(&self, dialect: Dialect) -> bool {
        match dialect {
            Dialect::ToLatex => true,
            Dialect::ToWord => self.word_enabled,
        }
    }
}
