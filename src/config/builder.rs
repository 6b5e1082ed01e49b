//! Fluent builder for `CopyConfig`

use super::types::CopyConfig;

pub struct CopyConfigBuilder {
    word_enabled: bool,
    assets_ready: bool,
    trim_output: bool,
}

impl Default for CopyConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl CopyConfigBuilder {
    #[must_use]
    pub fn new() -> Self {
        let defaults = CopyConfig::default();
        Self {
            word_enabled: defaults.word_enabled,
            assets_ready: defaults.assets_ready,
            trim_output: defaults.trim_output,
        }
    }

    #[must_use]
    pub fn word_enabled(mut self, enabled: bool) -> Self {
        self.word_enabled = enabled;
        self
    }

    #[must_use]
    pub fn assets_ready(mut self, ready: bool) -> Self {
        self.assets_ready = ready;
        self
    }

    #[must_use]
    pub fn trim_output(mut self, trim: bool) -> Self {
        self.trim_output = trim;
        self
    }

    #[must_use]
    pub fn build(self) -> CopyConfig {
        CopyConfig {
            word_enabled: self.word_enabled,
            assets_ready: self.assets_ready,
            trim_output: self.trim_output,
        }
    }
}
