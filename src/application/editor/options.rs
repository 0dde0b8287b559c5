//! Editor Options

use crate::config::Config;

/// Settings a permission editor session starts with
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    /// Initial linkage flag
    pub linkage: bool,
    /// Reject all selection toggles
    pub disabled: bool,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            linkage: true,
            disabled: false,
        }
    }
}

impl EditorOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            linkage: config.selection.linkage,
            disabled: false,
        }
    }

    pub fn with_linkage(mut self, linkage: bool) -> Self {
        self.linkage = linkage;
        self
    }

    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}
