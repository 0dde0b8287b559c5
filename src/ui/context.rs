use permtree::config::Config;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};
use crate::ui::widgets::tree_menu::RenderStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub caps: TerminalCapabilities,
    pub color: bool,
    pub unicode: bool,
    pub show_permissions: bool,
}

impl UiContext {
    pub fn new(json: bool, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        Self {
            json,
            caps,
            color: !json && caps.supports_color && !caps.is_ci,
            unicode: config.display.unicode && caps.supports_unicode,
            show_permissions: config.display.show_permissions,
        }
    }

    pub fn render_style(&self) -> RenderStyle {
        RenderStyle {
            unicode: self.unicode,
            color: self.color,
            show_permissions: self.show_permissions,
            width: usize::from(self.caps.width),
        }
    }
}
