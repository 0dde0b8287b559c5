use crossterm::style::Color;

/// Design tokens for the permtree terminal UI.
///
/// Design constraints:
/// - Only 4 semantic colors (`colors::*`)
/// - All icons must be sourced from this module
pub mod colors {
    use super::Color;

    /// #22C55E
    pub const SUCCESS: Color = Color::Green;
    /// #F59E0B
    pub const WARNING: Color = Color::Yellow;
    /// #06B6D4
    pub const INFO: Color = Color::Cyan;
    /// #6B7280
    pub const DIM: Color = Color::DarkGrey;
}

pub mod icons {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const POINTER: &str = "›";
    pub const ADDED: &str = "+";
    pub const REMOVED: &str = "−";

    // Selection states.
    pub const SELECTED: &str = "●";
    pub const UNSELECTED: &str = "○";
    pub const PARTIAL: &str = "◐";

    // Tree expansion.
    pub const EXPAND: &str = "▼";
    pub const COLLAPSE: &str = "▶";

    pub const LINKED: &str = "⛓";
    pub const UNLINKED: &str = "⌁";
}

pub mod icons_ascii {
    pub const SUCCESS: &str = "[OK]";
    pub const WARNING: &str = "[WARN]";
    pub const POINTER: &str = ">";
    pub const ADDED: &str = "+";
    pub const REMOVED: &str = "-";

    // Selection states.
    pub const SELECTED: &str = "[x]";
    pub const UNSELECTED: &str = "[ ]";
    pub const PARTIAL: &str = "[-]";

    // Tree expansion.
    pub const EXPAND: &str = "[v]";
    pub const COLLAPSE: &str = "[>]";

    pub const LINKED: &str = "[link]";
    pub const UNLINKED: &str = "[free]";
}

/// Pick the unicode or ASCII variant of an icon
pub fn icon(unicode: bool, fancy: &'static str, plain: &'static str) -> &'static str {
    if unicode {
        fancy
    } else {
        plain
    }
}

/// Icon for a row's check state. A partially selected subtree shows as
/// partial even when its own node is checked.
pub fn check_icon(unicode: bool, checked: bool, indeterminate: bool) -> &'static str {
    if indeterminate {
        icon(unicode, icons::PARTIAL, icons_ascii::PARTIAL)
    } else if checked {
        icon(unicode, icons::SELECTED, icons_ascii::SELECTED)
    } else {
        icon(unicode, icons::UNSELECTED, icons_ascii::UNSELECTED)
    }
}
