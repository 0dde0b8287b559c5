//! Terminal rendering functions for the permission tree.
//!
//! Everything renders to plain strings so the interactive loop and the
//! `show` command share one layout.

use crossterm::style::Stylize;
use unicode_width::UnicodeWidthStr;

use permtree::domain::services::{DisplayRow, SelectionSummary};

use crate::ui::theme::{check_icon, colors, icon, icons, icons_ascii};

/// How rows are drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderStyle {
    pub unicode: bool,
    pub color: bool,
    pub show_permissions: bool,
    /// Terminal columns
    pub width: usize,
}

impl RenderStyle {
    /// ASCII, no color, permission hints on
    pub fn plain() -> Self {
        Self {
            unicode: false,
            color: false,
            show_permissions: true,
            width: 80,
        }
    }
}

/// Tree part of a row: indentation, expansion marker, check state and name
fn row_label(row: &DisplayRow<'_>, style: &RenderStyle) -> String {
    let indent = "  ".repeat(row.depth);
    let expand = icon(style.unicode, icons::EXPAND, icons_ascii::EXPAND);

    let expand_icon = if row.has_children {
        let marker = if row.expanded {
            expand
        } else {
            icon(style.unicode, icons::COLLAPSE, icons_ascii::COLLAPSE)
        };
        format!("{} ", marker)
    } else {
        " ".repeat(expand.width() + 1)
    };

    format!(
        "{}{}{} {}",
        indent,
        expand_icon,
        check_icon(style.unicode, row.checked, row.indeterminate),
        row.node.name
    )
}

/// Render visible rows, one per line. `cursor` marks the active row when the
/// output is interactive.
pub fn render_rows(rows: &[DisplayRow<'_>], cursor: Option<usize>, style: &RenderStyle) -> String {
    let labels: Vec<String> = rows.iter().map(|row| row_label(row, style)).collect();
    let column = labels.iter().map(|l| l.width()).max().unwrap_or(0) + 2;
    let pointer = icon(style.unicode, icons::POINTER, icons_ascii::POINTER);

    let mut out = Vec::with_capacity(rows.len());
    for (i, (row, label)) in rows.iter().zip(&labels).enumerate() {
        let mut line = String::new();
        if let Some(active) = cursor {
            if i == active {
                line.push_str(pointer);
                line.push(' ');
            } else {
                line.push_str(&" ".repeat(pointer.width() + 1));
            }
        }
        line.push_str(label);

        let permission = row.node.permission.as_deref().filter(|p| !p.is_empty());
        if let (true, Some(permission)) = (style.show_permissions, permission) {
            line.push_str(&" ".repeat(column - label.width()));
            if style.color {
                line.push_str(&permission.with(colors::DIM).to_string());
            } else {
                line.push_str(permission);
            }
        }

        out.push(line.trim_end().to_string());
    }

    out.join("\n")
}

/// Render the status bar showing selection counts and the linkage flag
pub fn render_status_bar(
    summary: &SelectionSummary,
    linkage: bool,
    disabled: bool,
    style: &RenderStyle,
) -> String {
    let linkage_label = if linkage {
        format!("{} linked", icon(style.unicode, icons::LINKED, icons_ascii::LINKED))
    } else {
        format!(
            "{} independent",
            icon(style.unicode, icons::UNLINKED, icons_ascii::UNLINKED)
        )
    };
    let read_only = if disabled { "    read-only" } else { "" };

    format!(
        "Selected: {}/{} ({} menus, {} operations)    {}{}\n\n{} = selected    {} = partial    {} = not selected",
        summary.selected,
        summary.total,
        summary.menus,
        summary.operations,
        linkage_label,
        read_only,
        check_icon(style.unicode, true, false),
        check_icon(style.unicode, false, true),
        check_icon(style.unicode, false, false),
    )
}

/// Render the help bar showing keyboard shortcuts
pub fn render_help_bar() -> String {
    String::from(
        "[a] All    [n] None    [e] Expand all    [c] Collapse all    [l] Linkage\n\
         [Enter] Confirm    [q] Quit\n\
         (Use ↑↓ to navigate, Space to toggle, →← to expand/collapse)",
    )
}
