//! Edit command handler
//!
//! Runs the interactive tree menu and prints the confirmed selection.

use std::sync::Arc;

use anyhow::{bail, Result};

use permtree::domain::ports::NoopEventSink;
use permtree::presentation::TreeArgs;

use super::{paint, print_json, render_diff, selected_line, CommandContext};
use crate::ui::theme::{colors, icon, icons, icons_ascii};
use crate::ui::widgets::tree_menu::{run_interactive, TreeMenu};

pub fn cmd_edit(ctx: &CommandContext, args: &TreeArgs, no_linkage: bool, read_only: bool) -> Result<()> {
    if !ctx.ui.caps.supports_interactive() {
        bail!("edit needs an interactive terminal; use `permtree toggle` in scripts");
    }

    let mut options = ctx.editor_options();
    if no_linkage {
        options = options.with_linkage(false);
    }
    let editor = ctx.open(args, options, Arc::new(NoopEventSink))?;
    let initial = editor.selection().clone();

    let mut menu = TreeMenu::new(editor).with_read_only(read_only);
    let result = run_interactive(&mut menu, &ctx.ui.render_style())?;

    let Some(selection) = result else {
        if ctx.ui.json {
            print_json(&serde_json::json!({ "event": "cancelled", "command": "edit" }));
        } else {
            eprintln!("{}", paint("Cancelled, selection unchanged".to_string(), colors::INFO, ctx.ui.color));
        }
        return Ok(());
    };

    let editor = menu.editor();
    let diff = initial.diff(&selection);
    if ctx.ui.json {
        print_json(&serde_json::json!({
            "event": "selection_changed",
            "command": "edit",
            "selected": selection,
            "count": selection.len(),
            "added": diff.added,
            "removed": diff.removed,
            "permissions": editor.permissions(),
        }));
        return Ok(());
    }

    let mark = icon(ctx.ui.unicode, icons::SUCCESS, icons_ascii::SUCCESS);
    eprintln!("{} Selection confirmed", paint(mark.to_string(), colors::SUCCESS, ctx.ui.color));
    if !diff.is_empty() {
        println!("{}", render_diff(editor, &diff, &ctx.ui));
    }
    println!("{}", selected_line(&selection));
    Ok(())
}
