//! Toggle and select-all command handlers
//!
//! Both print the proposed selection and how it differs from the input.

use std::sync::Arc;

use anyhow::Result;

use permtree::application::PermissionEditor;
use permtree::domain::entities::NodeId;
use permtree::domain::ports::{NoopEventSink, SelectionEventSink};
use permtree::domain::value_objects::SelectionSet;
use permtree::infrastructure::JsonEventSink;
use permtree::presentation::TreeArgs;

use super::{print_json, render_diff, selected_line, CommandContext};

fn sink_for(ctx: &CommandContext, command: &'static str) -> Arc<dyn SelectionEventSink> {
    if ctx.ui.json {
        Arc::new(JsonEventSink::stdout(command))
    } else {
        Arc::new(NoopEventSink)
    }
}

pub fn cmd_toggle(
    ctx: &CommandContext,
    args: &TreeArgs,
    node: NodeId,
    checked: bool,
    no_linkage: bool,
) -> Result<()> {
    let mut options = ctx.editor_options();
    if no_linkage {
        options = options.with_linkage(false);
    }
    let editor = ctx.open(args, options, sink_for(ctx, "toggle"))?;

    if !editor.index().contains(node) {
        tracing::warn!(node, "node not in tree, selection unchanged");
    }

    let proposal = editor.toggle_node(node, checked);
    report(ctx, &editor, "toggle", proposal);
    Ok(())
}

pub fn cmd_select_all(ctx: &CommandContext, args: &TreeArgs, checked: bool) -> Result<()> {
    let editor = ctx.open(args, ctx.editor_options(), sink_for(ctx, "select_all"))?;
    let proposal = editor.select_all(checked);
    report(ctx, &editor, "select_all", proposal);
    Ok(())
}

fn report(
    ctx: &CommandContext,
    editor: &PermissionEditor,
    command: &'static str,
    proposal: Option<SelectionSet>,
) {
    let Some(next) = proposal else {
        return;
    };
    let diff = editor.selection().diff(&next);

    if ctx.ui.json {
        print_json(&serde_json::json!({
            "event": "selection_diff",
            "command": command,
            "added": diff.added,
            "removed": diff.removed,
        }));
        return;
    }

    if diff.is_empty() {
        println!("No change");
    } else {
        println!("{}", render_diff(editor, &diff, &ctx.ui));
    }
    println!("{}", selected_line(&next));
}
