//! Show command handler
//!
//! Renders the tree the way the editor would display it.

use std::sync::Arc;

use anyhow::Result;

use permtree::domain::ports::NoopEventSink;
use permtree::presentation::TreeArgs;

use super::{print_json, CommandContext};
use crate::ui::widgets::tree_menu::{render_rows, render_status_bar};

pub fn cmd_show(ctx: &CommandContext, args: &TreeArgs, collapsed: bool) -> Result<()> {
    let mut editor = ctx.open(args, ctx.editor_options(), Arc::new(NoopEventSink))?;
    if collapsed {
        editor.expand_all(false);
    }

    let rows = editor.rows();
    let summary = editor.summary();

    if ctx.ui.json {
        let rows: Vec<_> = rows
            .iter()
            .map(|row| {
                serde_json::json!({
                    "id": row.id(),
                    "name": row.node.name,
                    "kind": row.node.kind,
                    "permission": row.node.permission,
                    "depth": row.depth,
                    "checked": row.checked,
                    "indeterminate": row.indeterminate,
                    "expanded": row.expanded,
                    "has_children": row.has_children,
                })
            })
            .collect();
        print_json(&serde_json::json!({
            "event": "tree",
            "command": "show",
            "rows": rows,
            "summary": summary,
            "all_selected": editor.all_selected(),
            "all_expanded": editor.all_expanded(),
        }));
        return Ok(());
    }

    let style = ctx.ui.render_style();
    if rows.is_empty() {
        println!("(empty tree)");
    } else {
        println!("{}", render_rows(&rows, None, &style));
    }
    println!();
    println!(
        "{}",
        render_status_bar(&summary, editor.linkage(), editor.is_disabled(), &style)
    );
    Ok(())
}
