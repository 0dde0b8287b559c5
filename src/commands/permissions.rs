//! Permissions command handler
//!
//! Lists the permission strings a role with the given selection would carry.

use std::sync::Arc;

use anyhow::Result;

use permtree::domain::ports::NoopEventSink;
use permtree::presentation::TreeArgs;

use super::{print_json, CommandContext};

pub fn cmd_permissions(ctx: &CommandContext, args: &TreeArgs) -> Result<()> {
    let editor = ctx.open(args, ctx.editor_options(), Arc::new(NoopEventSink))?;
    let permissions = editor.permissions();

    if ctx.ui.json {
        print_json(&serde_json::json!({
            "event": "permissions",
            "command": "permissions",
            "selected": editor.selection(),
            "permissions": permissions,
            "summary": editor.summary(),
        }));
        return Ok(());
    }

    for permission in permissions {
        println!("{}", permission);
    }
    Ok(())
}
