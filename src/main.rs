//! permtree CLI - role permission tree editor
//!
//! Usage: permtree <COMMAND>
//!
//! Commands:
//!   show         Render the tree with check states
//!   toggle       Check or uncheck one node
//!   select-all   Select every node, or clear
//!   permissions  List permission strings of the selection
//!   edit         Edit the selection interactively

use anyhow::Result;
use clap::Parser;

use permtree::presentation::{setup_logging, Cli, Commands};

mod commands;
mod ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = commands::CommandContext::load(cli.config.as_deref(), cli.json)?;
    setup_logging(cli.verbose, ctx.config.output.verbosity);
    ctx.report_warnings();

    match cli.command {
        Commands::Show { tree, collapsed } => commands::show::cmd_show(&ctx, &tree, collapsed),
        Commands::Toggle {
            tree,
            node,
            uncheck,
            no_linkage,
        } => commands::toggle::cmd_toggle(&ctx, &tree, node, !uncheck, no_linkage),
        Commands::SelectAll { tree, clear } => commands::toggle::cmd_select_all(&ctx, &tree, !clear),
        Commands::Permissions { tree } => commands::permissions::cmd_permissions(&ctx, &tree),
        Commands::Edit {
            tree,
            no_linkage,
            read_only,
        } => commands::edit::cmd_edit(&ctx, &tree, no_linkage, read_only),
    }
}
