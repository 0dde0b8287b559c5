//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--json, --verbose, --config) are inherited by all subcommands
//! - Every command reads the tree from a file; `--selected` overrides any
//!   `checkedKeys` stored in it

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::domain::entities::NodeId;
use crate::domain::value_objects::{parse_selection, SelectionSet};

/// permtree - role permission tree editor
#[derive(Parser, Debug)]
#[command(name = "permtree")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Config file (defaults to the user config)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Tree file plus an optional selection
#[derive(Args, Debug, Clone)]
pub struct TreeArgs {
    /// Permission tree file (.json, .yaml, .yml)
    #[arg(short, long, value_name = "FILE")]
    pub tree: PathBuf,

    /// Current selection as comma-separated node ids
    #[arg(short, long, value_name = "IDS", value_parser = parse_selection_arg)]
    pub selected: Option<SelectionSet>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the tree with check states
    Show {
        #[command(flatten)]
        tree: TreeArgs,

        /// Start with every node collapsed
        #[arg(long)]
        collapsed: bool,
    },

    /// Check or uncheck one node and print the next selection
    Toggle {
        #[command(flatten)]
        tree: TreeArgs,

        /// Node to toggle
        #[arg(short, long, value_name = "ID")]
        node: NodeId,

        /// Uncheck instead of check
        #[arg(long)]
        uncheck: bool,

        /// Toggle only this node (no cascading)
        #[arg(long)]
        no_linkage: bool,
    },

    /// Select every node, or clear the selection
    SelectAll {
        #[command(flatten)]
        tree: TreeArgs,

        /// Clear instead of select
        #[arg(long)]
        clear: bool,
    },

    /// List permission strings of the selected nodes
    Permissions {
        #[command(flatten)]
        tree: TreeArgs,
    },

    /// Edit the selection interactively
    Edit {
        #[command(flatten)]
        tree: TreeArgs,

        /// Start with linkage off
        #[arg(long)]
        no_linkage: bool,

        /// Browse without changing the selection
        #[arg(long)]
        read_only: bool,
    },
}

fn parse_selection_arg(input: &str) -> Result<SelectionSet, String> {
    parse_selection(input).map_err(|e| e.to_string())
}
