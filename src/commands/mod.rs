//! Command handlers

pub mod edit;
pub mod permissions;
pub mod show;
pub mod toggle;

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use crossterm::style::Stylize;

use permtree::application::{EditorOptions, PermissionEditor};
use permtree::config::{Config, ConfigWarning};
use permtree::domain::ports::SelectionEventSink;
use permtree::domain::value_objects::{SelectionDiff, SelectionSet};
use permtree::presentation::{open_editor, TreeArgs};

use crate::ui::context::UiContext;
use crate::ui::theme::{colors, icon, icons, icons_ascii};

/// Config and UI decisions shared by every command
pub struct CommandContext {
    pub config: Config,
    pub ui: UiContext,
    warnings: Vec<ConfigWarning>,
}

impl CommandContext {
    /// Load `--config` if given, the user config otherwise
    pub fn load(config_path: Option<&Path>, json: bool) -> Result<Self> {
        let (config, warnings) = match config_path {
            Some(path) => {
                let (config, warnings) = Config::load_with_warnings(path)
                    .with_context(|| format!("failed to load config {}", path.display()))?;
                (config.with_env_overrides(), warnings)
            }
            None => Config::load_user_with_warnings().context("failed to load user config")?,
        };
        let ui = UiContext::new(json, &config);
        Ok(Self {
            config,
            ui,
            warnings,
        })
    }

    pub fn report_warnings(&self) {
        let mark = icon(self.ui.unicode, icons::WARNING, icons_ascii::WARNING);
        for warning in &self.warnings {
            eprintln!("{} {}", mark, warning);
        }
    }

    pub fn editor_options(&self) -> EditorOptions {
        EditorOptions::from_config(&self.config)
    }

    /// Open an editor over the tree named on the command line
    pub fn open(
        &self,
        args: &TreeArgs,
        options: EditorOptions,
        sink: Arc<dyn SelectionEventSink>,
    ) -> Result<PermissionEditor> {
        open_editor(&args.tree, args.selected.clone(), options, &self.config, sink)
            .with_context(|| format!("failed to load tree {}", args.tree.display()))
    }
}

/// Print one NDJSON line
pub fn print_json(value: &serde_json::Value) {
    println!("{}", value);
}

/// `Selected: 1,2,4`, or `Selected: (none)`
pub fn selected_line(selection: &SelectionSet) -> String {
    if selection.is_empty() {
        String::from("Selected: (none)")
    } else {
        format!("Selected: {}", selection)
    }
}

/// Human-readable diff, one line per changed node
pub fn render_diff(editor: &PermissionEditor, diff: &SelectionDiff, ui: &UiContext) -> String {
    let name = |id| {
        editor
            .index()
            .node(id)
            .map(|n| n.name.as_str())
            .unwrap_or("?")
    };

    let mut lines = Vec::with_capacity(diff.added.len() + diff.removed.len());
    for &id in &diff.added {
        let line = format!(
            "{} {} {}",
            icon(ui.unicode, icons::ADDED, icons_ascii::ADDED),
            id,
            name(id)
        );
        lines.push(paint(line, colors::SUCCESS, ui.color));
    }
    for &id in &diff.removed {
        let line = format!(
            "{} {} {}",
            icon(ui.unicode, icons::REMOVED, icons_ascii::REMOVED),
            id,
            name(id)
        );
        lines.push(paint(line, colors::WARNING, ui.color));
    }
    lines.join("\n")
}

pub fn paint(text: String, color: crossterm::style::Color, enabled: bool) -> String {
    if enabled {
        text.with(color).to_string()
    } else {
        text
    }
}
