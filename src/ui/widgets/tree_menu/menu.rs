//! TreeMenu state management and action handling.
//!
//! The menu hosts a [`PermissionEditor`]: it adopts every proposal the editor
//! makes, so the terminal shows the selection the caller would receive.
//! A read-only menu keeps the editor enabled for browsing and drops selection
//! and linkage actions itself.

use permtree::application::PermissionEditor;
use permtree::domain::entities::{NodeId, ROOT_PARENT};
use permtree::domain::value_objects::SelectionSet;

use super::render::{render_help_bar, render_rows, render_status_bar, RenderStyle};

/// Tree menu action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    /// Move cursor up
    Up,
    /// Move cursor down
    Down,
    /// Toggle selection of the current node
    Toggle,
    /// Expand node
    Expand,
    /// Collapse node, or jump to its parent
    Collapse,
    /// Select all
    SelectAll,
    /// Select none
    SelectNone,
    /// Expand every parent
    ExpandAll,
    /// Collapse everything
    CollapseAll,
    /// Flip the linkage flag
    ToggleLinkage,
    /// Confirm selection
    Confirm,
    /// Quit without confirming
    Quit,
}

impl TreeAction {
    /// Actions that change the selection or the linkage flag
    pub fn changes_selection(self) -> bool {
        matches!(
            self,
            TreeAction::Toggle | TreeAction::SelectAll | TreeAction::SelectNone | TreeAction::ToggleLinkage
        )
    }
}

/// Interactive tree menu over a permission editor
pub struct TreeMenu {
    editor: PermissionEditor,
    cursor: usize,
    read_only: bool,
}

impl TreeMenu {
    pub fn new(editor: PermissionEditor) -> Self {
        Self {
            editor,
            cursor: 0,
            read_only: false,
        }
    }

    /// Allow navigation and expansion only
    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn is_read_only(&self) -> bool {
        self.read_only || self.editor.is_disabled()
    }

    pub fn editor(&self) -> &PermissionEditor {
        &self.editor
    }

    pub fn selection(&self) -> &SelectionSet {
        self.editor.selection()
    }

    /// Get current cursor position
    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    /// Id of the node under the cursor
    pub fn current_id(&self) -> Option<NodeId> {
        self.editor.rows().get(self.cursor).map(|row| row.id())
    }

    /// Handle a tree action. Returns true when the menu should close.
    pub fn handle_action(&mut self, action: TreeAction) -> bool {
        if self.read_only && action.changes_selection() {
            return false;
        }
        match action {
            TreeAction::Up => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            TreeAction::Down => {
                if self.cursor + 1 < self.editor.rows().len() {
                    self.cursor += 1;
                }
            }
            TreeAction::Toggle => {
                if let Some(id) = self.current_id() {
                    let proposal = self.editor.toggle(id);
                    self.adopt(proposal);
                }
            }
            TreeAction::Expand => {
                if let Some(id) = self.current_id() {
                    self.editor.set_expanded(id, true);
                }
            }
            TreeAction::Collapse => self.collapse_current(),
            TreeAction::SelectAll => {
                let proposal = self.editor.select_all(true);
                self.adopt(proposal);
            }
            TreeAction::SelectNone => {
                let proposal = self.editor.select_all(false);
                self.adopt(proposal);
            }
            TreeAction::ExpandAll => self.with_cursor_kept(|editor| {
                editor.expand_all(true);
            }),
            TreeAction::CollapseAll => self.with_cursor_kept(|editor| {
                editor.expand_all(false);
            }),
            TreeAction::ToggleLinkage => {
                self.editor.toggle_linkage();
            }
            TreeAction::Confirm | TreeAction::Quit => return true,
        }
        false
    }

    fn adopt(&mut self, proposal: Option<SelectionSet>) {
        if let Some(next) = proposal {
            self.editor.set_selection(next);
        }
    }

    /// Collapse an expanded parent, otherwise move to the parent row
    fn collapse_current(&mut self) {
        let Some(id) = self.current_id() else {
            return;
        };
        if self.editor.index().has_children(id) && self.editor.expansion().contains(id) {
            self.editor.set_expanded(id, false);
            return;
        }
        if let Some(parent) = self.editor.index().parent_of(id).filter(|&p| p != ROOT_PARENT) {
            self.move_to(parent);
        }
    }

    /// Run an expansion change, keeping the cursor on the same node or its
    /// nearest visible ancestor
    fn with_cursor_kept(&mut self, change: impl FnOnce(&mut PermissionEditor)) {
        let current = self.current_id();
        change(&mut self.editor);

        let mut target = current;
        while let Some(id) = target {
            if self.move_to(id) {
                return;
            }
            target = self.editor.index().parent_of(id).filter(|&p| p != ROOT_PARENT);
        }
        self.cursor = 0;
    }

    fn move_to(&mut self, id: NodeId) -> bool {
        match self.editor.rows().iter().position(|row| row.id() == id) {
            Some(pos) => {
                self.cursor = pos;
                true
            }
            None => false,
        }
    }

    /// Render visible rows with the cursor marker
    pub fn render(&self, style: &RenderStyle) -> String {
        render_rows(&self.editor.rows(), Some(self.cursor), style)
    }

    /// Render the status bar
    pub fn render_status_bar(&self, style: &RenderStyle) -> String {
        render_status_bar(
            &self.editor.summary(),
            self.editor.linkage(),
            self.is_read_only(),
            style,
        )
    }

    /// Render the help bar
    pub fn render_help_bar(&self) -> String {
        render_help_bar()
    }
}
