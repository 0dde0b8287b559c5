//! Permission editor session
//!
//! Holds everything a role editor screen needs between interactions: the tree
//! index, the caller's latest selection, the expansion state, the linkage flag
//! and the disabled flag.
//!
//! The selection belongs to the host. Selection-changing methods take `&self`,
//! publish the full proposal through the sink and return it; nothing changes
//! until the host calls [`PermissionEditor::set_selection`]. Expansion and
//! linkage are session state and are updated in place. A disabled editor
//! rejects every toggle, expansion included.

use std::sync::Arc;

use tracing::debug;

use crate::domain::entities::{Node, NodeId, TreeIndex};
use crate::domain::ports::{SelectionEvent, SelectionEventSink};
use crate::domain::services::{self, DisplayRow, SelectionSummary};
use crate::domain::value_objects::{ExpansionSet, SelectionSet};

use super::options::EditorOptions;

/// A role editor's view of one permission tree
pub struct PermissionEditor {
    index: TreeIndex,
    selection: SelectionSet,
    expansion: ExpansionSet,
    linkage: bool,
    disabled: bool,
    sink: Arc<dyn SelectionEventSink>,
}

impl PermissionEditor {
    /// Create a session over `tree` with the host's current `selection`
    pub fn new(
        tree: Vec<Node>,
        selection: SelectionSet,
        options: EditorOptions,
        sink: Arc<dyn SelectionEventSink>,
    ) -> Self {
        Self::from_index(TreeIndex::build(tree), selection, options, sink)
    }

    /// Create a session over an already built (possibly validated) index
    pub fn from_index(
        index: TreeIndex,
        selection: SelectionSet,
        options: EditorOptions,
        sink: Arc<dyn SelectionEventSink>,
    ) -> Self {
        let expansion = ExpansionSet::new().reconciled(&index);
        Self {
            index,
            selection,
            expansion,
            linkage: options.linkage,
            disabled: options.disabled,
            sink,
        }
    }

    // ------------------------------------------------------------------
    // Host-controlled inputs
    // ------------------------------------------------------------------

    /// Replace the tree. Indices are rebuilt and every parent id not yet in
    /// the expansion set is added.
    pub fn set_tree(&mut self, tree: Vec<Node>) {
        self.set_index(TreeIndex::build(tree));
    }

    pub fn set_index(&mut self, index: TreeIndex) {
        self.index = index;
        self.expansion = self.expansion.reconciled(&self.index);
        debug!(
            nodes = self.index.len(),
            expanded = self.expansion.len(),
            "tree replaced"
        );
    }

    /// Adopt a selection from the host
    pub fn set_selection(&mut self, selection: SelectionSet) {
        self.selection = selection;
    }

    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    pub fn index(&self) -> &TreeIndex {
        &self.index
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    pub fn expansion(&self) -> &ExpansionSet {
        &self.expansion
    }

    pub fn linkage(&self) -> bool {
        self.linkage
    }

    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    pub fn is_checked(&self, id: NodeId) -> bool {
        self.selection.contains(id)
    }

    pub fn is_expanded(&self, id: NodeId) -> bool {
        self.expansion.is_expanded(&self.index, id)
    }

    /// State of the "select all" checkbox
    pub fn all_selected(&self) -> bool {
        services::all_selected(&self.index, &self.selection)
    }

    /// State of the "expand all" checkbox
    pub fn all_expanded(&self) -> bool {
        services::all_expanded(&self.index, &self.expansion)
    }

    /// Visible rows for rendering
    pub fn rows(&self) -> Vec<DisplayRow<'_>> {
        services::display_rows(&self.index, &self.selection, &self.expansion)
    }

    pub fn summary(&self) -> SelectionSummary {
        services::summarize(&self.index, &self.selection)
    }

    pub fn permissions(&self) -> Vec<&str> {
        services::selected_permissions(&self.index, &self.selection)
    }

    // ------------------------------------------------------------------
    // Selection proposals
    // ------------------------------------------------------------------

    /// Check or uncheck a node. Returns the proposed selection, or `None`
    /// when the editor is disabled.
    pub fn toggle_node(&self, id: NodeId, checked: bool) -> Option<SelectionSet> {
        if self.reject_if_disabled("toggle_node") {
            return None;
        }
        let next = services::apply_toggle(&self.index, &self.selection, id, checked, self.linkage);
        self.propose(next)
    }

    /// Flip a node relative to its current checked state
    pub fn toggle(&self, id: NodeId) -> Option<SelectionSet> {
        self.toggle_node(id, !self.is_checked(id))
    }

    /// Select every node, or none. Linkage does not apply.
    pub fn select_all(&self, checked: bool) -> Option<SelectionSet> {
        if self.reject_if_disabled("select_all") {
            return None;
        }
        self.propose(services::select_all(&self.index, checked))
    }

    // ------------------------------------------------------------------
    // Session state
    // ------------------------------------------------------------------

    /// Turn cascading on or off. Ignored while disabled.
    pub fn set_linkage(&mut self, enabled: bool) -> bool {
        if self.reject_if_disabled("set_linkage") {
            return false;
        }
        if self.linkage != enabled {
            self.linkage = enabled;
            self.sink.on_event(SelectionEvent::LinkageChanged { enabled });
        }
        true
    }

    pub fn toggle_linkage(&mut self) -> bool {
        self.set_linkage(!self.linkage)
    }

    /// Expand every parent node, or collapse everything. Ignored while
    /// disabled.
    pub fn expand_all(&mut self, expanded: bool) -> bool {
        if self.reject_if_disabled("expand_all") {
            return false;
        }
        self.expansion = services::expand_all(&self.index, expanded);
        self.emit_expansion();
        true
    }

    /// Flip a single node's expansion. Leaves are ignored, and so is
    /// everything while disabled.
    pub fn toggle_expanded(&mut self, id: NodeId) -> bool {
        if self.reject_if_disabled("toggle_expanded") {
            return false;
        }
        if !self.index.has_children(id) {
            return true;
        }
        self.expansion = self.expansion.toggled(&self.index, id);
        self.emit_expansion();
        true
    }

    /// Expand or collapse a single node explicitly
    pub fn set_expanded(&mut self, id: NodeId, expanded: bool) -> bool {
        if self.index.has_children(id) && self.expansion.contains(id) != expanded {
            return self.toggle_expanded(id);
        }
        !self.disabled
    }

    fn propose(&self, next: SelectionSet) -> Option<SelectionSet> {
        self.sink.on_event(SelectionEvent::Changed {
            selected: next.clone(),
        });
        Some(next)
    }

    fn emit_expansion(&self) {
        self.sink.on_event(SelectionEvent::ExpansionChanged {
            expanded: self.expansion.iter().collect(),
        });
    }

    fn reject_if_disabled(&self, action: &'static str) -> bool {
        if self.disabled {
            debug!(action, "editor disabled, toggle rejected");
            self.sink.on_event(SelectionEvent::Rejected { action });
        }
        self.disabled
    }
}
