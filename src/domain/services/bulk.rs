//! Whole-set replacements: select/deselect all, expand/collapse all.
//!
//! These never merge with the current state and ignore the linkage flag.

use tracing::debug;

use crate::domain::entities::TreeIndex;
use crate::domain::value_objects::{ExpansionSet, SelectionSet};

/// Every node when `checked`, nothing otherwise
pub fn select_all(index: &TreeIndex, checked: bool) -> SelectionSet {
    debug!(checked, nodes = index.len(), "select all");
    if checked {
        index.all_ids().iter().copied().collect()
    } else {
        SelectionSet::new()
    }
}

/// Every parent node when `expanded`, nothing otherwise
pub fn expand_all(index: &TreeIndex, expanded: bool) -> ExpansionSet {
    debug!(expanded, parents = index.parent_ids().len(), "expand all");
    if expanded {
        ExpansionSet::all(index)
    } else {
        ExpansionSet::new()
    }
}

/// Drives the "select all" checkbox
pub fn all_selected(index: &TreeIndex, selection: &SelectionSet) -> bool {
    selection.contains_all(index.all_ids())
}

/// Drives the "expand all" checkbox
pub fn all_expanded(index: &TreeIndex, expansion: &ExpansionSet) -> bool {
    expansion.all_expanded(index)
}
