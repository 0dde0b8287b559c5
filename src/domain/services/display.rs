//! Tree-to-rows walk for rendering.
//!
//! Produces depth-annotated rows in pre-order. The subtree of a collapsed
//! node is skipped; leaves are always treated as expanded.

use std::collections::HashMap;

use crate::domain::entities::{Node, NodeId, TreeIndex, ROOT_PARENT};
use crate::domain::value_objects::{ExpansionSet, SelectionSet};

/// A visible row of the permission tree
#[derive(Debug, Clone, Copy)]
pub struct DisplayRow<'a> {
    pub node: &'a Node,
    /// Depth level (0 = root)
    pub depth: usize,
    pub checked: bool,
    pub expanded: bool,
    pub has_children: bool,
    /// Some but not all descendants are checked
    pub indeterminate: bool,
}

impl DisplayRow<'_> {
    pub fn id(&self) -> NodeId {
        self.node.id
    }
}

/// Visible rows for the current selection and expansion state.
pub fn display_rows<'a>(
    index: &'a TreeIndex,
    selection: &SelectionSet,
    expansion: &ExpansionSet,
) -> Vec<DisplayRow<'a>> {
    let counts = descendant_counts(index, selection);
    let mut rows = Vec::with_capacity(index.len());
    let mut stack: Vec<(&Node, usize)> = index.roots().iter().rev().map(|n| (n, 0)).collect();

    while let Some((node, depth)) = stack.pop() {
        let has_children = !node.children.is_empty();
        let expanded = expansion.is_expanded(index, node.id) || !has_children;
        let indeterminate = counts
            .get(&node.id)
            .is_some_and(|&(checked, total)| checked > 0 && checked < total);

        rows.push(DisplayRow {
            node,
            depth,
            checked: selection.contains(node.id),
            expanded,
            has_children,
            indeterminate,
        });

        if expanded {
            for child in node.children.iter().rev() {
                stack.push((child, depth + 1));
            }
        }
    }

    rows
}

/// `(checked descendants, total descendants)` per node.
fn descendant_counts(index: &TreeIndex, selection: &SelectionSet) -> HashMap<NodeId, (usize, usize)> {
    let entries: Vec<_> = index.entries().collect();
    let mut counts: HashMap<NodeId, (usize, usize)> = HashMap::with_capacity(entries.len());

    // Reverse pre-order visits every child before its parent
    for entry in entries.iter().rev() {
        let (checked, total) = counts.get(&entry.node.id).copied().unwrap_or_default();
        if entry.parent == ROOT_PARENT {
            continue;
        }
        let own = usize::from(selection.contains(entry.node.id));
        let parent = counts.entry(entry.parent).or_default();
        parent.0 += checked + own;
        parent.1 += total + 1;
    }

    counts
}
