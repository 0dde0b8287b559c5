//! Linked selection over a permission tree.
//!
//! With linkage on, checking a node also checks its whole subtree and every
//! ancestor up to the root. Unchecking a node clears its subtree, then walks
//! the ancestors nearest-first and drops each one that no longer has a checked
//! direct child. Each ancestor is judged against the set as already updated
//! by the previous step, so pruning ripples upward until an ancestor with a
//! remaining checked child is found.
//!
//! With linkage off only the target node changes.
//!
//! All functions are pure: the input selection is never modified.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, trace};

use crate::domain::entities::{NodeId, TreeIndex, ROOT_PARENT};
use crate::domain::value_objects::SelectionSet;

/// Every descendant of `id` in breadth-first order, excluding `id` itself.
pub fn collect_descendants(index: &TreeIndex, id: NodeId) -> Vec<NodeId> {
    let mut result = Vec::new();
    let mut visited = HashSet::from([id]);
    let mut queue: VecDeque<NodeId> = index.children_of(id).iter().copied().collect();

    while let Some(current) = queue.pop_front() {
        // Guards against cycles introduced by duplicate ids
        if !visited.insert(current) {
            continue;
        }
        result.push(current);
        queue.extend(index.children_of(current).iter().copied());
    }

    result
}

/// Ancestors of `id`, nearest first, stopping at the root sentinel.
pub fn collect_ancestors(index: &TreeIndex, id: NodeId) -> Vec<NodeId> {
    let mut result = Vec::new();
    let mut visited = HashSet::from([id]);
    let mut current = index.parent_of(id);

    while let Some(parent) = current {
        if parent == ROOT_PARENT || !visited.insert(parent) {
            break;
        }
        result.push(parent);
        current = index.parent_of(parent);
    }

    result
}

/// Compute the selection that results from checking or unchecking `target`.
///
/// Unknown targets leave the selection unchanged.
pub fn apply_toggle(
    index: &TreeIndex,
    selection: &SelectionSet,
    target: NodeId,
    checked: bool,
    linkage: bool,
) -> SelectionSet {
    if !index.contains(target) {
        debug!(target, "toggle ignored for unknown node");
        return selection.clone();
    }

    let mut next = selection.clone();

    if checked {
        next.insert(target);
        if linkage {
            for id in collect_descendants(index, target) {
                next.insert(id);
            }
            for id in collect_ancestors(index, target) {
                next.insert(id);
            }
        }
    } else {
        next.remove(target);
        if linkage {
            for id in collect_descendants(index, target) {
                next.remove(id);
            }
            for ancestor in collect_ancestors(index, target) {
                let has_checked_child = index
                    .children_of(ancestor)
                    .iter()
                    .any(|child| next.contains(*child));
                if !has_checked_child {
                    trace!(ancestor, "pruning ancestor without checked children");
                    next.remove(ancestor);
                }
            }
        }
    }

    debug!(
        target,
        checked,
        linkage,
        before = selection.len(),
        after = next.len(),
        "applied toggle"
    );

    next
}
