//! Derived indices over a permission tree.
//!
//! A [`TreeIndex`] owns the forest it was built from together with the maps
//! every engine operation needs:
//! * parent index: node id -> parent id ([`ROOT_PARENT`] for roots)
//! * children index: node id -> ordered direct child ids; [`ROOT_PARENT`] maps
//!   to the root ids
//! * all ids in pre-order
//! * parent ids: nodes with at least one child
//!
//! The index is rebuilt whenever the tree is replaced. Nothing is updated
//! incrementally.

use std::collections::{BTreeSet, HashMap, HashSet};

use tracing::debug;

use super::node::{Node, NodeId, ROOT_PARENT};
use crate::error::{PermTreeError, PermTreeResult};

/// One node visited by the pre-order walk, paired with its parent id.
#[derive(Debug, Clone, Copy)]
pub struct FlatEntry<'a> {
    pub node: &'a Node,
    pub parent: NodeId,
    /// Depth level (0 = root)
    pub depth: usize,
}

/// Pre-order walk over a forest.
///
/// Uses an explicit stack so arbitrarily deep trees cannot overflow the call
/// stack.
pub struct PreOrderIter<'a> {
    stack: Vec<FlatEntry<'a>>,
}

impl<'a> PreOrderIter<'a> {
    pub fn new(roots: &'a [Node]) -> Self {
        let stack = roots
            .iter()
            .rev()
            .map(|node| FlatEntry {
                node,
                parent: ROOT_PARENT,
                depth: 0,
            })
            .collect();
        Self { stack }
    }
}

impl<'a> Iterator for PreOrderIter<'a> {
    type Item = FlatEntry<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let entry = self.stack.pop()?;

        // Reverse push keeps siblings in document order
        for child in entry.node.children.iter().rev() {
            self.stack.push(FlatEntry {
                node: child,
                parent: entry.node.id,
                depth: entry.depth + 1,
            });
        }

        Some(entry)
    }
}

/// Flatten a forest into `(node, parent id)` entries in pre-order.
pub fn flatten(roots: &[Node]) -> Vec<FlatEntry<'_>> {
    PreOrderIter::new(roots).collect()
}

/// Parent/children/id indices derived from a permission tree
#[derive(Debug, Clone, Default)]
pub struct TreeIndex {
    roots: Vec<Node>,
    parents: HashMap<NodeId, NodeId>,
    children: HashMap<NodeId, Vec<NodeId>>,
    all_ids: Vec<NodeId>,
    parent_ids: BTreeSet<NodeId>,
}

impl TreeIndex {
    /// Build the indices for `roots`.
    ///
    /// Never fails. If an id occurs more than once, the later occurrence
    /// silently overwrites the earlier one in the parent and children
    /// indices, and the id is listed once in [`TreeIndex::all_ids`].
    /// Nodes using the [`ROOT_PARENT`] id are dropped with their subtrees.
    /// Use [`TreeIndex::try_build`] to reject such trees instead.
    pub fn build(mut roots: Vec<Node>) -> Self {
        let dropped = prune_reserved(&mut roots);
        if dropped > 0 {
            debug!(dropped, "dropped nodes using the reserved root id");
        }

        let mut parents = HashMap::new();
        let mut children: HashMap<NodeId, Vec<NodeId>> = HashMap::new();
        let mut all_ids = Vec::new();
        let mut seen = HashSet::new();

        for entry in PreOrderIter::new(&roots) {
            let id = entry.node.id;
            parents.insert(id, entry.parent);
            children.insert(id, entry.node.children.iter().map(|c| c.id).collect());

            if seen.insert(id) {
                all_ids.push(id);
            }
        }

        children.insert(ROOT_PARENT, roots.iter().map(|n| n.id).collect());

        let parent_ids: BTreeSet<NodeId> = children
            .iter()
            .filter(|(id, kids)| **id != ROOT_PARENT && !kids.is_empty())
            .map(|(&id, _)| id)
            .collect();

        debug!(
            nodes = all_ids.len(),
            parents = parent_ids.len(),
            roots = roots.len(),
            "built permission tree index"
        );

        Self {
            roots,
            parents,
            children,
            all_ids,
            parent_ids,
        }
    }

    /// Build the indices, rejecting trees that reuse an id or use the root
    /// sentinel as an id.
    pub fn try_build(roots: Vec<Node>) -> PermTreeResult<Self> {
        validate_ids(&roots)?;
        Ok(Self::build(roots))
    }

    /// The forest this index was built from
    pub fn roots(&self) -> &[Node] {
        &self.roots
    }

    /// Pre-order walk over the indexed tree
    pub fn entries(&self) -> PreOrderIter<'_> {
        PreOrderIter::new(&self.roots)
    }

    /// Every node id, in pre-order, each listed once
    pub fn all_ids(&self) -> &[NodeId] {
        &self.all_ids
    }

    /// Ids of nodes that have at least one child
    pub fn parent_ids(&self) -> &BTreeSet<NodeId> {
        &self.parent_ids
    }

    /// Parent of `id`, [`ROOT_PARENT`] for roots, `None` if unknown
    pub fn parent_of(&self, id: NodeId) -> Option<NodeId> {
        self.parents.get(&id).copied()
    }

    /// Direct children of `id`; [`ROOT_PARENT`] yields the root ids
    pub fn children_of(&self, id: NodeId) -> &[NodeId] {
        self.children.get(&id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.parents.contains_key(&id)
    }

    pub fn has_children(&self, id: NodeId) -> bool {
        self.parent_ids.contains(&id)
    }

    /// Number of distinct node ids
    pub fn len(&self) -> usize {
        self.all_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.all_ids.is_empty()
    }

    /// First node carrying `id` in pre-order
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.entries().find(|e| e.node.id == id).map(|e| e.node)
    }
}

/// Remove every node whose id is [`ROOT_PARENT`], subtree included.
/// Returns how many such nodes were removed.
fn prune_reserved(roots: &mut Vec<Node>) -> usize {
    let mut dropped = 0;
    let mut stack = vec![roots];
    while let Some(list) = stack.pop() {
        let before = list.len();
        list.retain(|node| node.id != ROOT_PARENT);
        dropped += before - list.len();
        for node in list {
            stack.push(&mut node.children);
        }
    }
    dropped
}

fn validate_ids(roots: &[Node]) -> PermTreeResult<()> {
    let mut seen = HashSet::new();
    for entry in PreOrderIter::new(roots) {
        let id = entry.node.id;
        if id == ROOT_PARENT {
            return Err(PermTreeError::InvalidNodeId { id });
        }
        if !seen.insert(id) {
            return Err(PermTreeError::DuplicateNodeId { id });
        }
    }
    Ok(())
}
