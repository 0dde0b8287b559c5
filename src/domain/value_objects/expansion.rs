//! Expansion set value object
//!
//! Tracks which parent nodes are shown expanded. Leaves never enter the set;
//! [`ExpansionSet::is_expanded`] treats them as always expanded.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::entities::{NodeId, TreeIndex};

/// Set of expanded node ids
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct ExpansionSet(BTreeSet<NodeId>);

impl ExpansionSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every parent node of `index` expanded
    pub fn all(index: &TreeIndex) -> Self {
        Self(index.parent_ids().clone())
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }

    /// Leaves count as expanded; parents only when present in the set
    pub fn is_expanded(&self, index: &TreeIndex, id: NodeId) -> bool {
        !index.has_children(id) || self.0.contains(&id)
    }

    /// Flip a single node. Leaves and unknown ids are left alone.
    pub fn toggled(&self, index: &TreeIndex, id: NodeId) -> Self {
        let mut next = self.clone();
        if !index.has_children(id) {
            return next;
        }
        if !next.0.remove(&id) {
            next.0.insert(id);
        }
        next
    }

    /// Add every parent id of `index` not already present.
    ///
    /// Ids no longer in the tree are kept but never consulted, since reads
    /// always go through the current index.
    pub fn reconciled(&self, index: &TreeIndex) -> Self {
        let mut next = self.clone();
        next.0.extend(index.parent_ids().iter().copied());
        next
    }

    /// Whether every parent of `index` is expanded (false without parents)
    pub fn all_expanded(&self, index: &TreeIndex) -> bool {
        let parents = index.parent_ids();
        !parents.is_empty() && parents.iter().all(|id| self.0.contains(id))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<NodeId> for ExpansionSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
