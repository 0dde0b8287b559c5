//! Selection set value object
//!
//! An immutable-by-convention set of checked node ids. Engine operations take
//! a selection by reference and return a brand new one; the caller decides
//! whether to adopt it.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::domain::entities::NodeId;
use crate::error::{PermTreeError, PermTreeResult};

/// Set of selected node ids, ordered ascending by id
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectionSet(BTreeSet<NodeId>);

impl SelectionSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.0.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Ids in ascending order
    pub fn iter(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.0.iter().copied()
    }

    /// Ids in ascending order, as handed to selection listeners
    pub fn to_vec(&self) -> Vec<NodeId> {
        self.iter().collect()
    }

    /// Whether every id in `ids` is selected (false for an empty list)
    pub fn contains_all(&self, ids: &[NodeId]) -> bool {
        !ids.is_empty() && ids.iter().all(|id| self.0.contains(id))
    }

    pub(crate) fn insert(&mut self, id: NodeId) -> bool {
        self.0.insert(id)
    }

    pub(crate) fn remove(&mut self, id: NodeId) -> bool {
        self.0.remove(&id)
    }

    /// Ids added and removed going from `self` to `next`
    pub fn diff(&self, next: &SelectionSet) -> SelectionDiff {
        SelectionDiff {
            added: next.0.difference(&self.0).copied().collect(),
            removed: self.0.difference(&next.0).copied().collect(),
        }
    }
}

impl FromIterator<NodeId> for SelectionSet {
    fn from_iter<I: IntoIterator<Item = NodeId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> From<[NodeId; N]> for SelectionSet {
    fn from(ids: [NodeId; N]) -> Self {
        ids.into_iter().collect()
    }
}

impl From<Vec<NodeId>> for SelectionSet {
    fn from(ids: Vec<NodeId>) -> Self {
        ids.into_iter().collect()
    }
}

impl std::fmt::Display for SelectionSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let ids: Vec<String> = self.iter().map(|id| id.to_string()).collect();
        write!(f, "{}", ids.join(","))
    }
}

/// Change between two selections
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct SelectionDiff {
    pub added: Vec<NodeId>,
    pub removed: Vec<NodeId>,
}

impl SelectionDiff {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }
}

/// Parse a comma separated id list such as `"1, 2,3"`.
///
/// Empty input yields an empty selection.
pub fn parse_selection(input: &str) -> PermTreeResult<SelectionSet> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|s| {
            s.parse::<NodeId>()
                .map_err(|_| PermTreeError::InvalidSelection {
                    input: input.to_string(),
                })
        })
        .collect()
}
