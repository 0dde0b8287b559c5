//! Summaries of a selection for role payloads and status lines.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::{NodeKind, TreeIndex};
use crate::domain::value_objects::SelectionSet;

/// Permission strings of selected nodes, in tree order, without duplicates.
pub fn selected_permissions<'a>(index: &'a TreeIndex, selection: &SelectionSet) -> Vec<&'a str> {
    let mut result: Vec<&str> = Vec::new();
    for entry in index.entries() {
        if !selection.contains(entry.node.id) {
            continue;
        }
        if let Some(permission) = entry.node.permission.as_deref() {
            if !permission.is_empty() && !result.contains(&permission) {
                result.push(permission);
            }
        }
    }
    result
}

/// Selected vs total counts split by node kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SelectionSummary {
    pub selected: usize,
    pub total: usize,
    pub menus: usize,
    pub operations: usize,
}

pub fn summarize(index: &TreeIndex, selection: &SelectionSet) -> SelectionSummary {
    let mut summary = SelectionSummary {
        total: index.len(),
        ..Default::default()
    };

    let mut seen = HashSet::new();
    for entry in index.entries() {
        let id = entry.node.id;
        if !seen.insert(id) || !selection.contains(id) {
            continue;
        }
        summary.selected += 1;
        match entry.node.kind {
            NodeKind::Operation => summary.operations += 1,
            NodeKind::Menu => summary.menus += 1,
        }
    }

    summary
}
