//! Random permission trees for property tests.

use proptest::prelude::*;

use permtree::domain::entities::{Node, NodeId};

/// Forest with ids `1..=n`. Each node's parent has a smaller id, so the
/// result is acyclic with unique ids.
pub fn forest_from_parents(parents: &[usize]) -> Vec<Node> {
    let n = parents.len();
    let mut kids: Vec<Vec<usize>> = vec![Vec::new(); n + 1];
    for (i, &parent) in parents.iter().enumerate() {
        kids[parent].push(i + 1);
    }

    let mut built: Vec<Option<Node>> = (0..=n).map(|_| None).collect();
    for id in (1..=n).rev() {
        let children: Vec<Node> = kids[id].iter().filter_map(|&c| built[c].take()).collect();
        let node = if children.is_empty() {
            Node::operation(id as NodeId, format!("op-{id}"), format!("perm:{id}"))
        } else {
            Node::menu(id as NodeId, format!("menu-{id}")).with_children(children)
        };
        built[id] = Some(node);
    }

    kids[0].iter().filter_map(|&r| built[r].take()).collect()
}

pub fn arb_forest() -> impl Strategy<Value = Vec<Node>> {
    (1usize..40)
        .prop_flat_map(|n| (0..n).map(|i| 0..=i).collect::<Vec<_>>())
        .prop_map(|parents| forest_from_parents(&parents))
}

/// Tree, a selection over its ids, and a target id in the tree
pub fn arb_case() -> impl Strategy<Value = (Vec<Node>, Vec<NodeId>, NodeId)> {
    (1usize..40)
        .prop_flat_map(|n| {
            let parents = (0..n).map(|i| 0..=i).collect::<Vec<_>>();
            let selection = proptest::collection::vec(1..=n as NodeId, 0..=n);
            (parents, selection, 1..=n as NodeId)
        })
        .prop_map(|(parents, selection, target)| (forest_from_parents(&parents), selection, target))
}

/// Tree plus a sequence of (target, checked) toggles
pub fn arb_session() -> impl Strategy<Value = (Vec<Node>, Vec<(NodeId, bool)>)> {
    (1usize..30)
        .prop_flat_map(|n| {
            let parents = (0..n).map(|i| 0..=i).collect::<Vec<_>>();
            let toggles = proptest::collection::vec((1..=n as NodeId, any::<bool>()), 0..24);
            (parents, toggles)
        })
        .prop_map(|(parents, toggles)| (forest_from_parents(&parents), toggles))
}
