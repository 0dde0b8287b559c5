//! Property tests for the linkage selection algorithm.

use proptest::prelude::*;

use permtree::domain::entities::{TreeIndex, ROOT_PARENT};
use permtree::domain::services::{apply_toggle, collect_ancestors, collect_descendants, select_all};
use permtree::domain::value_objects::SelectionSet;

use super::strategies::{arb_case, arb_forest, arb_session};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: checking a node adds it, its whole subtree and every ancestor,
    /// and never removes anything.
    #[test]
    fn property_check_cascades_both_ways((tree, selected, target) in arb_case()) {
        let index = TreeIndex::build(tree);
        let selection = SelectionSet::from(selected);

        let next = apply_toggle(&index, &selection, target, true, true);

        prop_assert!(next.contains(target));
        for id in collect_descendants(&index, target) {
            prop_assert!(next.contains(id), "descendant {id} missing");
        }
        for id in collect_ancestors(&index, target) {
            prop_assert!(next.contains(id), "ancestor {id} missing");
        }
        for id in selection.iter() {
            prop_assert!(next.contains(id), "check removed {id}");
        }
    }

    /// PROPERTY: unchecking removes the subtree, keeps an ancestor only when it
    /// was selected and still has a selected child, and leaves every other
    /// node alone.
    #[test]
    fn property_uncheck_prunes_orphaned_ancestors((tree, selected, target) in arb_case()) {
        let index = TreeIndex::build(tree);
        let selection = SelectionSet::from(selected);

        let next = apply_toggle(&index, &selection, target, false, true);
        let descendants = collect_descendants(&index, target);
        let ancestors = collect_ancestors(&index, target);

        prop_assert!(!next.contains(target));
        for &id in &descendants {
            prop_assert!(!next.contains(id));
        }
        for &id in &ancestors {
            let has_selected_child = index.children_of(id).iter().any(|&c| next.contains(c));
            prop_assert_eq!(next.contains(id), selection.contains(id) && has_selected_child);
        }
        for &id in index.all_ids() {
            if id != target && !descendants.contains(&id) && !ancestors.contains(&id) {
                prop_assert_eq!(next.contains(id), selection.contains(id));
            }
        }
    }

    /// PROPERTY: without linkage only the target changes.
    #[test]
    fn property_no_linkage_touches_only_target(
        (tree, selected, target) in arb_case(),
        checked in any::<bool>(),
    ) {
        let index = TreeIndex::build(tree);
        let selection = SelectionSet::from(selected);

        let next = apply_toggle(&index, &selection, target, checked, false);

        prop_assert_eq!(next.contains(target), checked);
        let diff = selection.diff(&next);
        prop_assert!(diff.added.iter().chain(&diff.removed).all(|&id| id == target));
    }

    /// PROPERTY: the algorithm is a pure function of its inputs.
    #[test]
    fn property_toggle_is_deterministic(
        (tree, selected, target) in arb_case(),
        checked in any::<bool>(),
        linkage in any::<bool>(),
    ) {
        let index = TreeIndex::build(tree);
        let selection = SelectionSet::from(selected);
        let before = selection.clone();

        let a = apply_toggle(&index, &selection, target, checked, linkage);
        let b = apply_toggle(&index, &selection, target, checked, linkage);

        prop_assert_eq!(&a, &b);
        prop_assert_eq!(a.to_vec(), b.to_vec());
        prop_assert_eq!(selection, before);
    }

    /// PROPERTY: toggling an id that is not in the tree returns the input.
    #[test]
    fn property_unknown_id_is_no_op(
        (tree, selected, _target) in arb_case(),
        checked in any::<bool>(),
        linkage in any::<bool>(),
    ) {
        let index = TreeIndex::build(tree);
        let selection = SelectionSet::from(selected);
        let unknown = index.len() as u64 + 1000;

        prop_assert_eq!(apply_toggle(&index, &selection, unknown, checked, linkage), selection.clone());
        prop_assert_eq!(apply_toggle(&index, &selection, ROOT_PARENT, checked, linkage), selection);
    }

    /// PROPERTY: select-all followed by unchecking every node, in any order,
    /// converges to the empty set.
    #[test]
    fn property_uncheck_everything_converges_to_empty(
        (tree, order) in arb_forest().prop_flat_map(|tree| {
            let ids: Vec<u64> = TreeIndex::build(tree.clone()).all_ids().to_vec();
            (Just(tree), Just(ids).prop_shuffle())
        })
    ) {
        let index = TreeIndex::build(tree);
        let mut selection = select_all(&index, true);

        for id in order {
            selection = apply_toggle(&index, &selection, id, false, true);
        }

        prop_assert!(selection.is_empty(), "left over: {}", selection);
    }

    /// PROPERTY: starting from nothing, any sequence of linked toggles keeps
    /// the selection closed upward (a selected node's parent is selected).
    #[test]
    fn property_linked_sessions_stay_upward_closed((tree, toggles) in arb_session()) {
        let index = TreeIndex::build(tree);
        let mut selection = SelectionSet::new();

        for (target, checked) in toggles {
            selection = apply_toggle(&index, &selection, target, checked, true);
            for id in selection.iter() {
                let parent = index.parent_of(id).unwrap_or(ROOT_PARENT);
                prop_assert!(
                    parent == ROOT_PARENT || selection.contains(parent),
                    "{id} selected without parent {parent}"
                );
            }
        }
    }
}
