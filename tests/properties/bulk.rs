//! Property tests for bulk operations and expansion.

use proptest::prelude::*;

use permtree::domain::entities::TreeIndex;
use permtree::domain::services::{all_expanded, all_selected, expand_all, select_all};
use permtree::domain::value_objects::ExpansionSet;

use super::strategies::arb_forest;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: bulk operations replace the whole set and are idempotent.
    #[test]
    fn property_bulk_operations_are_idempotent(tree in arb_forest()) {
        let index = TreeIndex::build(tree);

        let all = select_all(&index, true);
        prop_assert_eq!(select_all(&index, true), all.clone());
        prop_assert_eq!(all.len(), index.len());
        prop_assert!(all_selected(&index, &all));
        prop_assert!(select_all(&index, false).is_empty());

        let expanded = expand_all(&index, true);
        prop_assert_eq!(expand_all(&index, true), expanded.clone());
        prop_assert_eq!(expanded.len(), index.parent_ids().len());
        prop_assert!(expand_all(&index, false).is_empty());
        prop_assert_eq!(all_expanded(&index, &expanded), !index.parent_ids().is_empty());
    }

    /// PROPERTY: toggling a parent twice restores the expansion set, and
    /// leaves never enter it.
    #[test]
    fn property_expansion_toggle_round_trips(tree in arb_forest()) {
        let index = TreeIndex::build(tree);
        let start = ExpansionSet::new();

        for &id in index.all_ids() {
            let once = start.toggled(&index, id);
            prop_assert_eq!(once.contains(id), index.has_children(id));
            prop_assert_eq!(once.toggled(&index, id), start.clone());
            prop_assert!(once.is_expanded(&index, id) || !index.has_children(id));
        }
    }

    /// PROPERTY: reconciling after a reload expands every current parent and
    /// keeps whatever was already expanded.
    #[test]
    fn property_reconcile_expands_new_parents(old in arb_forest(), new in arb_forest()) {
        let old_index = TreeIndex::build(old);
        let new_index = TreeIndex::build(new);

        let before = expand_all(&old_index, true);
        let after = before.reconciled(&new_index);

        prop_assert!(after.all_expanded(&new_index) || new_index.parent_ids().is_empty());
        prop_assert!(before.iter().all(|id| after.contains(id)));
    }
}
