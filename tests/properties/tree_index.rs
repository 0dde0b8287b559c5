//! Property tests for the index builder and tree loading.

use proptest::prelude::*;

use permtree::domain::entities::{TreeIndex, ROOT_PARENT};
use permtree::infrastructure::{FsTreeRepository, TreeFormat};

use super::strategies::arb_forest;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: with unique ids every id is listed once and sits in its
    /// parent's child list.
    #[test]
    fn property_index_is_consistent(tree in arb_forest()) {
        let index = TreeIndex::build(tree);

        let mut ids = index.all_ids().to_vec();
        ids.sort_unstable();
        ids.dedup();
        prop_assert_eq!(ids.len(), index.len());

        for &id in index.all_ids() {
            let parent = index.parent_of(id).unwrap();
            prop_assert!(index.children_of(parent).contains(&id));
            prop_assert_eq!(index.has_children(id), !index.children_of(id).is_empty());
        }
        prop_assert_eq!(
            index.children_of(ROOT_PARENT).len(),
            index.roots().len()
        );
    }

    /// PROPERTY: trees survive the JSON and YAML loaders unchanged.
    #[test]
    fn property_loaders_accept_serialized_trees(tree in arb_forest()) {
        let repository = FsTreeRepository::new();

        let json = serde_json::to_string(&tree).unwrap();
        let from_json = repository.parse(&json, TreeFormat::Json).unwrap();
        prop_assert_eq!(from_json.index.roots(), tree.as_slice());

        let yaml = serde_yaml_ng::to_string(&tree).unwrap();
        let from_yaml = repository.parse(&yaml, TreeFormat::Yaml).unwrap();
        prop_assert_eq!(from_yaml.index.roots(), tree.as_slice());
    }

    /// PROPERTY: the loader never panics on arbitrary input.
    #[test]
    fn property_loader_never_panics(s in ".{0,256}") {
        let repository = FsTreeRepository::new().with_reject_duplicate_ids(false);
        let _ = repository.parse(&s, TreeFormat::Json);
        let _ = repository.parse(&s, TreeFormat::Yaml);
    }
}
