use std::cmp::Ordering;

use doccat::domain::services::{compare_nodes, sorted, sorted_view};
use doccat::Node;
use proptest::prelude::*;

use crate::strategies::nodes;

#[test]
fn folder_precedes_file_regardless_of_name() {
    let nodes = vec![Node::folder("B", vec![]), Node::file("A", "a.pdf")];
    let names: Vec<_> = sorted(&nodes).iter().map(|n| n.name()).collect();
    assert_eq!(names, vec!["B", "A"]);
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        ..ProptestConfig::default()
    })]

    #[test]
    fn siblings_are_in_canonical_order(nodes in nodes()) {
        let ordered = sorted(&nodes);
        for pair in ordered.windows(2) {
            prop_assert_ne!(compare_nodes(pair[0], pair[1]), Ordering::Greater);
        }
        if let Some(first_file) = ordered.iter().position(|n| !n.is_folder()) {
            prop_assert!(ordered[first_file..].iter().all(|n| !n.is_folder()));
        }
    }

    #[test]
    fn sorting_borrows_without_reordering_source(nodes in nodes()) {
        let before = nodes.clone();
        let _ = sorted_view("S", &nodes);
        prop_assert_eq!(nodes, before);
    }

    #[test]
    fn view_keys_are_unique(nodes in nodes()) {
        let view = sorted_view("S", &nodes);
        let mut keys: Vec<_> = view.iter().flat_map(|n| n.keys()).collect();
        let total = keys.len();
        keys.sort();
        keys.dedup();
        prop_assert_eq!(keys.len(), total);
    }
}
