use doccat::{Catalog, InitialSection};
use proptest::prelude::*;

use crate::strategies::{query, tree};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        ..ProptestConfig::default()
    })]

    #[test]
    fn rendering_is_deterministic(tree in tree(), q in query()) {
        let mut catalog = Catalog::with_tree(tree, InitialSection::All);
        catalog.on_search_input(&q);
        let first = serde_json::to_string(&catalog.view()).unwrap();
        let second = serde_json::to_string(&catalog.view()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn clearing_the_query_restores_the_unfiltered_view(tree in tree(), q in query()) {
        let mut catalog = Catalog::with_tree(tree, InitialSection::All);
        let before = catalog.view();
        catalog.on_search_input(&q);
        catalog.on_search_input("");
        prop_assert_eq!(catalog.view(), before);
    }
}
