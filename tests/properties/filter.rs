use doccat::domain::services::{filter_view, folder_keys, sorted_view, ViewNode};
use doccat::{Node, Query};
use proptest::prelude::*;

use crate::strategies::{nodes, query};

fn file_survives(name: &str, query: &str) -> bool {
    name.to_lowercase().contains(&query.to_lowercase())
}

fn has_matching_file(node: &Node, query: &str) -> bool {
    match node {
        Node::File(file) => file_survives(&file.name, query),
        Node::Folder(folder) => folder.children.iter().any(|c| has_matching_file(c, query)),
    }
}

/// Every node of the unfiltered view is kept exactly when it should be.
/// An empty query keeps everything, empty folders included.
fn check_membership(source: &[ViewNode<'_>], kept: &[ViewNode<'_>], query: &str) {
    for node in source {
        let survivor = kept.iter().find(|k| k.key == node.key);
        let expected = query.is_empty() || has_matching_file(node.node, query);
        assert_eq!(
            survivor.is_some(),
            expected,
            "{} ({}) with query {:?}",
            node.key,
            node.name(),
            query
        );
        if let Some(survivor) = survivor {
            check_membership(&node.children, &survivor.children, query);
        }
    }
}

fn keys(view: &[ViewNode<'_>]) -> Vec<String> {
    view.iter()
        .flat_map(ViewNode::keys)
        .map(|k| k.to_string())
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 96,
        ..ProptestConfig::default()
    })]

    #[test]
    fn filter_keeps_exactly_matching_files_and_their_folders(nodes in nodes(), q in query()) {
        let view = sorted_view("S", &nodes);
        let outcome = filter_view(&view, &Query::new(q.as_str()));
        check_membership(&view, &outcome.nodes, &q);
    }

    #[test]
    fn empty_query_keeps_everything(nodes in nodes()) {
        let view = sorted_view("S", &nodes);
        let outcome = filter_view(&view, &Query::default());
        prop_assert_eq!(&outcome.nodes, &view);
        prop_assert!(outcome.expand.is_empty());
    }

    #[test]
    fn filtering_is_idempotent(nodes in nodes(), q in query()) {
        let query = Query::new(q.as_str());
        let view = sorted_view("S", &nodes);
        let once = filter_view(&view, &query);
        let twice = filter_view(&once.nodes, &query);
        prop_assert_eq!(&twice.nodes, &once.nodes);
        prop_assert_eq!(twice.matched_files, once.matched_files);
    }

    #[test]
    fn forced_folders_are_exactly_the_surviving_folders(nodes in nodes(), q in "[a-c]{1,2}") {
        let view = sorted_view("S", &nodes);
        let outcome = filter_view(&view, &Query::new(q.as_str()));
        prop_assert_eq!(folder_keys(&outcome.nodes), outcome.expand);
    }

    #[test]
    fn filter_never_invents_keys(nodes in nodes(), q in query()) {
        let view = sorted_view("S", &nodes);
        let all = keys(&view);
        let outcome = filter_view(&view, &Query::new(q.as_str()));
        for key in keys(&outcome.nodes) {
            prop_assert!(all.contains(&key));
        }
    }
}
