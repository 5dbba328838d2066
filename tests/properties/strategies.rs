//! Generators for catalog nodes and queries.

#![allow(dead_code)]

use doccat::{DocumentTree, FileNode, Node};
use proptest::prelude::*;

/// Short names over a small alphabet so queries hit often.
pub fn name() -> impl Strategy<Value = String> {
    "[a-cA-C0-2 _]{0,6}"
}

pub fn query() -> impl Strategy<Value = String> {
    "[a-cA-C0-2]{0,3}"
}

pub fn file() -> impl Strategy<Value = Node> {
    (name(), any::<bool>()).prop_map(|(name, signed)| {
        let path = format!("./docs/{}.pdf", name);
        let mut file = FileNode::new(name, path);
        if signed {
            file = file.with_signed(true);
        }
        Node::File(file)
    })
}

pub fn node() -> impl Strategy<Value = Node> {
    file().prop_recursive(4, 32, 5, |inner| {
        (name(), prop::collection::vec(inner, 0..5))
            .prop_map(|(name, children)| Node::folder(name, children))
    })
}

pub fn nodes() -> impl Strategy<Value = Vec<Node>> {
    prop::collection::vec(node(), 0..6)
}

pub fn tree() -> impl Strategy<Value = DocumentTree> {
    prop::collection::btree_map("[0-9]{2}_[A-Z][a-z]{0,5}", nodes(), 0..4).prop_map(|sections| {
        sections
            .into_iter()
            .fold(DocumentTree::new(), |tree, (key, nodes)| tree.with_section(key, nodes))
    })
}
