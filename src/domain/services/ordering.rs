//! Canonical ordering and sorted views
//!
//! Catalog data is never reordered in place. Every render builds a sorted
//! view over borrowed nodes and assigns each node its structural key.

use std::cmp::Ordering;

use crate::domain::entities::Node;
use crate::domain::value_objects::NodeKey;

/// A node placed in canonical order, with its structural key.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewNode<'a> {
    pub key: NodeKey,
    pub node: &'a Node,
    pub children: Vec<ViewNode<'a>>,
}

impl<'a> ViewNode<'a> {
    pub fn name(&self) -> &'a str {
        self.node.name()
    }

    pub fn is_folder(&self) -> bool {
        self.node.is_folder()
    }

    /// Keys of this node and every descendant, depth-first
    pub fn keys(&self) -> Vec<NodeKey> {
        let mut keys = vec![self.key.clone()];
        for child in &self.children {
            keys.extend(child.keys());
        }
        keys
    }
}

/// Folders first; then case-insensitive name, then case-sensitive name.
///
/// Nodes that compare equal keep their source order (the sort is stable).
pub fn compare_nodes(a: &Node, b: &Node) -> Ordering {
    match (a.is_folder(), b.is_folder()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => compare_names(a.name(), b.name()),
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Sorted copy of `nodes` (references only; the caller's slice is untouched).
pub fn sorted(nodes: &[Node]) -> Vec<&Node> {
    let mut refs: Vec<&Node> = nodes.iter().collect();
    refs.sort_by(|a, b| compare_nodes(a, b));
    refs
}

/// Build the sorted view of a section's top-level nodes.
pub fn sorted_view<'a>(section: &str, nodes: &'a [Node]) -> Vec<ViewNode<'a>> {
    sorted(nodes)
        .into_iter()
        .enumerate()
        .map(|(ordinal, node)| build_view(NodeKey::root(section, ordinal), node))
        .collect()
}

fn build_view(key: NodeKey, node: &Node) -> ViewNode<'_> {
    let children = sorted(node.children())
        .into_iter()
        .enumerate()
        .map(|(ordinal, child)| build_view(key.child(ordinal), child))
        .collect();
    ViewNode {
        key,
        node,
        children,
    }
}

/// Keys of every folder in a view, depth-first
pub fn folder_keys(view: &[ViewNode<'_>]) -> Vec<NodeKey> {
    let mut keys = Vec::new();
    collect_folder_keys(view, &mut keys);
    keys
}

fn collect_folder_keys(view: &[ViewNode<'_>], keys: &mut Vec<NodeKey>) {
    for node in view {
        if node.is_folder() {
            keys.push(node.key.clone());
            collect_folder_keys(&node.children, keys);
        }
    }
}
