//! Search/filter engine
//!
//! A file survives when its case-folded name contains the case-folded query.
//! A folder survives when at least one descendant survives; its own name is
//! not matched. The source view is never modified, so the same view can be
//! filtered again on every keystroke.

use std::collections::BTreeSet;

use crate::domain::value_objects::{NodeKey, Query};

use super::ordering::ViewNode;

/// Result of filtering a sorted view.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterOutcome<'a> {
    /// Surviving nodes, in the order of the input view
    pub nodes: Vec<ViewNode<'a>>,
    /// Folders that survive because of a descendant match, outermost first.
    /// Empty when the query is empty.
    pub expand: Vec<NodeKey>,
    /// Number of surviving files
    pub matched_files: usize,
}

impl FilterOutcome<'_> {
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Keys of every surviving node
    pub fn visible_keys(&self) -> BTreeSet<NodeKey> {
        visible_keys(&self.nodes)
    }
}

/// Filter a sorted view. The empty query keeps every node and forces nothing open.
pub fn filter_view<'a>(view: &[ViewNode<'a>], query: &Query) -> FilterOutcome<'a> {
    if query.is_empty() {
        let matched_files = view.iter().map(|n| n.node.file_count()).sum();
        return FilterOutcome {
            nodes: view.to_vec(),
            expand: Vec::new(),
            matched_files,
        };
    }

    let mut expand = Vec::new();
    let mut matched_files = 0;
    let nodes = filter_level(view, query, &mut expand, &mut matched_files);
    FilterOutcome {
        nodes,
        expand,
        matched_files,
    }
}

fn filter_level<'a>(
    nodes: &[ViewNode<'a>],
    query: &Query,
    expand: &mut Vec<NodeKey>,
    matched_files: &mut usize,
) -> Vec<ViewNode<'a>> {
    let mut kept = Vec::new();
    for node in nodes {
        if node.is_folder() {
            // Reserve the folder's slot so `expand` stays outermost-first.
            let slot = expand.len();
            let children = filter_level(&node.children, query, expand, matched_files);
            if children.is_empty() {
                continue;
            }
            expand.insert(slot, node.key.clone());
            kept.push(ViewNode {
                key: node.key.clone(),
                node: node.node,
                children,
            });
        } else if query.matches(node.name()) {
            *matched_files += 1;
            kept.push(node.clone());
        }
    }
    kept
}

/// Keys of every node in a (possibly filtered) view
pub fn visible_keys(view: &[ViewNode<'_>]) -> BTreeSet<NodeKey> {
    view.iter().flat_map(ViewNode::keys).collect()
}
