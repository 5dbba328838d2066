//! DocumentTree entity - section name to top-level nodes
//!
//! Keys are unique by construction. Iteration follows canonical (byte-wise
//! ascending) key order, so source insertion order never leaks into display.

use std::collections::BTreeMap;

use serde::Serialize;

use super::node::Node;

/// The full catalog: section key -> ordered top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DocumentTree {
    sections: BTreeMap<String, Vec<Node>>,
}

impl DocumentTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a section.
    pub fn insert(&mut self, key: impl Into<String>, nodes: Vec<Node>) {
        self.sections.insert(key.into(), nodes);
    }

    pub fn with_section(mut self, key: impl Into<String>, nodes: Vec<Node>) -> Self {
        self.insert(key, nodes);
        self
    }

    pub fn section(&self, key: &str) -> Option<&[Node]> {
        self.sections.get(key).map(Vec::as_slice)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.sections.contains_key(key)
    }

    /// Section keys in canonical order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.sections.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Node])> {
        self.sections
            .iter()
            .map(|(key, nodes)| (key.as_str(), nodes.as_slice()))
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of files across all sections
    pub fn file_count(&self) -> usize {
        self.sections
            .values()
            .flat_map(|nodes| nodes.iter())
            .map(Node::file_count)
            .sum()
    }
}

impl FromIterator<(String, Vec<Node>)> for DocumentTree {
    fn from_iter<I: IntoIterator<Item = (String, Vec<Node>)>>(iter: I) -> Self {
        Self {
            sections: iter.into_iter().collect(),
        }
    }
}
