//! Node Key Value Object
//!
//! Structural identity of a node: its section plus the ordinal of every
//! ancestor (and itself) among siblings in canonical order. Two folders with
//! the same name in different places get different keys; re-sorting the same
//! data yields the same keys.

use std::fmt;

use serde::{Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    section: String,
    path: Vec<usize>,
}

impl NodeKey {
    /// Key of a top-level node of `section`
    pub fn root(section: impl Into<String>, ordinal: usize) -> Self {
        Self {
            section: section.into(),
            path: vec![ordinal],
        }
    }

    pub fn new(section: impl Into<String>, path: Vec<usize>) -> Self {
        Self {
            section: section.into(),
            path,
        }
    }

    /// Key of this node's `ordinal`-th child
    pub fn child(&self, ordinal: usize) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(ordinal);
        Self {
            section: self.section.clone(),
            path,
        }
    }

    pub fn section(&self) -> &str {
        &self.section
    }

    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Nesting level; top-level nodes have depth 0
    pub fn depth(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Keys of every ancestor, outermost first (excluding self)
    pub fn ancestors(&self) -> Vec<NodeKey> {
        (1..self.path.len())
            .map(|len| Self {
                section: self.section.clone(),
                path: self.path[..len].to_vec(),
            })
            .collect()
    }

    pub fn is_ancestor_of(&self, other: &NodeKey) -> bool {
        self.section == other.section
            && self.path.len() < other.path.len()
            && other.path.starts_with(&self.path)
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.section)?;
        for ordinal in &self.path {
            write!(f, "/{}", ordinal)?;
        }
        Ok(())
    }
}

impl Serialize for NodeKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
