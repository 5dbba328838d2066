//! Collapse state tracker
//!
//! Per-folder expanded flags keyed by `NodeKey`. Manual state (user toggles)
//! and forced state (search matches) are kept apart: clearing a search drops
//! the forced overlay and the manual state shows through unchanged.

use std::collections::{HashMap, HashSet};

use crate::domain::value_objects::NodeKey;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollapseState {
    manual: HashMap<NodeKey, bool>,
    forced: HashSet<NodeKey>,
    default_expanded: bool,
}

impl CollapseState {
    /// Every folder starts collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expanded state of a folder; unseen folders use the default (collapsed).
    pub fn is_expanded(&self, key: &NodeKey) -> bool {
        self.forced.contains(key) || self.manual.get(key).copied().unwrap_or(self.default_expanded)
    }

    /// Flip what is currently displayed. Returns the new state.
    pub fn toggle(&mut self, key: &NodeKey) -> bool {
        let expanded = !self.is_expanded(key);
        self.set_expanded(key, expanded);
        expanded
    }

    /// Record a manual choice; it overrides a forced expansion of this folder.
    pub fn set_expanded(&mut self, key: &NodeKey, expanded: bool) {
        self.forced.remove(key);
        self.manual.insert(key.clone(), expanded);
    }

    /// Force every folder on `path` open (search matches).
    pub fn expand_ancestors<'k>(&mut self, path: impl IntoIterator<Item = &'k NodeKey>) {
        self.forced.extend(path.into_iter().cloned());
    }

    /// Drop forced expansions; manual state is untouched.
    pub fn clear_forced(&mut self) {
        self.forced.clear();
    }

    pub fn has_forced(&self) -> bool {
        !self.forced.is_empty()
    }

    /// Bulk expand (or collapse) the given folders as a manual choice.
    pub fn set_all<'k>(&mut self, keys: impl IntoIterator<Item = &'k NodeKey>, expanded: bool) {
        for key in keys {
            self.set_expanded(key, expanded);
        }
    }

    /// Forget every manual and forced flag and use a new default.
    pub fn reset_all(&mut self, default_expanded: bool) {
        self.manual.clear();
        self.forced.clear();
        self.default_expanded = default_expanded;
    }

    pub fn default_expanded(&self) -> bool {
        self.default_expanded
    }
}
