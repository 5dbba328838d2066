//! Catalog orchestrator
//!
//! One owned state object holding the loaded tree, the active section, the
//! search query and the collapse flags. The page shell (CLI or terminal
//! browser) feeds user events in through the `on_*` hooks and asks for a
//! fresh [`View`] after each one.
//!
//! Policies:
//! - the query persists across section switches and is re-applied;
//! - manual collapse state survives section switches;
//! - search expansions are an overlay, so clearing the query restores the
//!   manual state exactly;
//! - a successful load replaces the tree and resets collapse state, since
//!   structural keys of the old tree mean nothing in the new one.

use crate::domain::entities::DocumentTree;
use crate::domain::services::{filter_view, folder_keys, sorted_view, CollapseState, Navigator};
use crate::domain::value_objects::{InitialSection, NodeKey, Query, Selection};
use crate::error::{CatalogError, CatalogResult, ErrorKind};

use super::loads::{LoadTicket, LoadTracker};
use super::render::{render_sections, View};

/// What happened to a finished load
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    Applied,
    Failed,
    /// A newer load was started; the result was dropped
    Stale,
}

/// A load failure as shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadFailure {
    pub kind: ErrorKind,
    pub message: String,
}

impl From<&CatalogError> for LoadFailure {
    fn from(err: &CatalogError) -> Self {
        Self {
            kind: err.kind(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug)]
pub struct Catalog {
    tree: Option<DocumentTree>,
    failure: Option<LoadFailure>,
    navigator: Navigator,
    collapse: CollapseState,
    query: Query,
    loads: LoadTracker,
    initial: InitialSection,
}

impl Catalog {
    /// A catalog waiting for its first load
    pub fn new(initial: InitialSection) -> Self {
        Self {
            tree: None,
            failure: None,
            navigator: Navigator::empty(),
            collapse: CollapseState::new(),
            query: Query::default(),
            loads: LoadTracker::new(),
            initial,
        }
    }

    /// A catalog over an already loaded tree
    pub fn with_tree(tree: DocumentTree, initial: InitialSection) -> Self {
        let mut catalog = Self::new(initial);
        catalog.apply_tree(tree);
        catalog
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        let ticket = self.loads.begin();
        tracing::info!(ticket = ticket.id(), "catalog load started");
        ticket
    }

    /// Apply a load result unless a newer load has started since.
    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: CatalogResult<DocumentTree>,
    ) -> LoadOutcome {
        let Some(result) = self.loads.complete(ticket, result) else {
            return LoadOutcome::Stale;
        };

        match result {
            Ok(tree) => {
                tracing::info!(
                    ticket = ticket.id(),
                    sections = tree.len(),
                    files = tree.file_count(),
                    "catalog load finished"
                );
                self.apply_tree(tree);
                LoadOutcome::Applied
            }
            Err(err) => {
                tracing::warn!(ticket = ticket.id(), error = %err, "catalog load failed");
                // No tree means no navigation either.
                self.tree = None;
                self.navigator = Navigator::empty();
                self.collapse.reset_all(false);
                self.failure = Some(LoadFailure::from(&err));
                LoadOutcome::Failed
            }
        }
    }

    fn apply_tree(&mut self, tree: DocumentTree) {
        let previous = self.navigator.selection();
        let mut navigator = Navigator::new(&tree, self.initial);
        if let Some(selection) = previous {
            // Keep the user's place across reloads when the section still exists.
            let _ = navigator.select(&selection);
        }
        self.navigator = navigator;
        self.tree = Some(tree);
        self.failure = None;
        self.collapse.reset_all(false);
        self.refresh_search();
    }

    pub fn tree(&self) -> Option<&DocumentTree> {
        self.tree.as_ref()
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn collapse(&self) -> &CollapseState {
        &self.collapse
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn failure(&self) -> Option<&LoadFailure> {
        self.failure.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loads.in_flight()
    }

    /// Flip a folder. Returns the new expanded state.
    pub fn on_folder_toggle(&mut self, key: &NodeKey) -> bool {
        let expanded = self.collapse.toggle(key);
        tracing::debug!(key = %key, expanded, "folder toggled");
        expanded
    }

    pub fn set_folder_expanded(&mut self, key: &NodeKey, expanded: bool) {
        self.collapse.set_expanded(key, expanded);
    }

    pub fn on_section_select(&mut self, selection: &Selection) -> CatalogResult<()> {
        if self.navigator.select(selection)? {
            tracing::debug!(selection = %selection, "section selected");
            self.refresh_search();
        }
        Ok(())
    }

    pub fn next_section(&mut self) {
        self.navigator.next();
        self.refresh_search();
    }

    pub fn prev_section(&mut self) {
        self.navigator.prev();
        self.refresh_search();
    }

    /// Recompute the filter for a new query (every keystroke).
    pub fn on_search_input(&mut self, raw: &str) {
        self.query = Query::new(raw);
        self.refresh_search();
    }

    /// Expand every folder visible under the current filter.
    pub fn expand_all(&mut self) {
        let keys = self.visible_folder_keys();
        self.collapse.set_all(&keys, true);
    }

    /// Collapse every folder visible under the current filter.
    pub fn collapse_all(&mut self) {
        let keys = self.visible_folder_keys();
        self.collapse.set_all(&keys, false);
    }

    /// Drop the forced overlay and force open the ancestors of every match
    /// in the active sections.
    fn refresh_search(&mut self) {
        self.collapse.clear_forced();
        let Some(tree) = &self.tree else {
            return;
        };
        if self.query.is_empty() {
            return;
        }

        let mut matched = 0;
        for section in self.navigator.active_sections() {
            let nodes = tree.section(&section.key).unwrap_or(&[]);
            let view = sorted_view(&section.key, nodes);
            let outcome = filter_view(&view, &self.query);
            matched += outcome.matched_files;
            self.collapse.expand_ancestors(&outcome.expand);
        }
        tracing::debug!(query = %self.query, matched, "search recomputed");
    }

    fn visible_folder_keys(&self) -> Vec<NodeKey> {
        let Some(tree) = &self.tree else {
            return Vec::new();
        };
        self.navigator
            .active_sections()
            .iter()
            .flat_map(|section| {
                let nodes = tree.section(&section.key).unwrap_or(&[]);
                let view = sorted_view(&section.key, nodes);
                folder_keys(&filter_view(&view, &self.query).nodes)
            })
            .collect()
    }

    /// The render entry point.
    pub fn view(&self) -> View {
        if let Some(failure) = &self.failure {
            return View::Failed {
                kind: failure.kind,
                message: failure.message.clone(),
            };
        }
        let Some(tree) = &self.tree else {
            return View::Loading;
        };
        if !self.navigator.has_sections() {
            return View::NoDocuments;
        }
        View::Sections {
            sections: render_sections(
                tree,
                self.navigator.active_sections(),
                &self.query,
                &self.collapse,
            ),
        }
    }
}
