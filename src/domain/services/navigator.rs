//! Section navigator
//!
//! Tracks the active section (or the aggregate view). The section list is
//! taken from a tree in canonical key order; an empty tree gives the
//! `NoSections` state under every startup policy.

use crate::domain::entities::DocumentTree;
use crate::domain::value_objects::{InitialSection, SectionName, Selection};
use crate::error::{CatalogError, CatalogResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavState {
    NoSections,
    Section(usize),
    All,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    sections: Vec<SectionName>,
    state: NavState,
}

impl Navigator {
    pub fn new(tree: &DocumentTree, initial: InitialSection) -> Self {
        let sections: Vec<SectionName> = tree
            .keys()
            .enumerate()
            .map(|(index, key)| SectionName::new(key, index))
            .collect();
        let state = initial_state(sections.len(), initial);
        Self { sections, state }
    }

    /// Navigator for a tree that has not loaded yet
    pub fn empty() -> Self {
        Self {
            sections: Vec::new(),
            state: NavState::NoSections,
        }
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn sections(&self) -> &[SectionName] {
        &self.sections
    }

    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }

    /// The current selection; `None` when there are no sections.
    pub fn selection(&self) -> Option<Selection> {
        match self.state {
            NavState::NoSections => None,
            NavState::Section(index) => Some(Selection::Section(self.sections[index].key.clone())),
            NavState::All => Some(Selection::All),
        }
    }

    /// Sections whose content is currently shown, in canonical order
    pub fn active_sections(&self) -> &[SectionName] {
        match self.state {
            NavState::NoSections => &[],
            NavState::Section(index) => &self.sections[index..=index],
            NavState::All => &self.sections,
        }
    }

    /// Activate a selection. Returns whether the state changed.
    pub fn select(&mut self, selection: &Selection) -> CatalogResult<bool> {
        let next = match selection {
            Selection::All if self.sections.is_empty() => NavState::NoSections,
            Selection::All => NavState::All,
            Selection::Section(key) => {
                let index = self
                    .sections
                    .iter()
                    .position(|s| &s.key == key)
                    .ok_or_else(|| CatalogError::UnknownSection { key: key.clone() })?;
                NavState::Section(index)
            }
        };
        let changed = next != self.state;
        self.state = next;
        Ok(changed)
    }

    /// Cycle forward: section 0 .. n-1, then the aggregate view, then 0 again.
    pub fn next(&mut self) {
        let count = self.sections.len();
        self.state = match self.state {
            NavState::NoSections => NavState::NoSections,
            NavState::Section(index) if index + 1 < count => NavState::Section(index + 1),
            NavState::Section(_) => NavState::All,
            NavState::All => NavState::Section(0),
        };
    }

    /// Cycle backward through the same ring as `next`.
    pub fn prev(&mut self) {
        let count = self.sections.len();
        self.state = match self.state {
            NavState::NoSections => NavState::NoSections,
            NavState::Section(0) => NavState::All,
            NavState::Section(index) => NavState::Section(index - 1),
            NavState::All => NavState::Section(count - 1),
        };
    }
}

fn initial_state(count: usize, initial: InitialSection) -> NavState {
    match (count, initial) {
        (0, _) => NavState::NoSections,
        (_, InitialSection::First) => NavState::Section(0),
        (_, InitialSection::All) => NavState::All,
    }
}
