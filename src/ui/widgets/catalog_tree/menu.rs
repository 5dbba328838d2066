//! Browser state management and action handling.
//!
//! The browser never owns tree data directly: after every action it asks the
//! catalog for a fresh view and flattens it into lines. The cursor follows
//! the node it was on, by key, across rebuilds.

use doccat::application::{FileRow, LoadTicket, RenderedNode, SectionBody, View};
use doccat::{Catalog, CatalogResult, DocumentTree, LoadOutcome, NodeKey, Selection};

use crate::ui::theme::labels;

/// One row of the flattened view
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogLine {
    /// Indentation level (0 = section header)
    pub depth: usize,
    pub kind: LineKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LineKind {
    SectionHeader { key: String, title: String },
    Folder { key: NodeKey, name: String, expanded: bool },
    File(FileRow),
    /// Informational text (empty section, no matches, loading)
    Notice(String),
    /// The catalog failed to load
    Failure(String),
    Anomaly { location: String, message: String },
}

/// Stable identity of a selectable line
#[derive(Debug, Clone, PartialEq, Eq)]
enum LineId {
    Section(String),
    Node(NodeKey),
}

impl CatalogLine {
    fn new(depth: usize, kind: LineKind) -> Self {
        Self { depth, kind }
    }

    fn id(&self) -> Option<LineId> {
        match &self.kind {
            LineKind::SectionHeader { key, .. } => Some(LineId::Section(key.clone())),
            LineKind::Folder { key, .. } => Some(LineId::Node(key.clone())),
            LineKind::File(file) => Some(LineId::Node(file.key.clone())),
            _ => None,
        }
    }

    pub fn is_selectable(&self) -> bool {
        self.id().is_some()
    }
}

/// Flatten a view into display lines. Children of collapsed folders are skipped.
pub fn flatten_view(view: &View) -> Vec<CatalogLine> {
    match view {
        View::Loading => vec![CatalogLine::new(0, LineKind::Notice(labels::LOADING.into()))],
        View::Failed { message, .. } => {
            vec![CatalogLine::new(0, LineKind::Failure(message.clone()))]
        }
        View::NoDocuments => {
            vec![CatalogLine::new(0, LineKind::Notice(labels::NO_SECTIONS.into()))]
        }
        View::Sections { sections } => {
            let mut lines = Vec::new();
            for section in sections {
                lines.push(CatalogLine::new(
                    0,
                    LineKind::SectionHeader {
                        key: section.key.clone(),
                        title: section.title.clone(),
                    },
                ));
                match &section.body {
                    SectionBody::Nodes(nodes) => flatten_nodes(nodes, 1, &mut lines),
                    SectionBody::Empty => lines.push(CatalogLine::new(
                        1,
                        LineKind::Notice(labels::NO_DOCUMENTS.into()),
                    )),
                    SectionBody::NoMatches => lines.push(CatalogLine::new(
                        1,
                        LineKind::Notice(labels::NO_MATCHES.into()),
                    )),
                }
            }
            lines
        }
    }
}

fn flatten_nodes(nodes: &[RenderedNode], depth: usize, lines: &mut Vec<CatalogLine>) {
    for node in nodes {
        match node {
            RenderedNode::Folder(folder) => {
                lines.push(CatalogLine::new(
                    depth,
                    LineKind::Folder {
                        key: folder.key.clone(),
                        name: folder.name.clone(),
                        expanded: folder.expanded,
                    },
                ));
                if !folder.expanded {
                    continue;
                }
                if folder.children.is_empty() {
                    lines.push(CatalogLine::new(
                        depth + 1,
                        LineKind::Notice(labels::EMPTY_FOLDER.into()),
                    ));
                } else {
                    flatten_nodes(&folder.children, depth + 1, lines);
                }
            }
            RenderedNode::File(file) => {
                lines.push(CatalogLine::new(depth, LineKind::File(file.clone())));
            }
            RenderedNode::Anomaly { location, message } => lines.push(CatalogLine::new(
                depth,
                LineKind::Anomaly {
                    location: location.clone(),
                    message: message.clone(),
                },
            )),
        }
    }
}

/// Browser action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeAction {
    Up,
    Down,
    /// Toggle a folder, open a file, or switch between a section and "all"
    Toggle,
    Expand,
    Collapse,
    NextSection,
    PrevSection,
    ShowAll,
    StartSearch,
    SearchInput(char),
    SearchBackspace,
    /// Leave search mode and clear the query
    SearchCancel,
    /// Leave search mode keeping the query
    SearchSubmit,
    Open,
    Download,
    ExpandAll,
    CollapseAll,
    Reload,
    Quit,
}

/// Work the interactive loop must do after an action
#[derive(Debug, Clone, PartialEq)]
pub enum BrowserEffect {
    None,
    Open(FileRow),
    Download(FileRow),
    Reload,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub text: String,
    pub is_error: bool,
}

/// Interactive catalog browser state
pub struct CatalogBrowser {
    catalog: Catalog,
    lines: Vec<CatalogLine>,
    cursor: usize,
    scroll: usize,
    searching: bool,
    search_buffer: String,
    status: Option<StatusMessage>,
}

impl CatalogBrowser {
    pub fn new(catalog: Catalog) -> Self {
        let search_buffer = catalog.query().as_str().to_string();
        let mut browser = Self {
            catalog,
            lines: Vec::new(),
            cursor: 0,
            scroll: 0,
            searching: false,
            search_buffer,
            status: None,
        };
        browser.rebuild();
        browser.cursor = browser.first_selectable().unwrap_or(0);
        browser
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn lines(&self) -> &[CatalogLine] {
        &self.lines
    }

    pub fn cursor_position(&self) -> usize {
        self.cursor
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn search_buffer(&self) -> &str {
        &self.search_buffer
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn set_status(&mut self, text: impl Into<String>, is_error: bool) {
        self.status = Some(StatusMessage {
            text: text.into(),
            is_error,
        });
    }

    pub fn current_line(&self) -> Option<&CatalogLine> {
        self.lines.get(self.cursor)
    }

    pub fn begin_load(&mut self) -> LoadTicket {
        let ticket = self.catalog.begin_load();
        self.rebuild();
        ticket
    }

    pub fn finish_load(
        &mut self,
        ticket: LoadTicket,
        result: CatalogResult<DocumentTree>,
    ) -> LoadOutcome {
        let outcome = self.catalog.finish_load(ticket, result);
        match outcome {
            LoadOutcome::Applied => {
                let files = self.catalog.tree().map(DocumentTree::file_count).unwrap_or(0);
                self.set_status(format!("Loaded {} documents", files), false);
            }
            LoadOutcome::Failed => self.set_status("Catalog load failed", true),
            LoadOutcome::Stale => {}
        }
        self.rebuild();
        outcome
    }

    /// Rows of the window that keeps the cursor visible
    pub fn visible_range(&mut self, rows: usize) -> std::ops::Range<usize> {
        let rows = rows.max(1);
        if self.cursor < self.scroll {
            self.scroll = self.cursor;
        } else if self.cursor >= self.scroll + rows {
            self.scroll = self.cursor + 1 - rows;
        }
        let end = (self.scroll + rows).min(self.lines.len());
        self.scroll = self.scroll.min(end);
        self.scroll..end
    }

    /// Re-flatten the catalog view, keeping the cursor on the same node.
    pub fn rebuild(&mut self) {
        let anchor = self.lines.get(self.cursor).and_then(CatalogLine::id);
        self.lines = flatten_view(&self.catalog.view());

        let found = anchor.and_then(|id| self.position_of(&id));
        self.cursor = match found {
            Some(position) => position,
            None => self.nearest_selectable(self.cursor.min(self.lines.len().saturating_sub(1))),
        };
    }

    fn position_of(&self, id: &LineId) -> Option<usize> {
        self.lines.iter().position(|line| line.id().as_ref() == Some(id))
    }

    fn first_selectable(&self) -> Option<usize> {
        self.lines.iter().position(CatalogLine::is_selectable)
    }

    fn nearest_selectable(&self, from: usize) -> usize {
        let before = (0..=from).rev().find(|&i| self.is_selectable_at(i));
        let after = (from..self.lines.len()).find(|&i| self.is_selectable_at(i));
        before.or(after).unwrap_or(0)
    }

    fn is_selectable_at(&self, index: usize) -> bool {
        self.lines.get(index).is_some_and(CatalogLine::is_selectable)
    }

    fn move_up(&mut self) {
        if let Some(prev) = (0..self.cursor).rev().find(|&i| self.is_selectable_at(i)) {
            self.cursor = prev;
        }
    }

    fn move_down(&mut self) {
        if let Some(next) = (self.cursor + 1..self.lines.len()).find(|&i| self.is_selectable_at(i)) {
            self.cursor = next;
        }
    }

    fn move_to_parent(&mut self, key: &NodeKey) {
        let parent = match key.path() {
            [_] => LineId::Section(key.section().to_string()),
            path => LineId::Node(NodeKey::new(key.section(), path[..path.len() - 1].to_vec())),
        };
        if let Some(position) = self.position_of(&parent) {
            self.cursor = position;
        }
    }

    fn update_query(&mut self) {
        self.catalog.on_search_input(&self.search_buffer);
        self.rebuild();
    }

    fn select(&mut self, selection: &Selection) {
        if let Err(e) = self.catalog.on_section_select(selection) {
            self.set_status(e.to_string(), true);
        }
        self.rebuild();
    }

    /// Apply an action and report follow-up work for the caller.
    pub fn handle_action(&mut self, action: TreeAction) -> BrowserEffect {
        let current = self.current_line().map(|line| line.kind.clone());
        match action {
            TreeAction::Up => self.move_up(),
            TreeAction::Down => self.move_down(),
            TreeAction::Toggle => match current {
                Some(LineKind::Folder { key, .. }) => {
                    self.catalog.on_folder_toggle(&key);
                    self.rebuild();
                }
                Some(LineKind::File(file)) => return BrowserEffect::Open(file),
                Some(LineKind::SectionHeader { key, .. }) => {
                    let target = match self.catalog.navigator().selection() {
                        Some(Selection::All) => Selection::Section(key),
                        _ => Selection::All,
                    };
                    self.select(&target);
                }
                _ => {}
            },
            TreeAction::Expand => {
                if let Some(LineKind::Folder { key, expanded, .. }) = current {
                    if expanded {
                        self.move_down();
                    } else {
                        self.catalog.set_folder_expanded(&key, true);
                        self.rebuild();
                    }
                }
            }
            TreeAction::Collapse => match current {
                Some(LineKind::Folder {
                    key,
                    expanded: true,
                    ..
                }) => {
                    self.catalog.set_folder_expanded(&key, false);
                    self.rebuild();
                }
                Some(LineKind::Folder { key, .. }) => self.move_to_parent(&key),
                Some(LineKind::File(file)) => self.move_to_parent(&file.key),
                _ => {}
            },
            TreeAction::NextSection => {
                self.catalog.next_section();
                self.rebuild();
            }
            TreeAction::PrevSection => {
                self.catalog.prev_section();
                self.rebuild();
            }
            TreeAction::ShowAll => self.select(&Selection::All),
            TreeAction::StartSearch => {
                self.searching = true;
                self.search_buffer = self.catalog.query().as_str().to_string();
            }
            TreeAction::SearchInput(ch) => {
                self.search_buffer.push(ch);
                self.update_query();
            }
            TreeAction::SearchBackspace => {
                self.search_buffer.pop();
                self.update_query();
            }
            TreeAction::SearchCancel => {
                self.searching = false;
                self.search_buffer.clear();
                self.update_query();
            }
            TreeAction::SearchSubmit => self.searching = false,
            TreeAction::Open => {
                if let Some(LineKind::File(file)) = current {
                    return BrowserEffect::Open(file);
                }
            }
            TreeAction::Download => {
                if let Some(LineKind::File(file)) = current {
                    return BrowserEffect::Download(file);
                }
            }
            TreeAction::ExpandAll => {
                self.catalog.expand_all();
                self.rebuild();
            }
            TreeAction::CollapseAll => {
                self.catalog.collapse_all();
                self.rebuild();
            }
            TreeAction::Reload => return BrowserEffect::Reload,
            TreeAction::Quit => return BrowserEffect::Quit,
        }
        BrowserEffect::None
    }
}
