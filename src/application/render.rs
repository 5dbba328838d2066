//! Tree renderer
//!
//! Turns the active sections into a data-only view. Rendering reads the
//! collapse state and the query but never changes either; callers apply the
//! filter's forced expansions before asking for a view.

use std::collections::HashSet;

use serde::Serialize;

use crate::domain::entities::{DocumentTree, Node};
use crate::domain::services::{filter_view, sorted_view, CollapseState, ViewNode};
use crate::domain::value_objects::{NodeKey, Query, SectionName};
use crate::error::{CatalogError, ErrorKind};

/// Deepest folder nesting the renderer accepts; deeper subtrees become anomalies.
pub const MAX_RENDER_DEPTH: usize = 64;

/// What the page shell mounts.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum View {
    /// No tree yet
    Loading,
    /// The last load failed; nothing else is shown
    Failed { kind: ErrorKind, message: String },
    /// The tree has no sections
    NoDocuments,
    Sections { sections: Vec<RenderedSection> },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedSection {
    pub key: String,
    pub title: String,
    pub heading: String,
    pub anchor: String,
    pub body: SectionBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "nodes", rename_all = "snake_case")]
pub enum SectionBody {
    Nodes(Vec<RenderedNode>),
    /// The section holds no entries at all
    Empty,
    /// Entries exist but none match the query
    NoMatches,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RenderedNode {
    Folder(FolderRow),
    File(FileRow),
    /// A subtree that failed a render precondition; its siblings still render
    Anomaly { location: String, message: String },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderRow {
    pub key: NodeKey,
    pub name: String,
    pub expanded: bool,
    /// Always present, even when collapsed or empty
    pub children: Vec<RenderedNode>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileRow {
    pub key: NodeKey,
    pub name: String,
    /// Target of the open action
    pub open: String,
    /// Target of the download action
    pub download: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gulpease: Option<f64>,
}

impl RenderedNode {
    pub fn key(&self) -> Option<&NodeKey> {
        match self {
            RenderedNode::Folder(folder) => Some(&folder.key),
            RenderedNode::File(file) => Some(&file.key),
            RenderedNode::Anomaly { .. } => None,
        }
    }
}

impl SectionBody {
    pub fn nodes(&self) -> &[RenderedNode] {
        match self {
            SectionBody::Nodes(nodes) => nodes,
            SectionBody::Empty | SectionBody::NoMatches => &[],
        }
    }
}

impl View {
    pub fn sections(&self) -> &[RenderedSection] {
        match self {
            View::Sections { sections } => sections,
            _ => &[],
        }
    }
}

/// Render the given sections of `tree`.
pub fn render_sections(
    tree: &DocumentTree,
    sections: &[SectionName],
    query: &Query,
    collapse: &CollapseState,
) -> Vec<RenderedSection> {
    let mut renderer = Renderer {
        collapse,
        seen: HashSet::new(),
    };
    sections
        .iter()
        .map(|section| {
            let nodes = tree.section(&section.key).unwrap_or(&[]);
            let body = renderer.section_body(&section.key, nodes, query);
            RenderedSection {
                key: section.key.clone(),
                title: section.title.clone(),
                heading: section.heading.clone(),
                anchor: section.anchor.clone(),
                body,
            }
        })
        .collect()
}

/// Render one section's nodes without a search.
pub fn render_nodes(section: &str, nodes: &[Node], collapse: &CollapseState) -> Vec<RenderedNode> {
    let mut renderer = Renderer {
        collapse,
        seen: HashSet::new(),
    };
    let view = sorted_view(section, nodes);
    renderer.render_level(&view, 0)
}

struct Renderer<'c> {
    collapse: &'c CollapseState,
    seen: HashSet<NodeKey>,
}

impl Renderer<'_> {
    fn section_body(&mut self, section: &str, nodes: &[Node], query: &Query) -> SectionBody {
        if nodes.is_empty() {
            return SectionBody::Empty;
        }
        let view = sorted_view(section, nodes);
        let filtered = filter_view(&view, query);
        if filtered.is_empty() {
            return SectionBody::NoMatches;
        }
        SectionBody::Nodes(self.render_level(&filtered.nodes, 0))
    }

    fn render_level(&mut self, nodes: &[ViewNode<'_>], depth: usize) -> Vec<RenderedNode> {
        nodes
            .iter()
            .map(|node| match self.render_node(node, depth) {
                Ok(rendered) => rendered,
                Err(e) => {
                    tracing::warn!(key = %node.key, error = %e, "subtree not rendered");
                    RenderedNode::Anomaly {
                        location: node.key.to_string(),
                        message: e.to_string(),
                    }
                }
            })
            .collect()
    }

    fn render_node(
        &mut self,
        node: &ViewNode<'_>,
        depth: usize,
    ) -> Result<RenderedNode, CatalogError> {
        if !self.seen.insert(node.key.clone()) {
            return Err(CatalogError::RenderPrecondition {
                location: node.key.to_string(),
                message: "duplicate node key".to_string(),
            });
        }

        match node.node {
            Node::File(file) => Ok(RenderedNode::File(FileRow {
                key: node.key.clone(),
                name: file.name.clone(),
                open: file.path.clone(),
                download: file.path.clone(),
                version: file.version.clone(),
                date: file.date.clone(),
                signed: file.signed,
                gulpease: file.gulpease,
            })),
            Node::Folder(folder) => {
                if depth >= MAX_RENDER_DEPTH {
                    return Err(CatalogError::RenderPrecondition {
                        location: node.key.to_string(),
                        message: format!("nested deeper than {} levels", MAX_RENDER_DEPTH),
                    });
                }
                Ok(RenderedNode::Folder(FolderRow {
                    key: node.key.clone(),
                    name: folder.name.clone(),
                    expanded: self.collapse.is_expanded(&node.key),
                    children: self.render_level(&node.children, depth + 1),
                }))
            }
        }
    }
}
