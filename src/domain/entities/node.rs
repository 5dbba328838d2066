//! Node entity - one entry of the document catalog
//!
//! A node is either a file (leaf with a path) or a folder (ordered children).
//! Nodes are immutable once loaded; ordering and visibility are computed
//! on views built over them, never by mutating the nodes themselves.

use serde::Serialize;

/// A downloadable document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileNode {
    pub name: String,
    pub path: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub signed: Option<bool>,
    /// Gulpease readability index (0..=100)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gulpease: Option<f64>,
}

impl FileNode {
    pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            version: None,
            date: None,
            signed: None,
            gulpease: None,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    pub fn with_signed(mut self, signed: bool) -> Self {
        self.signed = Some(signed);
        self
    }

    pub fn with_gulpease(mut self, score: f64) -> Self {
        self.gulpease = Some(score);
        self
    }
}

/// A folder grouping other nodes. `children` may be empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FolderNode {
    pub name: String,
    pub children: Vec<Node>,
}

impl FolderNode {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn with_children(name: impl Into<String>, children: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            children,
        }
    }
}

/// Catalog node: exactly one of file or folder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Folder(FolderNode),
    File(FileNode),
}

impl Node {
    pub fn file(name: impl Into<String>, path: impl Into<String>) -> Self {
        Node::File(FileNode::new(name, path))
    }

    pub fn folder(name: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Folder(FolderNode::with_children(name, children))
    }

    pub fn name(&self) -> &str {
        match self {
            Node::Folder(folder) => &folder.name,
            Node::File(file) => &file.name,
        }
    }

    pub fn is_folder(&self) -> bool {
        matches!(self, Node::Folder(_))
    }

    /// Children of a folder; files have none.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Folder(folder) => &folder.children,
            Node::File(_) => &[],
        }
    }

    /// Number of files in this subtree
    pub fn file_count(&self) -> usize {
        match self {
            Node::File(_) => 1,
            Node::Folder(folder) => folder.children.iter().map(Node::file_count).sum(),
        }
    }
}

impl From<FileNode> for Node {
    fn from(file: FileNode) -> Self {
        Node::File(file)
    }
}

impl From<FolderNode> for Node {
    fn from(folder: FolderNode) -> Self {
        Node::Folder(folder)
    }
}
