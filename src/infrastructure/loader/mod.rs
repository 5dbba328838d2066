//! Catalog loading
//!
//! A catalog arrives as JSON text from a [`CatalogSource`]. Transport and
//! syntax failures become `CatalogError::Load`; a well-formed payload that
//! breaks the node contract becomes `CatalogError::Schema` with the location
//! of the offending node.

mod schema;

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::domain::entities::DocumentTree;
use crate::domain::ports::{CatalogSource, DocumentLocation};
use crate::error::{CatalogError, CatalogResult};

pub use schema::tree_from_value;

/// File name looked up when a source points at a directory
pub const DEFAULT_CATALOG_FILE: &str = "docs_tree.json";

const HTTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Catalog stored on the local file system
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    /// A directory resolves to `<dir>/docs_tree.json`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let path = if path.is_dir() {
            path.join(DEFAULT_CATALOG_FILE)
        } else {
            path
        };
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn base_dir(&self) -> &Path {
        self.path.parent().unwrap_or_else(|| Path::new("."))
    }
}

impl CatalogSource for FileSource {
    fn id(&self) -> String {
        self.path.display().to_string()
    }

    fn fetch(&self) -> CatalogResult<String> {
        std::fs::read_to_string(&self.path).map_err(|e| CatalogError::load(self.id(), e))
    }

    fn resolve(&self, path: &str) -> DocumentLocation {
        if is_url(path) {
            return DocumentLocation::Remote(path.to_string());
        }
        let relative = path.trim_start_matches("./").trim_start_matches('/');
        DocumentLocation::Local(self.base_dir().join(relative))
    }
}

/// Catalog served over HTTP(S)
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

impl CatalogSource for HttpSource {
    fn id(&self) -> String {
        self.url.clone()
    }

    fn fetch(&self) -> CatalogResult<String> {
        let client = reqwest::blocking::Client::builder()
            .timeout(HTTP_TIMEOUT)
            .build()
            .map_err(|e| CatalogError::load(self.id(), e))?;

        let response = client
            .get(&self.url)
            .send()
            .map_err(|e| CatalogError::load(self.id(), e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CatalogError::load(self.id(), format!("HTTP {}", status)));
        }

        response.text().map_err(|e| CatalogError::load(self.id(), e))
    }

    fn resolve(&self, path: &str) -> DocumentLocation {
        let joined = reqwest::Url::parse(&self.url)
            .and_then(|base| base.join(path))
            .map(|url| url.to_string())
            .unwrap_or_else(|_| path.to_string());
        DocumentLocation::Remote(joined)
    }
}

fn is_url(id: &str) -> bool {
    let lower = id.to_ascii_lowercase();
    lower.starts_with("http://") || lower.starts_with("https://")
}

/// Pick a source for a user-supplied path or URL.
pub fn source_from_id(id: &str) -> Box<dyn CatalogSource> {
    if is_url(id) {
        Box::new(HttpSource::new(id))
    } else {
        Box::new(FileSource::new(id))
    }
}

/// Fetch and validate a catalog.
pub fn load_tree(source: &dyn CatalogSource) -> CatalogResult<DocumentTree> {
    let text = source.fetch()?;
    let tree = parse_document(&text, &source.id())?;
    tracing::debug!(
        source = %source.id(),
        sections = tree.len(),
        files = tree.file_count(),
        "catalog loaded"
    );
    Ok(tree)
}

/// Parse catalog text. Invalid JSON is a load failure, not a schema one.
pub fn parse_document(text: &str, source_id: &str) -> CatalogResult<DocumentTree> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|e| CatalogError::load(source_id, e))?;
    tree_from_value(&value)
}
