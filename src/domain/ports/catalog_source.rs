//! CatalogSource port
//!
//! Produces the raw catalog payload. Parsing and validation stay in the
//! loader so every source is held to the same node contract.

use std::path::PathBuf;

use crate::error::CatalogResult;

/// Where a file node's `path` points once resolved against its catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocumentLocation {
    Local(PathBuf),
    Remote(String),
}

pub trait CatalogSource: Send + Sync {
    /// Human-readable identifier (path or URL) used in messages
    fn id(&self) -> String;

    /// Read the whole payload. Transport failures are `CatalogError::Load`.
    fn fetch(&self) -> CatalogResult<String>;

    /// Resolve a file node's `path` relative to this catalog.
    fn resolve(&self, path: &str) -> DocumentLocation;
}
