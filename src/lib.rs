//! Doccat - hierarchical document catalog browser
//!
//! Doccat loads a catalog of documents (sections of nested folders and
//! files, as JSON), renders it in a canonical order, tracks which folders are
//! expanded, switches between sections and filters everything by a
//! case-insensitive substring query. It can also build the catalog JSON by
//! scanning a documents directory.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod logging;

// Re-exports for convenience
pub use application::{Catalog, LoadOutcome, View};
pub use config::Config;
pub use domain::entities::{DocumentTree, FileNode, FolderNode, Node};
pub use domain::value_objects::{InitialSection, NodeKey, Query, Selection};
pub use error::{CatalogError, CatalogResult, ErrorKind};
pub use infrastructure::{load_tree, source_from_id};
