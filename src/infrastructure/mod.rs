//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `loader/` - Catalog sources (file, HTTP) and schema validation
//! - `scanner` - Builds a catalog from a documents directory
//! - `watcher` - Rebuilds the catalog on file changes
//! - `launcher` - Open/download actions for documents

pub mod launcher;
pub mod loader;
pub mod scanner;
pub mod watcher;

pub use loader::{load_tree, source_from_id, FileSource, HttpSource, DEFAULT_CATALOG_FILE};
