//! Domain Entities
//!
//! - `Node` - A file or folder of the catalog
//! - `DocumentTree` - Section key to top-level nodes

mod node;
mod tree;

pub use node::{FileNode, FolderNode, Node};
pub use tree::DocumentTree;
