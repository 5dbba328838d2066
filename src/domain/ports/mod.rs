//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod catalog_source;

pub use catalog_source::{CatalogSource, DocumentLocation};
