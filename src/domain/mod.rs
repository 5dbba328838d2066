//! Domain Layer
//!
//! The catalog model and the logic that orders, filters and navigates it,
//! without I/O dependencies.
//!
//! ## Structure
//!
//! - `entities/` - Catalog data (Node, DocumentTree)
//! - `value_objects/` - Immutable value types (NodeKey, Query, Selection)
//! - `services/` - Ordering, filtering, collapse state, section navigation
//! - `ports/` - Interface definitions for infrastructure

pub mod entities;
pub mod ports;
pub mod services;
pub mod value_objects;
