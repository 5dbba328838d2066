//! Application Layer
//!
//! Coordinates the domain services for one catalog session.
//!
//! - `catalog` - The orchestrator state object and its event hooks
//! - `render` - Builds the data-only view the shell mounts
//! - `loads` - Last-request-wins load tracking

pub mod catalog;
pub mod loads;
pub mod render;

pub use catalog::{Catalog, LoadFailure, LoadOutcome};
pub use loads::{LoadTicket, LoadTracker};
pub use render::{
    render_nodes, render_sections, FileRow, FolderRow, RenderedNode, RenderedSection, SectionBody,
    View,
};
