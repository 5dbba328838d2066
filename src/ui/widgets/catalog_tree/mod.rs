//! Catalog Browser Widget
//!
//! Full-screen tree browser over a [`doccat::Catalog`]. Folders toggle in
//! place, sections switch with Tab, `/` starts a live search.
//!
//! # Module Structure
//!
//! - `menu` - Browser state, line flattening and action handling
//! - `render` - Line, status bar and help bar rendering
//! - `input` - Key mapping and the interactive loop

mod input;
mod menu;
mod render;

pub use input::{run_interactive, BrowseOptions};
pub use menu::{flatten_view, CatalogBrowser, LineKind};
pub use render::render_line;
