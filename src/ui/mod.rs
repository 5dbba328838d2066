//! Terminal presentation for the `doccat` binary.
//!
//! - `primitives/` - Icons and colored text
//! - `blocks/` - Small composable output blocks
//! - `views/` - Per-command text rendering
//! - `widgets/` - The interactive catalog browser

pub mod blocks;
pub mod context;
pub mod error;
pub mod json;
pub mod output;
pub mod primitives;
pub mod terminal;
pub mod theme;
pub mod views;
pub mod widgets;
