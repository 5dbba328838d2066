//! Domain Services
//!
//! Pure business logic services that operate on domain entities.
//! These services have no I/O dependencies and are easily testable.

mod collapse;
mod filter;
mod navigator;
mod ordering;

pub use collapse::CollapseState;
pub use filter::{filter_view, visible_keys, FilterOutcome};
pub use navigator::{NavState, Navigator};
pub use ordering::{compare_nodes, folder_keys, sorted, sorted_view, ViewNode};
