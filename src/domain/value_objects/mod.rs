//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod node_key;
mod query;
mod section;

pub use node_key::NodeKey;
pub use query::Query;
pub use section::{InitialSection, SectionName, Selection};
