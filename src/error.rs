//! Error types for Doccat
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Doccat operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Main error type for Doccat operations
#[derive(Error, Debug)]
pub enum CatalogError {
    /// The catalog source could not be reached or read (network, IO, JSON syntax)
    #[error("could not load catalog from {source_id}: {message}")]
    Load { source_id: String, message: String },

    /// The payload was read but does not follow the node contract
    #[error("invalid catalog at {location}: {message}")]
    Schema { location: String, message: String },

    /// An internal invariant failed while rendering a subtree
    #[error("cannot render {location}: {message}")]
    RenderPrecondition { location: String, message: String },

    /// A section selection named a key the tree does not have
    #[error("unknown section '{key}'")]
    UnknownSection { key: String },

    /// Directory scan failed
    #[error("cannot scan {path}: {message}")]
    Scan { path: PathBuf, message: String },

    /// Opening or downloading a document failed
    #[error("cannot {action} {target}: {message}")]
    Launch {
        action: &'static str,
        target: String,
        message: String,
    },

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Coarse classification used by the UI to pick a message style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    Load,
    Schema,
    Render,
    Navigation,
    Scan,
    Config,
    Io,
}

impl CatalogError {
    pub fn load(source_id: impl Into<String>, message: impl ToString) -> Self {
        Self::Load {
            source_id: source_id.into(),
            message: message.to_string(),
        }
    }

    pub fn schema(location: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Schema {
            location: location.into(),
            message: message.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            CatalogError::Load { .. } => ErrorKind::Load,
            CatalogError::Schema { .. } => ErrorKind::Schema,
            CatalogError::RenderPrecondition { .. } => ErrorKind::Render,
            CatalogError::UnknownSection { .. } => ErrorKind::Navigation,
            CatalogError::Scan { .. } => ErrorKind::Scan,
            CatalogError::InvalidConfig { .. } => ErrorKind::Config,
            CatalogError::Launch { .. } | CatalogError::Io(_) | CatalogError::Json(_) => {
                ErrorKind::Io
            }
        }
    }
}
