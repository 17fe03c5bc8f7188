//! Error types for the portfolio site

use thiserror::Error;

use crate::content::Resource;

/// Main error type for portfolio operations
#[derive(Error, Debug)]
pub enum PortfolioError {
    /// A content resource could not be retrieved
    #[error("Failed to fetch {resource}: {reason}")]
    Fetch {
        resource: Resource,
        reason: String,
    },

    /// A content resource was retrieved but is not the expected JSON shape
    #[error("Failed to decode {resource}: {source}")]
    Decode {
        resource: Resource,
        #[source]
        source: serde_json::Error,
    },

    /// Client-side preference storage rejected an operation
    #[error("Storage error: {0}")]
    Storage(String),

    /// General I/O error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for portfolio operations
pub type Result<T> = std::result::Result<T, PortfolioError>;
