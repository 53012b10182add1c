//! Error types for cardbox-core.

use thiserror::Error;

/// Result type alias using ExtractError.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting entries from a notes document.
#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("unsupported notes format {extension:?}: only .txt and .html are supported")]
    UnsupportedFormat { extension: String },

    #[error("element has no content to normalize")]
    EmptyElement,

    #[error("malformed document: {0}")]
    Malformed(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
