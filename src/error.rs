//! Error types for the fallible edges of the resizer.
//!
//! The interaction core never fails: a missing or removed image simply
//! deactivates the selection. Errors only arise when loading settings or
//! reading image files for the reference document.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur outside the interaction core
#[derive(Error, Debug)]
pub enum ResizerError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings file is not valid JSON for [`ResizerSettings`](crate::settings::ResizerSettings)
    #[error("Settings parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Settings parsed but hold values the resizer cannot work with
    #[error("Invalid settings: {0}")]
    InvalidSettings(String),

    /// Image header could not be decoded
    #[error("Image error in {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Element handle does not exist in the document
    #[error("Unknown element {0}")]
    UnknownElement(crate::types::ElementId),
}

/// Result type alias for resizer operations
pub type ResizerResult<T> = Result<T, ResizerError>;
