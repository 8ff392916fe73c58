//! Error types for the audio player controls

use thiserror::Error;

/// Player errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// The media element rejected a play/pause command
    #[error("Media command failed: {0}")]
    MediaCommand(String),

    /// A page element the player needs is not in the document
    #[error("Missing element: #{0}")]
    MissingElement(String),

    /// An element was found but has the wrong type
    #[error("Element #{id} is not a {expected}")]
    WrongElementType {
        /// Element id
        id: String,
        /// Expected DOM interface name
        expected: &'static str,
    },

    /// A browser API call failed
    #[error("DOM error: {0}")]
    Dom(String),

    /// Configuration could not be parsed or is invalid
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl From<serde_json::Error> for PlaybackError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidConfig(err.to_string())
    }
}

/// Result type for player operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
