//! Error types for rules text sources.

use std::path::PathBuf;

/// Error returned when the rules text cannot be obtained.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    /// The request could not be sent or the response could not be read.
    #[error("request to {url} failed: {message}")]
    Http { url: String, message: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    /// The rules page has no link with the expected text.
    #[error("no link with text {text:?} found on {url}")]
    LinkNotFound { url: String, text: String },

    #[error("{url} served {content_type}, expected plain text")]
    ContentType { url: String, content_type: String },

    #[error("rules text is not valid UTF-8: {0}")]
    Decode(#[from] std::string::FromUtf8Error),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
