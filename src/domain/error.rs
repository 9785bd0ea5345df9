//! Error types for the Jiffy plugin.
//!
//! This module defines the centralized error type [`JiffyError`] and a type alias
//! [`Result`] for convenient error handling throughout the plugin. All errors are
//! implemented using the `thiserror` crate for automatic `Error` trait implementation.
//!
//! Search failures never escape the application layer: their `Display` output
//! becomes the hint line shown under the input box.

use thiserror::Error;

/// Maximum number of body characters quoted in an HTTP failure message.
const MAX_BODY_EXCERPT: usize = 120;

/// The main error type for Jiffy plugin operations.
///
/// The first five variants describe why a single search attempt failed. They
/// are terminal for that attempt; the user can always search again or clear.
///
/// # Examples
///
/// ```
/// use jiffy::JiffyError;
///
/// let err = JiffyError::NothingFound { term: "xyzzy".to_string() };
/// assert_eq!(err.to_string(), "Nothing found for xyzzy");
/// ```
#[derive(Debug, Error)]
pub enum JiffyError {
    /// The search service answered, but with zero candidates.
    #[error("Nothing found for {term}")]
    NothingFound {
        /// The term that produced no candidates.
        term: String,
    },

    /// The search service answered with a non-success HTTP status.
    ///
    /// `message` is the service's own explanation when it sent one.
    #[error("Search failed ({status}): {message}")]
    Http {
        /// HTTP status code returned by the service.
        status: u16,
        /// Human-readable failure description.
        message: String,
    },

    /// The response body could not be read as a search result.
    #[error("Could not read search response: {0}")]
    Decode(#[from] serde_json::Error),

    /// No API key was configured, so no request can be made.
    #[error("No Giphy api_key configured")]
    MissingApiKey,

    /// The user refused the web access permission, so no request can be made.
    #[error("Web access denied; searches cannot run")]
    WebAccessDenied,

    /// Theme parsing or loading failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl JiffyError {
    /// Builds an [`JiffyError::Http`] from a status code and the raw body.
    ///
    /// Non-UTF-8 bytes are replaced and long bodies are cut short so the hint
    /// line stays readable.
    #[must_use]
    pub fn http(status: u16, body: &[u8]) -> Self {
        let text = String::from_utf8_lossy(body);
        let trimmed = text.trim();
        let message = if trimmed.is_empty() {
            "empty response".to_string()
        } else if trimmed.chars().count() > MAX_BODY_EXCERPT {
            let cut: String = trimmed.chars().take(MAX_BODY_EXCERPT).collect();
            format!("{cut}...")
        } else {
            trimmed.to_string()
        };
        Self::Http { status, message }
    }
}

/// A specialized `Result` type for Jiffy operations.
pub type Result<T> = std::result::Result<T, JiffyError>;
