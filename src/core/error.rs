//! Custom error types for the application.
//!
//! Provides structured error handling with meaningful error messages
//! and proper error categorization for each domain:
//!
//! - [`FetchError`] - Network/fetch-related errors for HTTP requests
//! - [`RenameError`] - Rename validation and backend rejection
//! - [`MediaError`] - Media element operations (always non-fatal)

use thiserror::Error;

/// Network/fetch-related errors for HTTP requests.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Failed to create HTTP request
    #[error("Failed to create request")]
    RequestCreationFailed,
    /// Network request failed (CORS, connection refused, etc.)
    #[error("Network error: {0}")]
    NetworkError(String),
    /// HTTP error response (non-2xx status)
    #[error("HTTP error: {0}")]
    HttpError(u16),
    /// Failed to read response body
    #[error("Failed to read response")]
    ResponseReadFailed,
    /// JSON parsing error
    #[error("JSON parse error: {0}")]
    JsonParseError(String),
    /// Request timed out
    #[error("Request timed out")]
    Timeout,
}

/// Rename flow errors.
///
/// The `Display` text of each variant is exactly what the status line shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RenameError {
    /// Nothing is selected.
    #[error("select a file first")]
    NoSelection,
    /// New name is blank after trimming.
    #[error("enter new filename")]
    EmptyName,
    /// Backend answered with a non-success status.
    #[error("rename error: {body}")]
    Rejected { status: u16, body: String },
    /// Request never produced a response.
    #[error("rename failed")]
    Transport(#[from] FetchError),
}

/// Media element errors. Never surfaced to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    /// The media element is not mounted.
    #[error("media element unavailable")]
    Unavailable,
    /// `play()` was refused, typically by autoplay policy.
    #[error("playback rejected: {0}")]
    PlaybackRejected(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_messages() {
        assert_eq!(RenameError::NoSelection.to_string(), "select a file first");
        assert_eq!(RenameError::EmptyName.to_string(), "enter new filename");
        assert_eq!(
            RenameError::Rejected {
                status: 409,
                body: "exists".to_string()
            }
            .to_string(),
            "rename error: exists"
        );
        assert_eq!(
            RenameError::from(FetchError::Timeout).to_string(),
            "rename failed"
        );
    }
}
