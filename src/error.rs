//! Error types for setlist resolution and playlist writing.

use thiserror::Error;

/// Main error type for all encore operations.
#[derive(Debug, Error)]
pub enum EncoreError {
    /// No setlist could be retrieved or none met the song-count threshold.
    #[error("Setlist unavailable: {0}")]
    SetlistUnavailable(String),

    /// Every setlist entry failed to resolve to a track.
    #[error("No songs resolved: {0}")]
    NoSongsResolved(String),

    /// The final append to the playlist was rejected.
    #[error("Playlist write failed: {0}")]
    PlaylistWriteFailed(String),

    /// The playlist could not be created.
    #[error("Playlist creation failed: {0}")]
    PlaylistCreateFailed(String),

    /// HTTP request failed.
    #[error("Request error: {0}")]
    RequestError(#[from] reqwest::Error),

    /// JSON parsing failed.
    #[error("Parse error: {0}")]
    ParseError(#[from] serde_json::Error),

    /// Provider-reported error with message.
    #[error("API error: {0}")]
    ApiError(String),
}

/// Result type alias for encore operations.
pub type Result<T> = std::result::Result<T, EncoreError>;
