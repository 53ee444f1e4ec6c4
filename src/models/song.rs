//! Song model.

use serde::{Deserialize, Serialize};

/// A resolved, playable track on the target music service.
///
/// Wraps the service-specific track URI and is immutable once constructed.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Song {
    /// Service-specific track URI (e.g. "spotify:track:4uLU6hMCjMI75M1A2tKUQC").
    uri: String,
}

impl Song {
    /// Create a new song from a track URI.
    pub fn new<S: Into<String>>(uri: S) -> Self {
        Self { uri: uri.into() }
    }

    /// Get the track URI.
    pub fn uri(&self) -> &str {
        &self.uri
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_song_uri() {
        let song = Song::new("spotify:track:abc123");
        assert_eq!(song.uri(), "spotify:track:abc123");
    }

    #[test]
    fn test_song_equality() {
        assert_eq!(Song::new("uri1"), Song::new("uri1"));
        assert_ne!(Song::new("uri1"), Song::new("uri2"));
    }
}
