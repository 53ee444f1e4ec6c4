//! Playlist models.

use serde::{Deserialize, Serialize};

/// Metadata for creating a playlist.
///
/// Passes through to the playlist service unchanged; the engine attaches no
/// invariant to these fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaylistDetails {
    /// Display name.
    pub name: String,

    /// Free-form description.
    pub description: String,

    /// Whether the playlist is publicly visible.
    pub is_public: bool,
}

impl PlaylistDetails {
    /// Create playlist metadata.
    pub fn new<S1: Into<String>, S2: Into<String>>(
        name: S1,
        description: S2,
        is_public: bool,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            is_public,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_playlist_details_wire_form() {
        let details = PlaylistDetails::new("my-playlist", "some playlist", false);
        let body = serde_json::to_string(&details).unwrap();
        assert_eq!(
            body,
            r#"{"name":"my-playlist","description":"some playlist","is_public":false}"#
        );
    }
}
