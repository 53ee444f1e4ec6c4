//! Collaborator traits consumed by the orchestration engine.
//!
//! The engine only sees these narrow interfaces; production implementations
//! live in [`crate::api`], test doubles in the engine's test module.

use crate::error::Result;
use crate::models::{PlaylistDetails, Setlist, Song};

/// Source of live setlists for an artist.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SetlistProvider: Send + Sync {
    /// Return one setlist for `artist` containing at least `min_songs` songs.
    ///
    /// Fails when the provider errors or no setlist meets the threshold.
    async fn get_setlist(&self, artist: &str, min_songs: usize) -> Result<Setlist>;
}

/// Resolver from a performed song title to a playable track.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait SongResolver: Send + Sync {
    /// Return the best-match track for `title` by `artist`.
    async fn get_song(&self, artist: &str, title: &str) -> Result<Song>;
}

/// Sink for playlist mutations on the target music service.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait PlaylistWriter: Send + Sync {
    /// Append `songs` to the playlist in order. Fails when `songs` is empty.
    async fn add_songs(&self, playlist_id: &str, songs: &[Song]) -> Result<()>;

    /// Create a playlist owned by `user_id`.
    async fn create_playlist(&self, user_id: &str, details: &PlaylistDetails) -> Result<()>;
}
