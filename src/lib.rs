//! # Encore
//!
//! A Rust library for turning live concert setlists into Spotify playlists.
//!
//! ## Quick Start
//!
//! The easiest way to use this library is through the [`SetlistEngine`]:
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use encore::{SetlistEngine, SetlistFmApi, SpotifyApi};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let spotify = Arc::new(SpotifyApi::new("spotify_access_token"));
//!     let mut engine = SetlistEngine::new(
//!         Arc::new(SetlistFmApi::new("setlistfm_api_key")),
//!         spotify.clone(),
//!         spotify,
//!     );
//!
//!     // Only consider setlists with at least 8 songs
//!     engine.set_min_songs(8);
//!
//!     // Resolve the latest qualifying setlist and append it to the playlist
//!     engine.add_setlist("playlist_id", "The Menzingers").await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! - The setlist source returns the artist's most recent setlist meeting a
//!   configurable song-count threshold
//! - Every entry is resolved to a Spotify track **concurrently**, one lookup
//!   per song
//! - Entries with no match are skipped; the rest are appended to the playlist
//!   in performance order with a single write
//!
//! ## Low-Level APIs
//!
//! For more control, you can use the collaborators directly:
//!
//! - [`SetlistFmApi`] - setlist.fm search client (setlist source)
//! - [`SpotifyApi`] - Spotify Web API client (track search and playlist writes)
//! - [`ports`] - the traits the engine consumes, for custom providers

pub mod api;
pub mod engine;
pub mod error;
pub mod models;
pub mod ports;

// Main interface (recommended)
pub use engine::{SetlistEngine, DEFAULT_MAX_CONCURRENT_LOOKUPS, DEFAULT_MIN_SONGS};

// Low-level APIs
pub use api::{SetlistFmApi, SpotifyApi};
pub use error::EncoreError;
pub use models::{PlaylistDetails, Setlist, SetlistEntry, Song};
pub use ports::{PlaylistWriter, SetlistProvider, SongResolver};
