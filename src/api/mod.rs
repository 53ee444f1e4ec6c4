//! API clients for the external providers.
//!
//! This module provides two clients:
//! - [`SetlistFmApi`]: setlist source (setlist.fm search API)
//! - [`SpotifyApi`]: track search and playlist writes (Spotify Web API)

pub mod setlistfm;
pub mod spotify;

pub use setlistfm::SetlistFmApi;
pub use spotify::SpotifyApi;
