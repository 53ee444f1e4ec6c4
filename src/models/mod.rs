//! Data models for setlists, songs, and playlists.

pub mod playlist;
pub mod setlist;
pub mod song;

// Re-exports for convenience
pub use playlist::PlaylistDetails;
pub use setlist::{Setlist, SetlistEntry};
pub use song::Song;
