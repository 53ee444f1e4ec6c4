//! Setlist-to-playlist orchestration engine.
//!
//! Selects a qualifying setlist for an artist, resolves every entry to a
//! track concurrently, and appends the matched tracks to a playlist with a
//! single write. Individual lookup failures are tolerated; output order
//! always matches performance order.

use std::sync::Arc;

use futures_util::future::join_all;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::error::{EncoreError, Result};
use crate::models::{SetlistEntry, Song};
use crate::ports::{PlaylistWriter, SetlistProvider, SongResolver};

/// Default minimum number of songs a setlist must have to qualify.
pub const DEFAULT_MIN_SONGS: usize = 5;

/// Default cap on simultaneously in-flight song lookups.
pub const DEFAULT_MAX_CONCURRENT_LOOKUPS: usize = 8;

/// Orchestrates setlist selection, concurrent song resolution, and the
/// final playlist write.
///
/// # Example
///
/// ```rust,no_run
/// use std::sync::Arc;
/// use encore::{SetlistEngine, SetlistFmApi, SpotifyApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let spotify = Arc::new(SpotifyApi::new("access_token"));
///     let mut engine = SetlistEngine::new(
///         Arc::new(SetlistFmApi::new("setlistfm_key")),
///         spotify.clone(),
///         spotify,
///     );
///     engine.set_min_songs(10);
///     engine.add_setlist("playlist_id", "The Menzingers").await?;
///     Ok(())
/// }
/// ```
pub struct SetlistEngine {
    setlists: Arc<dyn SetlistProvider>,
    songs: Arc<dyn SongResolver>,
    playlists: Arc<dyn PlaylistWriter>,
    min_songs: usize,
    max_concurrent_lookups: usize,
}

impl SetlistEngine {
    /// Create an engine over the three collaborators.
    pub fn new(
        setlists: Arc<dyn SetlistProvider>,
        songs: Arc<dyn SongResolver>,
        playlists: Arc<dyn PlaylistWriter>,
    ) -> Self {
        Self {
            setlists,
            songs,
            playlists,
            min_songs: DEFAULT_MIN_SONGS,
            max_concurrent_lookups: DEFAULT_MAX_CONCURRENT_LOOKUPS,
        }
    }

    /// Set the minimum number of songs a setlist must have to qualify.
    ///
    /// Read once at the start of each [`add_setlist`](Self::add_setlist)
    /// call; changing it does not affect calls already in flight.
    pub fn set_min_songs(&mut self, min_songs: usize) {
        self.min_songs = min_songs;
    }

    /// Get the minimum-songs threshold.
    pub fn min_songs(&self) -> usize {
        self.min_songs
    }

    /// Cap the number of simultaneously in-flight song lookups.
    ///
    /// Every setlist entry still gets its own lookup; the cap only bounds
    /// how many run at once. Output ordering is unaffected.
    pub fn set_max_concurrent_lookups(&mut self, max: usize) {
        self.max_concurrent_lookups = max.max(1);
    }

    /// Resolve the latest qualifying setlist for `artist` and append the
    /// matched tracks to the playlist.
    ///
    /// Entries that fail to resolve are skipped; the remaining tracks are
    /// written in performance order with a single append call.
    ///
    /// # Errors
    ///
    /// - [`EncoreError::SetlistUnavailable`] when the setlist provider fails
    ///   or no setlist meets the threshold. Nothing is resolved or written.
    /// - [`EncoreError::NoSongsResolved`] when no entry resolved to a track.
    ///   Nothing is written.
    /// - [`EncoreError::PlaylistWriteFailed`] when the append is rejected.
    pub async fn add_setlist(&self, playlist_id: &str, artist: &str) -> Result<()> {
        let setlist = self
            .setlists
            .get_setlist(artist, self.min_songs)
            .await
            .map_err(|e| match e {
                e @ EncoreError::SetlistUnavailable(_) => e,
                e => EncoreError::SetlistUnavailable(e.to_string()),
            })?;

        debug!("resolving {} setlist songs for {}", setlist.len(), artist);

        let songs = self.resolve_all(artist, setlist.into_entries()).await;
        if songs.is_empty() {
            return Err(EncoreError::NoSongsResolved(format!(
                "no tracks matched for artist {}",
                artist
            )));
        }

        self.playlists
            .add_songs(playlist_id, &songs)
            .await
            .map_err(|e| match e {
                e @ EncoreError::PlaylistWriteFailed(_) => e,
                e => EncoreError::PlaylistWriteFailed(e.to_string()),
            })
    }

    /// Resolve every entry concurrently and reassemble in performance order.
    ///
    /// One task per entry, bounded by the lookup semaphore. `join_all`
    /// returns outcomes in spawn order, so collecting them in sequence
    /// reproduces the setlist order no matter when each task finished.
    /// Unresolved entries are logged and skipped; a panicked lookup task
    /// counts as unresolved.
    async fn resolve_all(&self, artist: &str, entries: Vec<SetlistEntry>) -> Vec<Song> {
        let semaphore = Arc::new(Semaphore::new(self.max_concurrent_lookups));

        let tasks: Vec<_> = entries
            .into_iter()
            .map(|entry| {
                let resolver = Arc::clone(&self.songs);
                let semaphore = Arc::clone(&semaphore);
                let artist = artist.to_string();
                tokio::spawn(async move {
                    let Ok(_permit) = semaphore.acquire_owned().await else {
                        return None;
                    };
                    match resolver.get_song(&artist, &entry.title).await {
                        Ok(song) => Some(song),
                        Err(e) => {
                            warn!("could not resolve \"{}\": {}", entry.title, e);
                            None
                        }
                    }
                })
            })
            .collect();

        let mut resolved = Vec::with_capacity(tasks.len());
        for outcome in join_all(tasks).await {
            match outcome {
                Ok(Some(song)) => resolved.push(song),
                Ok(None) => {}
                Err(e) => warn!("song lookup task failed: {}", e),
            }
        }
        resolved
    }
}
