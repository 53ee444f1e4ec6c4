//! Spotify Web API client.
//!
//! This module provides the track side: resolving performed song titles to
//! Spotify tracks and writing to playlists (api.spotify.com). All calls
//! require a user access token.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, error};

use crate::error::{EncoreError, Result};
use crate::models::{PlaylistDetails, Song};
use crate::ports::{PlaylistWriter, SongResolver};

/// Base URL for the Spotify Web API.
const API_BASE_URL: &str = "https://api.spotify.com/v1/";

/// Spotify Web API client.
///
/// Implements both song resolution (track search) and playlist writing
/// (append tracks, create playlist).
///
/// # Example
///
/// ```rust,no_run
/// use encore::{SongResolver, SpotifyApi};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = SpotifyApi::new("access_token");
///     let song = api.get_song("The Menzingers", "Casey").await?;
///     println!("Matched: {}", song.uri());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SpotifyApi {
    client: Client,
    access_token: String,
}

impl SpotifyApi {
    /// Create a new Spotify client with a user access token.
    pub fn new<S: Into<String>>(access_token: S) -> Self {
        Self {
            client: Client::new(),
            access_token: access_token.into(),
        }
    }
}

#[async_trait::async_trait]
impl SongResolver for SpotifyApi {
    async fn get_song(&self, artist: &str, title: &str) -> Result<Song> {
        let url = format!("{}search", API_BASE_URL);
        let query = track_search_query(artist, title);
        debug!("GET {} with query: {}", url, query);

        let response = self
            .client
            .get(&url)
            .query(&[("q", query.as_str()), ("type", "track")])
            .bearer_auth(&self.access_token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("Spotify track search failed with status {}", status);
            return Err(EncoreError::ApiError(format!(
                "track search returned {}",
                status
            )));
        }

        let results: TrackSearchResponse = response.json().await?;

        // Spotify ranks by relevance; the first hit is the match.
        match results.tracks.items.into_iter().next() {
            Some(item) => Ok(Song::new(item.uri)),
            None => Err(EncoreError::ApiError(format!(
                "no track found for song {} ({})",
                title, artist
            ))),
        }
    }
}

#[async_trait::async_trait]
impl PlaylistWriter for SpotifyApi {
    async fn add_songs(&self, playlist_id: &str, songs: &[Song]) -> Result<()> {
        if songs.is_empty() {
            return Err(EncoreError::ApiError("no songs provided".to_string()));
        }

        let url = format!("{}playlists/{}/tracks", API_BASE_URL, playlist_id);
        let body = TrackUris::from_songs(songs);
        debug!("POST {} with {} tracks", url, body.uris.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::CREATED {
            error!("adding songs to playlist failed with status {}", status);
            return Err(EncoreError::ApiError(format!(
                "adding songs returned {}",
                status
            )));
        }

        Ok(())
    }

    async fn create_playlist(&self, user_id: &str, details: &PlaylistDetails) -> Result<()> {
        let url = format!("{}users/{}/playlists", API_BASE_URL, user_id);
        debug!("POST {} for playlist: {}", url, details.name);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.access_token)
            .json(details)
            .send()
            .await
            .map_err(|e| EncoreError::PlaylistCreateFailed(e.to_string()))?;

        let status = response.status();
        if status != StatusCode::CREATED {
            error!("creating playlist failed with status {}", status);
            return Err(EncoreError::PlaylistCreateFailed(format!(
                "creating playlist returned {}",
                status
            )));
        }

        Ok(())
    }
}

/// Build the field-filtered track search query.
fn track_search_query(artist: &str, title: &str) -> String {
    format!("artist:{} track:{}", artist, title)
}

/// Request body for the append-tracks call.
#[derive(Debug, Serialize)]
struct TrackUris<'a> {
    uris: Vec<&'a str>,
}

impl<'a> TrackUris<'a> {
    fn from_songs(songs: &'a [Song]) -> Self {
        Self {
            uris: songs.iter().map(|s| s.uri()).collect(),
        }
    }
}

/// Track search response envelope.
#[derive(Debug, Deserialize)]
struct TrackSearchResponse {
    #[serde(default)]
    tracks: TrackPage,
}

/// One page of track results.
#[derive(Debug, Default, Deserialize)]
struct TrackPage {
    #[serde(default)]
    items: Vec<TrackItem>,
}

/// A single track result; only the URI is needed.
#[derive(Debug, Deserialize)]
struct TrackItem {
    uri: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_search_query() {
        assert_eq!(
            track_search_query("The Menzingers", "Casey"),
            "artist:The Menzingers track:Casey"
        );
    }

    #[test]
    fn test_track_uris_wire_form() {
        let songs = vec![Song::new("uri1"), Song::new("uri2")];
        let body = serde_json::to_string(&TrackUris::from_songs(&songs)).unwrap();
        assert_eq!(body, r#"{"uris":["uri1","uri2"]}"#);
    }

    #[test]
    fn test_search_response_first_item() {
        let results: TrackSearchResponse = serde_json::from_str(
            r#"{
                "tracks": {
                    "items": [
                        {"uri": "spotify:track:first"},
                        {"uri": "spotify:track:second"}
                    ]
                }
            }"#,
        )
        .unwrap();
        assert_eq!(
            results.tracks.items.first().map(|i| i.uri.as_str()),
            Some("spotify:track:first")
        );
    }

    #[test]
    fn test_search_response_no_items() {
        let results: TrackSearchResponse =
            serde_json::from_str(r#"{"tracks": {"items": []}}"#).unwrap();
        assert!(results.tracks.items.is_empty());
    }

    #[tokio::test]
    async fn test_add_songs_rejects_empty_list() {
        let api = SpotifyApi::new("token");

        let err = api.add_songs("playlist_id", &[]).await.unwrap_err();

        assert!(matches!(err, EncoreError::ApiError(_)));
    }
}
