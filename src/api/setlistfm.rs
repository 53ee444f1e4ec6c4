//! setlist.fm API client.
//!
//! This module provides the setlist source: a client for the setlist.fm
//! search API (api.setlist.fm). An API key is required.

use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error};

use crate::error::{EncoreError, Result};
use crate::models::{Setlist, SetlistEntry};
use crate::ports::SetlistProvider;

/// Base URL for the setlist.fm REST API.
const API_BASE_URL: &str = "https://api.setlist.fm/rest/1.0/";

/// setlist.fm search API client.
///
/// Looks up the setlists an artist has recently performed. Results arrive
/// newest first; [`SetlistProvider::get_setlist`] picks the first one that
/// meets the caller's song-count threshold.
///
/// # Example
///
/// ```rust,no_run
/// use encore::{SetlistFmApi, SetlistProvider};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let api = SetlistFmApi::new("your_api_key");
///     let setlist = api.get_setlist("The Menzingers", 5).await?;
///     println!("{} songs", setlist.len());
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct SetlistFmApi {
    client: Client,
    api_key: String,
}

impl SetlistFmApi {
    /// Create a new setlist.fm client with an API key.
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
        }
    }

    /// Fetch the first page of setlists for an artist.
    async fn search_setlists(&self, artist: &str) -> Result<SetlistSearchResponse> {
        let url = format!("{}search/setlists", API_BASE_URL);
        debug!("GET {} for artist: {}", url, artist);

        let response = self
            .client
            .get(&url)
            .query(&[("artistName", artist)])
            .header("x-api-key", &self.api_key)
            .header("Accept", "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            error!("setlist.fm search failed with status {}", status);
            return Err(EncoreError::ApiError(format!(
                "setlist search returned {}",
                status
            )));
        }

        Ok(response.json().await?)
    }
}

#[async_trait::async_trait]
impl SetlistProvider for SetlistFmApi {
    async fn get_setlist(&self, artist: &str, min_songs: usize) -> Result<Setlist> {
        let response = self
            .search_setlists(artist)
            .await
            .map_err(|e| EncoreError::SetlistUnavailable(e.to_string()))?;

        response.find_with_min_songs(min_songs).ok_or_else(|| {
            EncoreError::SetlistUnavailable(format!("could not find setlist for artist {}", artist))
        })
    }
}

/// One page of candidate setlists, newest first.
#[derive(Debug, Default, Deserialize)]
struct SetlistSearchResponse {
    #[serde(rename = "setlist", default)]
    setlists: Vec<SetlistFmSetlist>,
}

impl SetlistSearchResponse {
    /// First setlist whose named-song count meets the threshold.
    ///
    /// Only this page is considered; paging through older shows is out of
    /// scope.
    fn find_with_min_songs(self, min_songs: usize) -> Option<Setlist> {
        self.setlists.into_iter().find_map(|candidate| {
            let entries = candidate.into_entries();
            if entries.len() >= min_songs {
                Some(Setlist::new(entries, min_songs))
            } else {
                None
            }
        })
    }
}

/// A single setlist as reported by setlist.fm.
#[derive(Debug, Default, Deserialize)]
struct SetlistFmSetlist {
    #[serde(default)]
    sets: SetlistFmSets,
}

impl SetlistFmSetlist {
    /// Flatten all sets (main set, encores) into entries in performance
    /// order, skipping unnamed songs.
    fn into_entries(self) -> Vec<SetlistEntry> {
        self.sets
            .sets
            .into_iter()
            .flat_map(|set| set.songs)
            .filter(|song| !song.name.is_empty())
            .map(|song| SetlistEntry::new(song.name))
            .collect()
    }
}

/// The sets of a show (main set plus encores).
#[derive(Debug, Default, Deserialize)]
struct SetlistFmSets {
    #[serde(rename = "set", default)]
    sets: Vec<SetlistFmSet>,
}

/// One set within a show.
#[derive(Debug, Default, Deserialize)]
struct SetlistFmSet {
    #[serde(rename = "song", default)]
    songs: Vec<SetlistFmSong>,
}

/// One performed song within a set.
#[derive(Debug, Default, Deserialize)]
struct SetlistFmSong {
    #[serde(default)]
    name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn search_response(json: &str) -> SetlistSearchResponse {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_entries_flatten_sets_in_order() {
        let response = search_response(
            r#"{
                "setlist": [
                    {
                        "sets": {
                            "set": [
                                {"song": [{"name": "Opener"}, {"name": "Second"}]},
                                {"song": [{"name": "Encore"}]}
                            ]
                        }
                    }
                ]
            }"#,
        );

        let setlist = response.find_with_min_songs(3).unwrap();
        let titles: Vec<_> = setlist.entries().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Opener", "Second", "Encore"]);
    }

    #[test]
    fn test_unnamed_songs_are_skipped() {
        let response = search_response(
            r#"{
                "setlist": [
                    {
                        "sets": {
                            "set": [
                                {"song": [{"name": "Named"}, {"name": ""}, {}]}
                            ]
                        }
                    }
                ]
            }"#,
        );

        let setlist = response.find_with_min_songs(1).unwrap();
        assert_eq!(setlist.len(), 1);
        assert_eq!(setlist.entries()[0].title, "Named");
    }

    #[test]
    fn test_short_setlists_are_passed_over() {
        let response = search_response(
            r#"{
                "setlist": [
                    {"sets": {"set": [{"song": [{"name": "Lone Song"}]}]}},
                    {
                        "sets": {
                            "set": [
                                {"song": [{"name": "A"}, {"name": "B"}, {"name": "C"}]}
                            ]
                        }
                    }
                ]
            }"#,
        );

        let setlist = response.find_with_min_songs(3).unwrap();
        assert_eq!(setlist.len(), 3);
        assert_eq!(setlist.min_songs(), 3);
        assert_eq!(setlist.entries()[0].title, "A");
    }

    #[test]
    fn test_no_qualifying_setlist() {
        let response = search_response(
            r#"{"setlist": [{"sets": {"set": [{"song": [{"name": "Only"}]}]}}]}"#,
        );
        assert!(response.find_with_min_songs(5).is_none());
    }

    #[test]
    fn test_empty_response() {
        let response = search_response(r#"{}"#);
        assert!(response.find_with_min_songs(1).is_none());
    }
}
