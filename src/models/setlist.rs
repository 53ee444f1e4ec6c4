//! Setlist models.
//!
//! A setlist is the ordered list of songs an artist performed at a show,
//! as reported by the setlist data source. Entries carry only the performed
//! title; track identifiers are attached later by resolution.

use serde::{Deserialize, Serialize};

/// A single song title as performed live.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct SetlistEntry {
    /// Song title as reported by the setlist source.
    pub title: String,
}

impl SetlistEntry {
    /// Create a new entry from a performed title.
    pub fn new<S: Into<String>>(title: S) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// An ordered setlist for one artist.
///
/// Entry order is the performance order and must survive resolution.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Setlist {
    /// Songs in performance order.
    entries: Vec<SetlistEntry>,

    /// Song-count threshold this setlist was selected under.
    min_songs: usize,
}

impl Setlist {
    /// Create a setlist from entries and the threshold used to select it.
    pub fn new(entries: Vec<SetlistEntry>, min_songs: usize) -> Self {
        Self { entries, min_songs }
    }

    /// Songs in performance order.
    pub fn entries(&self) -> &[SetlistEntry] {
        &self.entries
    }

    /// Consume the setlist, yielding its entries in performance order.
    pub fn into_entries(self) -> Vec<SetlistEntry> {
        self.entries
    }

    /// Number of songs in the setlist.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the setlist has no songs.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Threshold this setlist was selected under.
    pub fn min_songs(&self) -> usize {
        self.min_songs
    }
}
