//! Core data types shared across the client

use serde::{Deserialize, Serialize};

/// An album as served by the feed and stored in favorites.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub id: u32,
    pub name: String,
    pub year: String,
    /// Cover image URL
    pub cover: String,
    pub artists: String,
    pub description: String,
}

/// A single playable song.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub name: String,
    pub lyric: String,
    /// Media URI handed to the engine
    pub src: String,
    /// Display length, e.g. "3:45"
    pub length: String,
}

/// One section of the home feed.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    pub section_title: String,
    pub albums: Vec<Album>,
}

/// Song listing for one album, keyed by the album it belongs to.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    #[serde(rename = "id")]
    pub album_id: String,
    pub songs: Vec<Song>,
}

/// The reconciled favorites list, rebuilt on every store emission.
///
/// Ordering is store-defined and not touched here.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct FavoritesState {
    pub albums: Vec<Album>,
}
