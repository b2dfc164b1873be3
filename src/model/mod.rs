//! Model module - data types and remote data access
//!
//! This module contains the data structures the client core operates on.
//! It is organized into submodules by responsibility:
//!
//! - `types`: Feed and favorites value types (albums, songs, sections)
//! - `playback`: The observable playback state snapshot
//! - `feed_client`: HTTP client for the remote feed API

mod types;
mod playback;
mod feed_client;

pub use types::{Album, FavoritesState, Playlist, Section, Song};

pub use playback::PlaybackState;

pub use feed_client::{FeedClient, DEFAULT_REQUEST_TIMEOUT_SECS};
