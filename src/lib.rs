//! Playback and favorites synchronization core for a music-streaming client.
//!
//! The crate bridges an external media-playback engine with an observable
//! playback state, and reconciles user favorite toggles against a backing
//! store. Screens, navigation, and rendering live in the host application;
//! they consume the watch channels and streams exposed here.
//!
//! - [`PlayerController`] owns the [`MediaEngine`] handle, exposes transport
//!   commands, and projects engine events and 1-second progress samples into
//!   a [`PlaybackState`] watch channel.
//! - [`FavoritesSynchronizer`] applies favorite toggles to a
//!   [`FavoritesStore`] and republishes the reconciled list on every store
//!   mutation.
//! - [`FeedClient`] fetches the home feed and playlist details over HTTP.

pub mod controller;
pub mod engine;
pub mod error;
pub mod favorites;
pub mod logging;
pub mod model;

pub use controller::PlayerController;
pub use engine::{EngineEvent, MediaEngine};
pub use error::{Error, Result};
pub use favorites::{FavoritesStore, FavoritesSynchronizer, MemoryFavoritesStore};
pub use model::{
    Album, FavoritesState, FeedClient, PlaybackState, Playlist, Section, Song,
};
