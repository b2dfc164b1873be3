//! Favorites persistence boundary

use async_trait::async_trait;
use tokio::sync::watch;

use crate::error::Result;
use crate::model::Album;

/// Backing store for favorite albums.
///
/// The store defines the ordering of the list it emits; the synchronizer
/// republishes it untouched. Mutations are observed through [`watch`](Self::watch),
/// which emits the full list after every change.
#[async_trait]
pub trait FavoritesStore: Send + Sync {
    /// Insert the album, or replace the stored copy with the same id.
    async fn upsert(&self, album: Album) -> Result<()>;

    /// Remove the album with `album_id`. Removing an absent id is a no-op.
    async fn remove(&self, album_id: u32) -> Result<()>;

    /// Live query over the current favorites list.
    fn watch(&self) -> watch::Receiver<Vec<Album>>;
}

/// Insertion-ordered in-memory store.
///
/// Serves as the default store and as the test double for the synchronizer.
#[derive(Debug)]
pub struct MemoryFavoritesStore {
    albums: watch::Sender<Vec<Album>>,
}

impl MemoryFavoritesStore {
    pub fn new() -> Self {
        let (albums, _) = watch::channel(Vec::new());
        Self { albums }
    }
}

impl Default for MemoryFavoritesStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FavoritesStore for MemoryFavoritesStore {
    async fn upsert(&self, album: Album) -> Result<()> {
        self.albums.send_modify(|albums| {
            if let Some(existing) = albums.iter_mut().find(|a| a.id == album.id) {
                *existing = album;
            } else {
                albums.push(album);
            }
        });
        Ok(())
    }

    async fn remove(&self, album_id: u32) -> Result<()> {
        self.albums.send_modify(|albums| {
            albums.retain(|a| a.id != album_id);
        });
        Ok(())
    }

    fn watch(&self) -> watch::Receiver<Vec<Album>> {
        self.albums.subscribe()
    }
}
