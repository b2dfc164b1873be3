//! Favorites module - store reconciliation
//!
//! Reconciles user-driven favorite toggles against the backing store and
//! republishes the reconciled list to subscribers on every store mutation.

mod store;

pub use store::{FavoritesStore, MemoryFavoritesStore};

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::Mutex;
use tokio_stream::wrappers::WatchStream;
use tokio_stream::{Stream, StreamExt};

use crate::error::Result;
use crate::model::{Album, FavoritesState};

/// Bridges favorite toggles and the backing store's live query.
pub struct FavoritesSynchronizer {
    store: Arc<dyn FavoritesStore>,
    // Per-album serialization of toggles; concurrent taps on the same album
    // would otherwise race upsert against remove.
    toggle_locks: Mutex<HashMap<u32, Arc<Mutex<()>>>>,
}

impl FavoritesSynchronizer {
    pub fn new(store: Arc<dyn FavoritesStore>) -> Self {
        Self {
            store,
            toggle_locks: Mutex::new(HashMap::new()),
        }
    }

    /// Continuously-updating favorites list.
    ///
    /// Subscribe once, receive many: the current snapshot is emitted first,
    /// then one emission per store mutation.
    pub fn fetch_favorites(&self) -> impl Stream<Item = FavoritesState> + Send + use<> {
        WatchStream::new(self.store.watch()).map(|albums| FavoritesState { albums })
    }

    /// Apply an add/remove intent for `album`.
    ///
    /// Toggles for the same album id are serialized; the outcome is observed
    /// through the next [`fetch_favorites`](Self::fetch_favorites) emission,
    /// not a return value. Idempotent: repeating a toggle is a no-op. Store
    /// failures propagate to the caller.
    pub async fn toggle_favorite(&self, album: Album, favorite: bool) -> Result<()> {
        let album_id = album.id;
        tracing::debug!(album_id, favorite, "toggling favorite");

        let lock = {
            let mut locks = self.toggle_locks.lock().await;
            locks.entry(album_id).or_default().clone()
        };
        let serialized = lock.lock().await;

        let result = if favorite {
            self.store.upsert(album).await
        } else {
            self.store.remove(album_id).await
        };

        match &result {
            Ok(()) => tracing::info!(album_id, favorite, "favorite toggled"),
            Err(e) => tracing::error!(album_id, error = %e, "favorite toggle failed"),
        }

        drop(serialized);
        drop(lock);
        self.release_toggle_lock(album_id).await;

        result
    }

    /// Drop the lock entry for `album_id` once no toggle holds a clone of it.
    ///
    /// Cloning an entry requires the map lock held here, so the strong-count
    /// check and the removal are atomic with respect to new togglers.
    async fn release_toggle_lock(&self, album_id: u32) {
        let mut locks = self.toggle_locks.lock().await;
        if locks
            .get(&album_id)
            .is_some_and(|entry| Arc::strong_count(entry) == 1)
        {
            locks.remove(&album_id);
        }
    }
}
