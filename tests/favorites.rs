//! Favorites synchronizer behavior: live emissions, toggle reconciliation,
//! idempotency, and store error propagation.

mod common;

use std::sync::Arc;

use async_trait::async_trait;
use common::album;
use tokio::sync::watch;
use tokio_stream::StreamExt;
use tunedeck::{
    Album, Error, FavoritesStore, FavoritesSynchronizer, MemoryFavoritesStore,
};

fn synchronizer() -> FavoritesSynchronizer {
    FavoritesSynchronizer::new(Arc::new(MemoryFavoritesStore::new()))
}

#[tokio::test]
async fn subscription_starts_with_current_snapshot() {
    let sync = synchronizer();

    let mut favorites = sync.fetch_favorites();
    let state = favorites.next().await.unwrap();
    assert!(state.albums.is_empty());
}

#[tokio::test]
async fn toggled_on_album_appears_in_next_emission() {
    let sync = synchronizer();
    let mut favorites = sync.fetch_favorites();
    favorites.next().await.unwrap();

    sync.toggle_favorite(album(1, "Hexagonal"), true).await.unwrap();

    let state = favorites.next().await.unwrap();
    assert_eq!(state.albums.len(), 1);
    assert_eq!(state.albums[0].id, 1);
}

#[tokio::test]
async fn toggled_off_album_disappears_from_next_emission() {
    let sync = synchronizer();
    let mut favorites = sync.fetch_favorites();
    favorites.next().await.unwrap();

    sync.toggle_favorite(album(1, "Hexagonal"), true).await.unwrap();
    favorites.next().await.unwrap();

    sync.toggle_favorite(album(1, "Hexagonal"), false).await.unwrap();

    let state = favorites.next().await.unwrap();
    assert!(state.albums.iter().all(|a| a.id != 1));
}

#[tokio::test]
async fn toggles_are_idempotent() {
    let sync = synchronizer();

    sync.toggle_favorite(album(1, "Hexagonal"), true).await.unwrap();
    sync.toggle_favorite(album(1, "Hexagonal"), true).await.unwrap();
    sync.toggle_favorite(album(2, "Asura Balbalta"), false).await.unwrap();

    let mut favorites = sync.fetch_favorites();
    let state = favorites.next().await.unwrap();
    assert_eq!(state.albums.len(), 1);
    assert_eq!(state.albums[0].id, 1);
}

#[tokio::test]
async fn store_ordering_is_preserved() {
    let sync = synchronizer();

    sync.toggle_favorite(album(1, "Hexagonal"), true).await.unwrap();
    sync.toggle_favorite(album(2, "Asura Balbalta"), true).await.unwrap();
    sync.toggle_favorite(album(3, "Unplugged"), true).await.unwrap();
    sync.toggle_favorite(album(2, "Asura Balbalta"), false).await.unwrap();

    let mut favorites = sync.fetch_favorites();
    let state = favorites.next().await.unwrap();
    let ids: Vec<u32> = state.albums.iter().map(|a| a.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[tokio::test]
async fn concurrent_same_album_toggles_do_not_lose_updates() {
    let sync = Arc::new(synchronizer());

    let mut tasks = Vec::new();
    for _ in 0..8 {
        let sync = sync.clone();
        tasks.push(tokio::spawn(async move {
            sync.toggle_favorite(album(7, "Hexagonal"), true).await.unwrap();
            sync.toggle_favorite(album(7, "Hexagonal"), false).await.unwrap();
        }));
    }
    for task in tasks {
        task.await.unwrap();
    }

    // Every task ran a full add/remove pair; the final add must stick.
    sync.toggle_favorite(album(7, "Hexagonal"), true).await.unwrap();

    let mut favorites = sync.fetch_favorites();
    let state = favorites.next().await.unwrap();
    assert_eq!(state.albums.len(), 1);
    assert_eq!(state.albums[0].id, 7);
}

struct FailingStore {
    list: watch::Sender<Vec<Album>>,
}

impl FailingStore {
    fn new() -> Self {
        let (list, _) = watch::channel(Vec::new());
        Self { list }
    }
}

#[async_trait]
impl FavoritesStore for FailingStore {
    async fn upsert(&self, _album: Album) -> tunedeck::Result<()> {
        Err(Error::Persistence("disk full".to_string()))
    }

    async fn remove(&self, _album_id: u32) -> tunedeck::Result<()> {
        Err(Error::Persistence("disk full".to_string()))
    }

    fn watch(&self) -> watch::Receiver<Vec<Album>> {
        self.list.subscribe()
    }
}

#[tokio::test]
async fn store_failure_propagates_to_toggle_caller() {
    let sync = FavoritesSynchronizer::new(Arc::new(FailingStore::new()));

    let result = sync.toggle_favorite(album(1, "Hexagonal"), true).await;
    match result {
        Err(Error::Persistence(message)) => assert_eq!(message, "disk full"),
        other => panic!("expected persistence error, got {other:?}"),
    }
}
