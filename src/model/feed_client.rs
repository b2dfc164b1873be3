//! Remote feed API client

use std::time::Duration;

use reqwest::Client;

use crate::error::{Error, Result};
use super::types::{Playlist, Section};

/// Default timeout for feed requests
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Thin client for the feed API.
///
/// Fetch failures are surfaced to the caller as [`Error::Network`] or
/// [`Error::Api`] and are not retried here; retry is a user action.
#[derive(Clone, Debug)]
pub struct FeedClient {
    http: Client,
    base_url: String,
}

impl FeedClient {
    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self::with_client(http, base_url))
    }

    /// Build with a preconfigured HTTP client.
    pub fn with_client(http: Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { http, base_url }
    }

    /// `GET /feed` — the ordered home feed sections.
    pub async fn get_home_feed(&self) -> Result<Vec<Section>> {
        let url = format!("{}/feed", self.base_url);
        tracing::debug!(%url, "fetching home feed");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "home feed request rejected");
            return Err(Error::Api { status: status.as_u16() });
        }

        let sections: Vec<Section> = response.json().await?;
        tracing::info!(sections = sections.len(), "home feed loaded");
        Ok(sections)
    }

    /// `GET /playlists/{id}` — the song listing for one album.
    pub async fn get_playlist(&self, id: u32) -> Result<Playlist> {
        let url = format!("{}/playlists/{}", self.base_url, id);
        tracing::debug!(%url, "fetching playlist");

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(id, status = status.as_u16(), "playlist request rejected");
            return Err(Error::Api { status: status.as_u16() });
        }

        let playlist: Playlist = response.json().await?;
        tracing::info!(id, songs = playlist.songs.len(), "playlist loaded");
        Ok(playlist)
    }
}
