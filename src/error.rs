//! Error types for the client core

/// Errors surfaced by the client core.
///
/// Nothing here is fatal to the process: feed failures are retryable by the
/// user, store failures propagate to the toggling caller, and engine failures
/// are recorded by the controller without disturbing its last good state.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("feed request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("feed endpoint returned HTTP {status}")]
    Api { status: u16 },

    #[error("favorites store: {0}")]
    Persistence(String),

    #[error("playback engine: {0}")]
    Engine(String),
}

/// Specialized Result type for the client core
pub type Result<T> = std::result::Result<T, Error>;
