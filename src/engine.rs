//! Media engine boundary
//!
//! The engine runs its own internal clock and reports state asynchronously.
//! The [`PlayerController`](crate::controller::PlayerController) is the
//! exclusive owner of the engine handle; no other component commands it.

use tokio::sync::mpsc;

/// Asynchronous events reported by the media engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EngineEvent {
    /// The engine started or stopped playing. Carries the confirmed state.
    PlayStateChanged(bool),
    /// The engine hit a decode or network failure. Non-fatal to the controller.
    Error(String),
}

/// Transport and sampling interface of a media playback engine.
///
/// Transport commands are fire-and-forget: they request a transition and
/// return immediately. Confirmation arrives through [`MediaEngine::events`]
/// or the controller's next poll tick, never synchronously.
pub trait MediaEngine: Send + Sync {
    /// Point the engine at a new media resource.
    fn set_source(&self, uri: &str);

    /// Begin preparing the current resource for playback.
    fn prepare(&self);

    fn play(&self);

    fn pause(&self);

    fn seek_to(&self, position_ms: u64);

    /// Current playback position in milliseconds.
    fn position(&self) -> u64;

    /// Duration of the loaded resource in milliseconds, 0 if unknown.
    fn duration(&self) -> u64;

    fn is_playing(&self) -> bool;

    /// Subscribe to engine events.
    ///
    /// Single-consumer: the controller calls this exactly once at
    /// construction and owns the receiving end for its lifetime.
    fn events(&self) -> mpsc::UnboundedReceiver<EngineEvent>;
}
