//! Observable playback state

use super::types::{Album, Song};

/// Snapshot of playback as projected by the controller.
///
/// Mutated only by the [`PlayerController`](crate::controller::PlayerController);
/// consumers receive read-only snapshots through its watch channel. The state
/// is replaced wholesale on each load and merged on seek and poll ticks.
///
/// Published positions are clamped so that `position_ms <= duration_ms`
/// whenever `duration_ms > 0`.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct PlaybackState {
    pub song: Option<Song>,
    pub album: Option<Album>,
    pub is_playing: bool,
    pub position_ms: u64,
    pub duration_ms: u64,
}

impl PlaybackState {
    /// Fresh state for a newly loaded song. Playback starts paused; position
    /// and duration stay zero until the engine's first poll tick reports them.
    pub fn loaded(song: Song, album: Album) -> Self {
        Self {
            song: Some(song),
            album: Some(album),
            is_playing: false,
            position_ms: 0,
            duration_ms: 0,
        }
    }

    /// Merge a `(position, duration)` sample from the engine, clamping the
    /// position to the duration when the duration is known.
    pub fn apply_progress(&mut self, position_ms: u64, duration_ms: u64) {
        self.duration_ms = duration_ms;
        self.position_ms = if duration_ms > 0 {
            position_ms.min(duration_ms)
        } else {
            position_ms
        };
    }
}
