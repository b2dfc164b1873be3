//! Transport commands

use crate::model::{Album, PlaybackState, Song};

use super::PlayerController;

impl PlayerController {
    /// Load a new song, replacing the previous playback state wholesale.
    ///
    /// The published state starts paused with zero progress; the engine
    /// transitions to preparing and reports readiness through its events.
    pub fn load(&self, song: Song, album: Album) {
        tracing::info!(song = %song.name, album = %album.name, "loading track");

        let src = song.src.clone();
        self.publish(move |state| {
            *state = PlaybackState::loaded(song, album);
        });

        self.engine.set_source(&src);
        self.engine.prepare();
    }

    /// Request playback. The `is_playing` transition is published when the
    /// engine confirms it through its play-state event, not here.
    pub fn play(&self) {
        tracing::debug!("play requested");
        self.engine.play();
    }

    /// Request pause. Confirmation follows the same event path as [`play`](Self::play).
    pub fn pause(&self) {
        tracing::debug!("pause requested");
        self.engine.pause();
    }

    /// Seek to `position_ms`.
    ///
    /// The new position is published immediately for responsive UI, then the
    /// seek is forwarded to the engine. The engine's own progress reporting
    /// overwrites the optimistic value on the next poll tick; last write
    /// wins, with the poll cadence as the reconciliation interval.
    pub fn seek_to(&self, position_ms: u64) {
        tracing::debug!(position_ms, "seek requested");

        self.publish(|state| {
            state.position_ms = if state.duration_ms > 0 {
                position_ms.min(state.duration_ms)
            } else {
                position_ms
            };
        });

        self.engine.seek_to(position_ms);
    }
}
