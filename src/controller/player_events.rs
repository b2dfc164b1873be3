//! Engine event listener and progress polling

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::engine::EngineEvent;

use super::PlayerController;

/// Sampling period for playback progress
pub(crate) const POLL_PERIOD: Duration = Duration::from_secs(1);

impl PlayerController {
    /// Consume engine events for the lifetime of the controller.
    ///
    /// Play-state transitions are published as they arrive and gate the
    /// polling task: progress is only sampled while the engine is playing.
    pub(crate) fn spawn_event_listener(
        &self,
        mut events: mpsc::UnboundedReceiver<EngineEvent>,
    ) -> JoinHandle<()> {
        let controller = self.clone();

        tokio::spawn(async move {
            while let Some(event) = events.recv().await {
                match event {
                    EngineEvent::PlayStateChanged(is_playing) => {
                        tracing::debug!(is_playing, "engine play state changed");
                        controller.publish(|state| state.is_playing = is_playing);

                        if is_playing {
                            controller.start_polling();
                        } else {
                            controller.stop_polling();
                        }
                    }
                    EngineEvent::Error(message) => {
                        // Non-fatal: keep the last good state, record the error.
                        tracing::error!(%message, "playback engine error");
                        controller.record_engine_error(message);
                    }
                }
            }
            tracing::debug!("engine event channel closed");
        })
    }

    /// Start the recurring progress sampler if it is not already running.
    ///
    /// Ticks are best-effort wall-clock cadence: a stalled tick is delayed,
    /// never burst to catch up. A tick publishes nothing while the engine
    /// reports not-playing.
    pub(crate) fn start_polling(&self) {
        let mut slot = self.poll_task.lock().unwrap();
        if slot.is_some() {
            return;
        }
        // The listener may reach this point after dispose() has already run
        // stop_polling() against an empty slot; spawning here would leak the
        // task. dispose() sets the flag before reaping, so a spawn that
        // raced past this check is still caught by its stop_polling().
        if *self.disposed.lock().unwrap() {
            return;
        }

        tracing::debug!("starting progress polling");
        let controller = self.clone();

        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(POLL_PERIOD);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;

                if !controller.engine.is_playing() {
                    continue;
                }

                let position_ms = controller.engine.position();
                let duration_ms = controller.engine.duration();
                tracing::trace!(position_ms, duration_ms, "poll tick");

                controller.publish(|state| state.apply_progress(position_ms, duration_ms));
            }
        });

        *slot = Some(handle);
    }

    /// Cancel the progress sampler, if running.
    pub(crate) fn stop_polling(&self) {
        if let Some(handle) = self.poll_task.lock().unwrap().take() {
            tracing::debug!("stopping progress polling");
            handle.abort();
        }
    }
}
