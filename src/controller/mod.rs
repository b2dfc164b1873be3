//! Controller module - playback state synchronization
//!
//! This module bridges the media engine with the observable playback state.
//! It is organized into submodules by responsibility:
//!
//! - `playback`: Transport commands (load, play, pause, seek)
//! - `player_events`: Engine event listener and the progress polling task

mod playback;
mod player_events;

use std::sync::{Arc, Mutex};

use tokio::sync::watch;
use tokio::task::JoinHandle;

use crate::engine::MediaEngine;
use crate::error::Error;
use crate::model::PlaybackState;

/// Owns the media engine handle and projects its state into a watch channel.
///
/// One event-listener task and at most one polling task run on behalf of the
/// controller; both are supervised by it and stop on [`dispose`](Self::dispose).
#[derive(Clone)]
pub struct PlayerController {
    pub(crate) engine: Arc<dyn MediaEngine>,
    pub(crate) state_tx: Arc<watch::Sender<PlaybackState>>,
    // Doubles as the publication gate: publishing holds this lock, so once
    // dispose() has returned no further publication can begin.
    pub(crate) disposed: Arc<Mutex<bool>>,
    pub(crate) poll_task: Arc<Mutex<Option<JoinHandle<()>>>>,
    listener_task: Arc<Mutex<Option<JoinHandle<()>>>>,
    last_engine_error: Arc<Mutex<Option<String>>>,
}

impl PlayerController {
    /// Take exclusive ownership of `engine` and start listening to its events.
    pub fn new(engine: Arc<dyn MediaEngine>) -> Self {
        let (state_tx, _state_rx) = watch::channel(PlaybackState::default());

        let controller = Self {
            engine,
            state_tx: Arc::new(state_tx),
            disposed: Arc::new(Mutex::new(false)),
            poll_task: Arc::new(Mutex::new(None)),
            listener_task: Arc::new(Mutex::new(None)),
            last_engine_error: Arc::new(Mutex::new(None)),
        };

        let events = controller.engine.events();
        let handle = controller.spawn_event_listener(events);
        *controller.listener_task.lock().unwrap() = Some(handle);

        controller
    }

    /// Subscribe to playback state. Receivers always observe the latest
    /// published snapshot.
    pub fn subscribe(&self) -> watch::Receiver<PlaybackState> {
        self.state_tx.subscribe()
    }

    /// Current snapshot of the published state.
    pub fn state(&self) -> PlaybackState {
        self.state_tx.borrow().clone()
    }

    /// Last error reported by the engine, if any. Engine errors never clear
    /// or replace the published playback state.
    pub fn last_engine_error(&self) -> Option<Error> {
        self.last_engine_error.lock().unwrap().clone().map(Error::Engine)
    }

    /// Stop the polling task and detach from engine events.
    ///
    /// Synchronous: after this returns, no further state publications occur.
    pub fn dispose(&self) {
        tracing::debug!("disposing player controller");
        *self.disposed.lock().unwrap() = true;

        self.stop_polling();

        if let Some(handle) = self.listener_task.lock().unwrap().take() {
            handle.abort();
        }
    }

    pub(crate) fn record_engine_error(&self, message: String) {
        *self.last_engine_error.lock().unwrap() = Some(message);
    }

    /// Publish a state mutation unless the controller has been disposed.
    pub(crate) fn publish<F>(&self, mutate: F)
    where
        F: FnOnce(&mut PlaybackState),
    {
        let disposed = self.disposed.lock().unwrap();
        if *disposed {
            return;
        }
        self.state_tx.send_modify(mutate);
    }
}
