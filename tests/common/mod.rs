//! Shared test support: a scriptable media engine and fixture builders.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Mutex;

use tokio::sync::mpsc;
use tunedeck::{Album, EngineEvent, MediaEngine, Song};

/// Media engine with hand-scripted progress and events.
///
/// Commands are recorded verbatim so tests can assert what was forwarded.
#[derive(Default)]
pub struct MockEngine {
    playing: AtomicBool,
    position_ms: AtomicU64,
    duration_ms: AtomicU64,
    commands: Mutex<Vec<String>>,
    events_tx: Mutex<Option<mpsc::UnboundedSender<EngineEvent>>>,
}

impl MockEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_playing(&self, playing: bool) {
        self.playing.store(playing, Ordering::SeqCst);
    }

    pub fn set_progress(&self, position_ms: u64, duration_ms: u64) {
        self.position_ms.store(position_ms, Ordering::SeqCst);
        self.duration_ms.store(duration_ms, Ordering::SeqCst);
    }

    /// Emit an engine event. A real engine keeps firing after the controller
    /// detaches, so a dropped receiver is not an error here.
    pub fn emit(&self, event: EngineEvent) {
        let tx = self.events_tx.lock().unwrap();
        let _ = tx.as_ref().expect("events() not yet called").send(event);
    }

    pub fn commands(&self) -> Vec<String> {
        self.commands.lock().unwrap().clone()
    }

    fn record(&self, command: String) {
        self.commands.lock().unwrap().push(command);
    }
}

impl MediaEngine for MockEngine {
    fn set_source(&self, uri: &str) {
        self.record(format!("set_source {uri}"));
    }

    fn prepare(&self) {
        self.record("prepare".to_string());
    }

    fn play(&self) {
        self.record("play".to_string());
    }

    fn pause(&self) {
        self.record("pause".to_string());
    }

    fn seek_to(&self, position_ms: u64) {
        self.record(format!("seek_to {position_ms}"));
    }

    fn position(&self) -> u64 {
        self.position_ms.load(Ordering::SeqCst)
    }

    fn duration(&self) -> u64 {
        self.duration_ms.load(Ordering::SeqCst)
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    fn events(&self) -> mpsc::UnboundedReceiver<EngineEvent> {
        let (tx, rx) = mpsc::unbounded_channel();
        *self.events_tx.lock().unwrap() = Some(tx);
        rx
    }
}

pub fn album(id: u32, name: &str) -> Album {
    Album {
        id,
        name: name.to_string(),
        year: "2008".to_string(),
        cover: format!("https://example.com/{id}.jpg"),
        artists: "Leessang".to_string(),
        description: String::new(),
    }
}

pub fn song(name: &str, src: &str) -> Song {
    Song {
        name: name.to_string(),
        lyric: String::new(),
        src: src.to_string(),
        length: "3:45".to_string(),
    }
}
