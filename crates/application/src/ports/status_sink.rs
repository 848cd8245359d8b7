//! Status display port

use std::sync::{Arc, Mutex};

use probe_domain::StatusSnapshot;

/// Port for displaying run status.
///
/// The engine publishes the full snapshot after every change. Sinks are
/// write-only observers: they must tolerate repeated and overlapping
/// snapshots and always reflect the most recent one.
pub trait StatusSink: Send + Sync {
    /// Receives the latest snapshot.
    fn publish(&self, snapshot: &StatusSnapshot);
}

impl<S: StatusSink + ?Sized> StatusSink for Arc<S> {
    fn publish(&self, snapshot: &StatusSnapshot) {
        (**self).publish(snapshot);
    }
}

impl<S: StatusSink + ?Sized> StatusSink for &S {
    fn publish(&self, snapshot: &StatusSnapshot) {
        (**self).publish(snapshot);
    }
}

/// Sink that keeps every published snapshot in memory.
///
/// Useful for headless runs and for inspecting the publication sequence.
#[derive(Debug, Default)]
pub struct MemorySink {
    snapshots: Mutex<Vec<StatusSnapshot>>,
}

impl MemorySink {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every snapshot published so far, oldest first.
    #[must_use]
    pub fn snapshots(&self) -> Vec<StatusSnapshot> {
        self.snapshots
            .lock()
            .map(|guard| guard.clone())
            .unwrap_or_default()
    }

    /// Returns the most recent snapshot.
    #[must_use]
    pub fn latest(&self) -> Option<StatusSnapshot> {
        self.snapshots
            .lock()
            .ok()
            .and_then(|guard| guard.last().cloned())
    }
}

impl StatusSink for MemorySink {
    fn publish(&self, snapshot: &StatusSnapshot) {
        if let Ok(mut guard) = self.snapshots.lock() {
            guard.push(snapshot.clone());
        }
    }
}
