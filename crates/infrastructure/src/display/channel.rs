//! Channel-backed sink feeding a dedicated render task.

use probe_application::ports::StatusSink;
use probe_domain::StatusSnapshot;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Sink that forwards snapshots to a render task.
///
/// Only the latest snapshot is kept; a slow renderer skips intermediate
/// states but always ends on the most recent one.
#[derive(Debug)]
pub struct ChannelSink {
    sender: watch::Sender<StatusSnapshot>,
}

impl StatusSink for ChannelSink {
    fn publish(&self, snapshot: &StatusSnapshot) {
        self.sender.send_replace(snapshot.clone());
    }
}

/// Spawns a task rendering every snapshot published to the returned sink.
///
/// The task ends once the sink is dropped and the last snapshot is drawn.
pub fn spawn_renderer<S>(display: S) -> (ChannelSink, JoinHandle<()>)
where
    S: StatusSink + 'static,
{
    let (sender, mut receiver) = watch::channel(StatusSnapshot::default());
    let handle = tokio::spawn(async move {
        while receiver.changed().await.is_ok() {
            let snapshot = receiver.borrow_and_update().clone();
            display.publish(&snapshot);
        }
    });

    (ChannelSink { sender }, handle)
}
