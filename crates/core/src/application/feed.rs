// Alert Feed - push notification for queue state transitions

use serde::Serialize;
use tokio::sync::watch;

use crate::domain::AlertRequest;

/// Point-in-time view of the queue: the displayed alert plus the number
/// of alerts still waiting behind it
#[derive(Debug, Clone, Default, Serialize)]
pub struct QueueSnapshot {
    pub current: Option<AlertRequest>,
    pub waiting: usize,
}

/// Receiver handle for queue state transitions
///
/// Replaces interval polling: the presentation layer awaits [`changed`]
/// and re-renders from [`snapshot`]. Handles are cheap to clone; every
/// clone observes the same queue.
///
/// [`changed`]: AlertFeed::changed
/// [`snapshot`]: AlertFeed::snapshot
#[derive(Clone)]
pub struct AlertFeed {
    rx: watch::Receiver<QueueSnapshot>,
}

impl AlertFeed {
    pub(crate) fn new(rx: watch::Receiver<QueueSnapshot>) -> Self {
        Self { rx }
    }

    /// Latest published snapshot (late subscribers see it immediately)
    pub fn snapshot(&self) -> QueueSnapshot {
        self.rx.borrow().clone()
    }

    /// Wait for the next state transition
    pub async fn changed(&mut self) {
        let _ = self.rx.changed().await;
    }
}
