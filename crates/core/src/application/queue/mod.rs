// Alert Queue - FIFO serialization gate for modal alerts


use std::collections::VecDeque;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::watch;
use tracing::{debug, warn};

use crate::application::feed::{AlertFeed, QueueSnapshot};
use crate::domain::{AlertDraft, AlertRequest};
use crate::port::{IdProvider, TimeProvider};

/// Serializes modal alerts so at most one is presented at a time.
///
/// Rapid or concurrent alert triggers (two validation failures firing in
/// the same tick, unrelated screens raising dialogs) never overlap and
/// never skip: insertion order is display order.
///
/// Construct one queue at application start and share it (`Arc`) with
/// every component that raises or observes alerts. Independent instances
/// would each serialize only their own callers.
pub struct AlertQueue {
    id_provider: Arc<dyn IdProvider>,
    time_provider: Arc<dyn TimeProvider>,
    state: Mutex<QueueState>,
    publisher: watch::Sender<QueueSnapshot>,
}

#[derive(Default)]
struct QueueState {
    current: Option<AlertRequest>,
    waiting: VecDeque<AlertRequest>,
}

impl QueueState {
    fn snapshot(&self) -> QueueSnapshot {
        QueueSnapshot {
            current: self.current.clone(),
            waiting: self.waiting.len(),
        }
    }
}

impl AlertQueue {
    pub fn new(id_provider: Arc<dyn IdProvider>, time_provider: Arc<dyn TimeProvider>) -> Self {
        let (publisher, _) = watch::channel(QueueSnapshot::default());
        Self {
            id_provider,
            time_provider,
            state: Mutex::new(QueueState::default()),
            publisher,
        }
    }

    /// Admit an alert into the queue.
    ///
    /// Assigns a unique ID and creation timestamp, appends to the waiting
    /// sequence, and promotes the head if nothing is currently displayed.
    /// `None` is a logged no-op: a misbehaving caller must not be able to
    /// take the alert pipeline down.
    pub fn enqueue(&self, draft: Option<AlertDraft>) {
        let Some(draft) = draft else {
            warn!("enqueue called without an alert, ignoring");
            return;
        };

        let request = AlertRequest::new(
            self.id_provider.generate_id(),
            self.time_provider.now_millis(),
            draft,
        );

        let mut state = self.lock();
        debug!(alert_id = %request.id, kind = %request.kind, "alert enqueued");
        state.waiting.push_back(request);
        if state.current.is_none() {
            state.current = state.waiting.pop_front();
            if let Some(current) = &state.current {
                debug!(alert_id = %current.id, "alert promoted to current");
            }
        }
        self.publish(&state);
    }

    /// Dismiss the current alert unconditionally (button press, backdrop
    /// dismiss, or programmatic close all end up here) and promote the
    /// next waiting alert, if any. Safe no-op when nothing is displayed.
    pub fn dequeue(&self) {
        let mut state = self.lock();
        let Some(dismissed) = state.current.take() else {
            debug!("dequeue with no active alert, ignoring");
            return;
        };

        debug!(alert_id = %dismissed.id, "alert dismissed");
        state.current = state.waiting.pop_front();
        if let Some(current) = &state.current {
            debug!(alert_id = %current.id, "alert promoted to current");
        }
        self.publish(&state);
    }

    /// The actively displayed alert, or `None`
    pub fn current_alert(&self) -> Option<AlertRequest> {
        self.lock().current.clone()
    }

    /// True iff the waiting sequence (excluding current) is non-empty
    pub fn has_pending(&self) -> bool {
        !self.lock().waiting.is_empty()
    }

    /// Number of waiting (non-current) alerts
    pub fn queue_len(&self) -> usize {
        self.lock().waiting.len()
    }

    /// Waiting count plus one if an alert is displayed
    pub fn total_alerts(&self) -> usize {
        let state = self.lock();
        usize::from(state.current.is_some()) + state.waiting.len()
    }

    /// Discard all waiting alerts; the current alert stays displayed
    pub fn clear_queue(&self) {
        let mut state = self.lock();
        if state.waiting.is_empty() {
            return;
        }
        let dropped = state.waiting.len();
        state.waiting.clear();
        debug!(dropped = dropped, "waiting alerts cleared");
        self.publish(&state);
    }

    /// Discard the current alert and the entire waiting sequence
    pub fn clear_all(&self) {
        let mut state = self.lock();
        if state.current.is_none() && state.waiting.is_empty() {
            return;
        }
        let dropped = usize::from(state.current.take().is_some()) + state.waiting.len();
        state.waiting.clear();
        debug!(dropped = dropped, "all alerts cleared");
        self.publish(&state);
    }

    /// Subscribe to state transitions
    pub fn subscribe(&self) -> AlertFeed {
        AlertFeed::new(self.publisher.subscribe())
    }

    fn lock(&self) -> MutexGuard<'_, QueueState> {
        // Every mutation completes under the lock, so the inner value is
        // consistent even after a panic in another holder.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn publish(&self, state: &QueueState) {
        // send_replace stores the snapshot even with no live subscribers,
        // so a later subscribe() still observes the latest state.
        self.publisher.send_replace(state.snapshot());
    }
}
