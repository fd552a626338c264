//! Event channel between the session and the editor host.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use rustc_hash::FxHashMap;
use tokio::sync::mpsc;

use crate::compiler::{Diagnostic, Notification};

/// Something the editor host should act on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionEvent {
    /// Replace the diagnostics shown for a document.
    Diagnostics {
        key: Arc<str>,
        diagnostics: Vec<Diagnostic>,
    },
    /// Show a message to the user.
    Notification {
        key: Arc<str>,
        notification: Notification,
    },
}

struct Subscribers<E> {
    senders: Mutex<FxHashMap<u64, mpsc::UnboundedSender<E>>>,
    next_id: AtomicU64,
}

/// Broadcasts events to every live subscription.
pub struct EventBus<E> {
    subscribers: Arc<Subscribers<E>>,
}

impl<E: Clone> EventBus<E> {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Subscribers {
                senders: Mutex::new(FxHashMap::default()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Start receiving events. Dropping the subscription unsubscribes.
    pub fn subscribe(&self) -> Subscription<E> {
        let id = self.subscribers.next_id.fetch_add(1, Ordering::Relaxed);
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscribers.senders.lock().insert(id, sender);
        Subscription {
            id,
            receiver,
            subscribers: Arc::downgrade(&self.subscribers),
        }
    }

    /// Send `event` to every subscriber.
    pub fn publish(&self, event: E) {
        let mut senders = self.subscribers.senders.lock();
        senders.retain(|_, sender| sender.send(event.clone()).is_ok());
    }

    pub fn subscriber_count(&self) -> usize {
        self.subscribers.senders.lock().len()
    }
}

impl<E: Clone> Default for EventBus<E> {
    fn default() -> Self {
        Self::new()
    }
}

/// A handle receiving events from an [`EventBus`].
pub struct Subscription<E> {
    id: u64,
    receiver: mpsc::UnboundedReceiver<E>,
    subscribers: std::sync::Weak<Subscribers<E>>,
}

impl<E> Subscription<E> {
    /// Wait for the next event. `None` once the bus is gone.
    pub async fn recv(&mut self) -> Option<E> {
        self.receiver.recv().await
    }

    /// The next event, if one is already queued.
    pub fn try_recv(&mut self) -> Option<E> {
        self.receiver.try_recv().ok()
    }
}

impl<E> Drop for Subscription<E> {
    fn drop(&mut self) {
        if let Some(subscribers) = self.subscribers.upgrade() {
            subscribers.senders.lock().remove(&self.id);
        }
    }
}
