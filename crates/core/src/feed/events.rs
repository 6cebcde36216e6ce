//! Change feed events and the subscription handle.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::sync::mpsc;

use crate::errors::Result;
use crate::items::SavedItem;

/// A single change notification for a trip's saved items.
///
/// Events arrive in delivery order, which is not guaranteed to match causal
/// order; each one is authoritative for its record at the time it arrives.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ChangeEvent {
    Created { item: SavedItem },
    Updated { item: SavedItem },
    Deleted { id: String },
}

impl ChangeEvent {
    /// Identity of the record the event refers to.
    pub fn record_id(&self) -> &str {
        match self {
            ChangeEvent::Created { item } | ChangeEvent::Updated { item } => &item.id,
            ChangeEvent::Deleted { id } => id,
        }
    }
}

/// Source of change events, implemented by the hosted backend client.
#[async_trait]
pub trait ChangeFeedTrait: Send + Sync {
    /// Open a per-trip channel delivering events for that trip's items.
    async fn subscribe(&self, trip_id: &str) -> Result<FeedSubscription>;
}

/// Handle on an active feed channel.
///
/// [`unsubscribe`](Self::unsubscribe) may be called any number of times;
/// dropping the handle tears the channel down as well, so a session cannot
/// leak its subscription on any exit path.
pub struct FeedSubscription {
    events: mpsc::UnboundedReceiver<ChangeEvent>,
    on_unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl FeedSubscription {
    pub fn new(
        events: mpsc::UnboundedReceiver<ChangeEvent>,
        on_unsubscribe: impl FnOnce() + Send + 'static,
    ) -> Self {
        Self {
            events,
            on_unsubscribe: Some(Box::new(on_unsubscribe)),
        }
    }

    /// Next event, or `None` once the channel has closed.
    pub async fn next_event(&mut self) -> Option<ChangeEvent> {
        self.events.recv().await
    }

    /// Non-blocking variant of [`next_event`](Self::next_event).
    pub fn try_next_event(&mut self) -> Option<ChangeEvent> {
        self.events.try_recv().ok()
    }

    /// Whether delivery has not been stopped yet.
    pub fn is_active(&self) -> bool {
        self.on_unsubscribe.is_some()
    }

    /// Stop delivery. Idempotent.
    pub fn unsubscribe(&mut self) {
        if let Some(cancel) = self.on_unsubscribe.take() {
            cancel();
        }
        self.events.close();
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}
