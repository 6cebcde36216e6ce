//! Live trip-viewing session: collection plus scoped feed subscription.

use std::sync::Arc;

use log::debug;
use tokio::sync::watch;

use super::collection::ItemCollection;
use super::events::{ChangeFeedTrait, FeedSubscription};
use crate::errors::Result;
use crate::items::{ItemDraft, SavedItem};

/// One trip view's live state.
///
/// The session seeds its collection from a snapshot, then attaches the feed.
/// Each [`pump`](Self::pump) applies exactly one event to completion, so a
/// reader between pumps never observes a half-applied event and the
/// collection needs no interior locking. Every applied mutation bumps a
/// revision channel; projections recompute when it changes rather than
/// hooking the raw stream.
///
/// The subscription is released when the session is closed or dropped,
/// whichever comes first.
pub struct TripSession {
    trip_id: String,
    collection: ItemCollection,
    subscription: FeedSubscription,
    revision: watch::Sender<u64>,
}

impl TripSession {
    /// Seed from the snapshot, then attach the event stream.
    pub async fn open(
        feed: Arc<dyn ChangeFeedTrait>,
        trip_id: &str,
        snapshot: Vec<SavedItem>,
    ) -> Result<Self> {
        let mut collection = ItemCollection::new();
        collection.seed(snapshot);
        let subscription = feed.subscribe(trip_id).await?;
        debug!("opened live session for trip {trip_id}");
        let (revision, _) = watch::channel(0);
        Ok(Self {
            trip_id: trip_id.to_string(),
            collection,
            subscription,
            revision,
        })
    }

    pub fn trip_id(&self) -> &str {
        &self.trip_id
    }

    pub fn collection(&self) -> &ItemCollection {
        &self.collection
    }

    /// Observe collection revisions; bumped after every applied mutation.
    pub fn revisions(&self) -> watch::Receiver<u64> {
        self.revision.subscribe()
    }

    /// Wait for the next event and apply it to completion.
    ///
    /// Returns `false` once the feed has closed.
    pub async fn pump(&mut self) -> bool {
        match self.subscription.next_event().await {
            Some(event) => {
                self.collection.apply(event);
                self.bump();
                true
            }
            None => false,
        }
    }

    /// Apply every event already delivered, without waiting. Returns the
    /// number applied.
    pub fn pump_ready(&mut self) -> usize {
        let mut applied = 0;
        while let Some(event) = self.subscription.try_next_event() {
            self.collection.apply(event);
            applied += 1;
        }
        if applied > 0 {
            self.bump();
        }
        applied
    }

    /// Record a local insert ahead of its created event. Returns the
    /// placeholder identity.
    pub fn optimistic_insert(&mut self, draft: &ItemDraft) -> String {
        let id = self.collection.optimistic_insert(draft);
        self.bump();
        id
    }

    /// Release the feed subscription. Idempotent; dropping the session has
    /// the same effect.
    pub fn close(&mut self) {
        if self.subscription.is_active() {
            debug!("closing live session for trip {}", self.trip_id);
        }
        self.subscription.unsubscribe();
    }

    fn bump(&self) {
        self.revision.send_modify(|rev| *rev += 1);
    }
}
