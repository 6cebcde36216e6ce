use log::debug;
use std::sync::Arc;
use uuid::Uuid;

use super::items_model::{BookingStatus, ItemDraft, NewItem, SavedItem};
use super::items_traits::{ItemRepositoryTrait, ItemServiceTrait};
use crate::errors::Result;

/// Service originating saved-item writes against the hosted store.
///
/// The authoritative echo of every write arrives through the change feed;
/// this service only validates, stamps, and forwards. Failures propagate to
/// the initiating caller and any optimistic local change is left in place.
pub struct ItemService {
    repository: Arc<dyn ItemRepositoryTrait>,
}

impl ItemService {
    pub fn new(repository: Arc<dyn ItemRepositoryTrait>) -> Self {
        Self { repository }
    }
}

#[async_trait::async_trait]
impl ItemServiceTrait for ItemService {
    async fn load_snapshot(&self, trip_id: &str) -> Result<Vec<SavedItem>> {
        self.repository.list_for_trip(trip_id).await
    }

    async fn add_item(
        &self,
        trip_id: &str,
        saved_by: &str,
        new_item: NewItem,
    ) -> Result<ItemDraft> {
        new_item.validate()?;
        let draft = ItemDraft {
            trip_id: trip_id.to_string(),
            saved_by: saved_by.to_string(),
            client_ref: Uuid::new_v4().to_string(),
            item: new_item,
        };
        debug!(
            "saving item '{}' to trip {} (ref {})",
            draft.item.title, trip_id, draft.client_ref
        );
        self.repository.insert(draft.clone()).await?;
        Ok(draft)
    }

    async fn update_booking_status(&self, item_id: &str, status: BookingStatus) -> Result<()> {
        self.repository.update_booking_status(item_id, status).await
    }

    async fn set_anchor(&self, item_id: &str, is_anchor: bool) -> Result<()> {
        self.repository.set_anchor(item_id, is_anchor).await
    }

    async fn delete_item(&self, item_id: &str) -> Result<()> {
        self.repository.delete(item_id).await
    }
}
