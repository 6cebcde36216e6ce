use crate::errors::Result;
use crate::items::items_model::{BookingStatus, ItemDraft, NewItem, SavedItem};
use async_trait::async_trait;

/// Trait for saved-item store operations, implemented by the hosted backend
/// client. Writes are not retried here; a failure is surfaced to the
/// initiating caller.
#[async_trait]
pub trait ItemRepositoryTrait: Send + Sync {
    async fn list_for_trip(&self, trip_id: &str) -> Result<Vec<SavedItem>>;
    async fn insert(&self, draft: ItemDraft) -> Result<()>;
    async fn update_booking_status(&self, item_id: &str, status: BookingStatus) -> Result<()>;
    async fn set_anchor(&self, item_id: &str, is_anchor: bool) -> Result<()>;
    async fn delete(&self, item_id: &str) -> Result<()>;
}

/// Trait for saved-item service operations
#[async_trait]
pub trait ItemServiceTrait: Send + Sync {
    /// Load the full snapshot a trip session is seeded from.
    async fn load_snapshot(&self, trip_id: &str) -> Result<Vec<SavedItem>>;

    /// Validate and persist a new item. Returns the stamped draft so the
    /// caller can record an optimistic placeholder while the created event
    /// is in flight.
    async fn add_item(&self, trip_id: &str, saved_by: &str, new_item: NewItem)
        -> Result<ItemDraft>;

    async fn update_booking_status(&self, item_id: &str, status: BookingStatus) -> Result<()>;

    async fn set_anchor(&self, item_id: &str, is_anchor: bool) -> Result<()>;

    async fn delete_item(&self, item_id: &str) -> Result<()>;
}
