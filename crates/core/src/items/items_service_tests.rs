//! Tests for the saved-item service.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;

    use crate::errors::{Error, Result, StoreError};
    use crate::items::{
        BookingStatus, ItemDraft, ItemRepositoryTrait, ItemService, ItemServiceTrait, NewItem,
        SavedItem,
    };

    #[derive(Default)]
    struct FakeItemRepository {
        inserts: Mutex<Vec<ItemDraft>>,
        status_updates: Mutex<Vec<(String, BookingStatus)>>,
        anchor_updates: Mutex<Vec<(String, bool)>>,
        deletes: Mutex<Vec<String>>,
        insert_attempts: AtomicUsize,
        reject_writes: bool,
    }

    impl FakeItemRepository {
        fn rejecting() -> Self {
            Self {
                reject_writes: true,
                ..Default::default()
            }
        }
    }

    #[async_trait]
    impl ItemRepositoryTrait for FakeItemRepository {
        async fn list_for_trip(&self, _trip_id: &str) -> Result<Vec<SavedItem>> {
            Ok(Vec::new())
        }

        async fn insert(&self, draft: ItemDraft) -> Result<()> {
            self.insert_attempts.fetch_add(1, Ordering::SeqCst);
            if self.reject_writes {
                return Err(StoreError::Rejected("row level policy".to_string()).into());
            }
            self.inserts.lock().unwrap().push(draft);
            Ok(())
        }

        async fn update_booking_status(&self, item_id: &str, status: BookingStatus) -> Result<()> {
            self.status_updates
                .lock()
                .unwrap()
                .push((item_id.to_string(), status));
            Ok(())
        }

        async fn set_anchor(&self, item_id: &str, is_anchor: bool) -> Result<()> {
            self.anchor_updates
                .lock()
                .unwrap()
                .push((item_id.to_string(), is_anchor));
            Ok(())
        }

        async fn delete(&self, item_id: &str) -> Result<()> {
            self.deletes.lock().unwrap().push(item_id.to_string());
            Ok(())
        }
    }

    fn draft_input(title: &str) -> NewItem {
        NewItem {
            title: title.to_string(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn add_item_stamps_trip_author_and_token() {
        let repository = Arc::new(FakeItemRepository::default());
        let service = ItemService::new(repository.clone());

        let draft = service
            .add_item("trip-1", "user-1", draft_input("Opera House"))
            .await
            .unwrap();

        assert_eq!(draft.trip_id, "trip-1");
        assert_eq!(draft.saved_by, "user-1");
        assert!(!draft.client_ref.is_empty());

        let inserts = repository.inserts.lock().unwrap();
        assert_eq!(inserts.len(), 1);
        assert_eq!(inserts[0].client_ref, draft.client_ref);
    }

    #[tokio::test]
    async fn add_item_validates_before_touching_the_store() {
        let repository = Arc::new(FakeItemRepository::default());
        let service = ItemService::new(repository.clone());

        let result = service.add_item("trip-1", "user-1", draft_input("  ")).await;

        assert!(matches!(result, Err(Error::Validation(_))));
        assert_eq!(repository.insert_attempts.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn write_failures_surface_without_retry() {
        let repository = Arc::new(FakeItemRepository::rejecting());
        let service = ItemService::new(repository.clone());

        let result = service
            .add_item("trip-1", "user-1", draft_input("Opera House"))
            .await;

        assert!(matches!(result, Err(Error::Store(StoreError::Rejected(_)))));
        assert_eq!(repository.insert_attempts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn targeted_updates_pass_through() {
        let repository = Arc::new(FakeItemRepository::default());
        let service = ItemService::new(repository.clone());

        service
            .update_booking_status("item-1", BookingStatus::Booked)
            .await
            .unwrap();
        service.set_anchor("item-1", true).await.unwrap();
        service.delete_item("item-2").await.unwrap();

        assert_eq!(
            *repository.status_updates.lock().unwrap(),
            vec![("item-1".to_string(), BookingStatus::Booked)]
        );
        assert_eq!(
            *repository.anchor_updates.lock().unwrap(),
            vec![("item-1".to_string(), true)]
        );
        assert_eq!(*repository.deletes.lock().unwrap(), vec!["item-2".to_string()]);
    }
}
