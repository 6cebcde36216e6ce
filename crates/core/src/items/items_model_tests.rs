//! Tests for saved-item domain models including validation and filtering.

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use crate::errors::{Error, ValidationError};
    use crate::items::{
        BookingStatus, ItemCategory, ItemDraft, ItemFilter, NewItem, SavedItem,
    };

    fn saved_item(title: &str) -> SavedItem {
        SavedItem {
            id: "item-1".to_string(),
            trip_id: "trip-1".to_string(),
            title: title.to_string(),
            url: None,
            description: None,
            notes: None,
            category: None,
            place_name: None,
            latitude: None,
            longitude: None,
            booking_status: BookingStatus::Idea,
            is_anchor: false,
            price_estimate: None,
            currency: "USD".to_string(),
            image_url: None,
            saved_by: None,
            client_ref: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    // ==================== Enum Serialization Tests ====================

    #[test]
    fn test_category_serialization() {
        assert_eq!(
            serde_json::to_string(&ItemCategory::Accommodation).unwrap(),
            "\"accommodation\""
        );
        assert_eq!(
            serde_json::from_str::<ItemCategory>("\"food\"").unwrap(),
            ItemCategory::Food
        );
    }

    #[test]
    fn test_booking_status_serialization() {
        let statuses = vec![
            (BookingStatus::Idea, "\"idea\""),
            (BookingStatus::Researching, "\"researching\""),
            (BookingStatus::Ready, "\"ready\""),
            (BookingStatus::Booked, "\"booked\""),
        ];

        for (status, expected) in statuses {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, expected);
            let parsed: BookingStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, status);
        }
    }

    #[test]
    fn test_booking_status_default() {
        assert_eq!(BookingStatus::default(), BookingStatus::Idea);
    }

    // ==================== Position Tests ====================

    #[test]
    fn test_position_requires_both_coordinates() {
        let mut item = saved_item("Opera House");
        assert!(item.position().is_none());

        item.latitude = Some(-33.8688);
        assert!(item.position().is_none());

        item.longitude = Some(151.2093);
        let position = item.position().unwrap();
        assert_eq!(position.latitude, -33.8688);
        assert_eq!(position.longitude, 151.2093);
    }

    // ==================== Validation Tests ====================

    #[test]
    fn test_validate_rejects_blank_title() {
        let new_item = NewItem {
            title: "   ".to_string(),
            ..Default::default()
        };

        assert!(matches!(
            new_item.validate(),
            Err(Error::Validation(ValidationError::MissingField(_)))
        ));
    }

    #[test]
    fn test_validate_rejects_partial_coordinates() {
        let new_item = NewItem {
            title: "Opera House".to_string(),
            latitude: Some(-33.8688),
            ..Default::default()
        };

        assert!(matches!(
            new_item.validate(),
            Err(Error::Validation(ValidationError::PartialCoordinates))
        ));
    }

    #[test]
    fn test_validate_rejects_out_of_range_coordinates() {
        let bad_latitude = NewItem {
            title: "Nowhere".to_string(),
            latitude: Some(91.0),
            longitude: Some(0.0),
            ..Default::default()
        };
        assert!(matches!(
            bad_latitude.validate(),
            Err(Error::Validation(ValidationError::CoordinateOutOfRange(_)))
        ));

        let bad_longitude = NewItem {
            title: "Nowhere".to_string(),
            latitude: Some(0.0),
            longitude: Some(-200.0),
            ..Default::default()
        };
        assert!(matches!(
            bad_longitude.validate(),
            Err(Error::Validation(ValidationError::CoordinateOutOfRange(_)))
        ));
    }

    #[test]
    fn test_validate_rejects_non_http_links() {
        let new_item = NewItem {
            title: "Opera House".to_string(),
            url: Some("javascript:alert(1)".to_string()),
            ..Default::default()
        };

        assert!(matches!(
            new_item.validate(),
            Err(Error::Validation(ValidationError::InvalidInput(_)))
        ));
    }

    #[test]
    fn test_validate_accepts_a_complete_draft() {
        let new_item = NewItem {
            title: "Sydney Opera House".to_string(),
            url: Some("https://www.sydneyoperahouse.com".to_string()),
            category: Some(ItemCategory::Activity),
            place_name: Some("Sydney, Australia".to_string()),
            latitude: Some(-33.8568),
            longitude: Some(151.2153),
            ..Default::default()
        };

        assert!(new_item.validate().is_ok());
    }

    // ==================== Draft Tests ====================

    #[test]
    fn test_local_record_is_marked_and_stamped() {
        let draft = ItemDraft {
            trip_id: "trip-1".to_string(),
            saved_by: "user-1".to_string(),
            client_ref: "ref-42".to_string(),
            item: NewItem {
                title: "Harbour cruise".to_string(),
                ..Default::default()
            },
        };

        let record = draft.to_local_record();

        assert!(record.is_local());
        assert_eq!(record.id, "local-ref-42");
        assert_eq!(record.trip_id, "trip-1");
        assert_eq!(record.saved_by.as_deref(), Some("user-1"));
        assert_eq!(record.client_ref.as_deref(), Some("ref-42"));
        assert_eq!(record.currency, "USD");
        assert_eq!(record.booking_status, BookingStatus::Idea);
        assert!(!record.is_anchor);
    }

    // ==================== Filter Tests ====================

    #[test]
    fn test_filter_category_is_strict() {
        let mut uncategorized = saved_item("Mystery spot");
        uncategorized.category = None;
        let mut food = saved_item("Quay");
        food.category = Some(ItemCategory::Food);

        let filter = ItemFilter {
            category: Some(ItemCategory::Food),
            search: String::new(),
        };

        assert!(filter.matches(&food));
        // Uncategorized items only show under "all".
        assert!(!filter.matches(&uncategorized));
        let other_filter = ItemFilter {
            category: Some(ItemCategory::Other),
            search: String::new(),
        };
        assert!(!other_filter.matches(&uncategorized));
    }

    #[test]
    fn test_filter_search_covers_title_and_place_name() {
        let mut item = saved_item("Harbour cruise");
        item.place_name = Some("Circular Quay".to_string());

        let by_title = ItemFilter {
            category: None,
            search: "harbour".to_string(),
        };
        let by_place = ItemFilter {
            category: None,
            search: "QUAY".to_string(),
        };
        let miss = ItemFilter {
            category: None,
            search: "louvre".to_string(),
        };

        assert!(by_title.matches(&item));
        assert!(by_place.matches(&item));
        assert!(!miss.matches(&item));
    }

    #[test]
    fn test_saved_item_serializes_camel_case() {
        let item = saved_item("Opera House");
        let json = serde_json::to_value(&item).unwrap();

        assert!(json.get("tripId").is_some());
        assert!(json.get("bookingStatus").is_some());
        assert!(json.get("isAnchor").is_some());
        // Absent correlation tokens are omitted entirely.
        assert!(json.get("clientRef").is_none());
    }
}
