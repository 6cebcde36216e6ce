//! Saved item domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_CURRENCY, LOCAL_ID_PREFIX};
use crate::errors::{Result, ValidationError};

/// Category tag for a saved place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ItemCategory {
    Accommodation,
    Activity,
    Transport,
    Food,
    Other,
}

/// How far along a saved item is toward being reserved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Idea,
    Researching,
    Ready,
    Booked,
}

/// A fully specified geographic position.
///
/// Items never carry a partial position: [`SavedItem::position`] yields one
/// only when both coordinates are present, and the write path rejects drafts
/// with only one of the two.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

/// Domain model representing a place saved to a trip.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SavedItem {
    pub id: String,
    pub trip_id: String,
    pub title: String,
    pub url: Option<String>,
    pub description: Option<String>,
    pub notes: Option<String>,
    pub category: Option<ItemCategory>,
    pub place_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub booking_status: BookingStatus,
    pub is_anchor: bool,
    pub price_estimate: Option<f64>,
    pub currency: String,
    pub image_url: Option<String>,
    pub saved_by: Option<String>,
    /// Client-generated correlation token, echoed back on the created event
    /// for the record. See [`ItemDraft`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_ref: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavedItem {
    /// The item's position, present only when both coordinates are set.
    pub fn position(&self) -> Option<GeoPoint> {
        match (self.longitude, self.latitude) {
            (Some(longitude), Some(latitude)) => Some(GeoPoint {
                longitude,
                latitude,
            }),
            _ => None,
        }
    }

    /// Whether this is an optimistic local record awaiting its created event.
    pub fn is_local(&self) -> bool {
        self.id.starts_with(LOCAL_ID_PREFIX)
    }
}

/// Input model for saving a new place.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct NewItem {
    pub title: String,
    pub url: Option<String>,
    pub category: Option<ItemCategory>,
    pub place_name: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub notes: Option<String>,
    pub price_estimate: Option<f64>,
    pub currency: Option<String>,
}

impl NewItem {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::MissingField("title".to_string()).into());
        }
        if let Some(url) = self.url.as_deref() {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ValidationError::InvalidInput(format!(
                    "unsupported link scheme: {url}"
                ))
                .into());
            }
        }
        match (self.latitude, self.longitude) {
            (Some(_), None) | (None, Some(_)) => Err(ValidationError::PartialCoordinates.into()),
            (Some(latitude), Some(longitude)) => {
                if !(-90.0..=90.0).contains(&latitude) {
                    return Err(ValidationError::CoordinateOutOfRange(format!(
                        "latitude {latitude}"
                    ))
                    .into());
                }
                if !(-180.0..=180.0).contains(&longitude) {
                    return Err(ValidationError::CoordinateOutOfRange(format!(
                        "longitude {longitude}"
                    ))
                    .into());
                }
                Ok(())
            }
            (None, None) => Ok(()),
        }
    }
}

/// A validated insert payload, stamped with its trip, author, and a
/// client-generated correlation token.
///
/// The token travels with the record through the backend and back out on the
/// created event, which is how the feed reconciler retires the optimistic
/// placeholder for the same logical insert.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemDraft {
    pub trip_id: String,
    pub saved_by: String,
    pub client_ref: String,
    #[serde(flatten)]
    pub item: NewItem,
}

impl ItemDraft {
    /// Best-effort local record shown until the authoritative created event
    /// lands. The placeholder identity is derived from the correlation token,
    /// so repeating the call yields the same record.
    pub fn to_local_record(&self) -> SavedItem {
        let now = Utc::now();
        SavedItem {
            id: format!("{LOCAL_ID_PREFIX}{}", self.client_ref),
            trip_id: self.trip_id.clone(),
            title: self.item.title.clone(),
            url: self.item.url.clone(),
            description: None,
            notes: self.item.notes.clone(),
            category: self.item.category,
            place_name: self.item.place_name.clone(),
            latitude: self.item.latitude,
            longitude: self.item.longitude,
            booking_status: BookingStatus::default(),
            is_anchor: false,
            price_estimate: self.item.price_estimate,
            currency: self
                .item
                .currency
                .clone()
                .unwrap_or_else(|| DEFAULT_CURRENCY.to_string()),
            image_url: None,
            saved_by: Some(self.saved_by.clone()),
            client_ref: Some(self.client_ref.clone()),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Category and search filters applied to a trip's item list.
///
/// The category filter is a strict equality test: an uncategorized item
/// matches no category filter and only shows under "all".
#[derive(Debug, Clone, Default)]
pub struct ItemFilter {
    pub category: Option<ItemCategory>,
    pub search: String,
}

impl ItemFilter {
    pub fn matches(&self, item: &SavedItem) -> bool {
        if let Some(category) = self.category {
            if item.category != Some(category) {
                return false;
            }
        }
        let needle = self.search.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        item.title.to_lowercase().contains(&needle)
            || item
                .place_name
                .as_deref()
                .is_some_and(|place| place.to_lowercase().contains(&needle))
    }
}
