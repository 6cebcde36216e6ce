//! Marker and basemap styling derived from item state.

use serde::{Deserialize, Serialize};

use crate::items::{BookingStatus, ItemCategory, SavedItem};

/// Basemap style, switchable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum MapStyle {
    #[default]
    Streets,
    Satellite,
    Outdoors,
}

impl MapStyle {
    /// Style sheet URL understood by the rendering surface.
    pub fn url(&self) -> &'static str {
        match self {
            MapStyle::Streets => "mapbox://styles/mapbox/streets-v12",
            MapStyle::Satellite => "mapbox://styles/mapbox/satellite-streets-v12",
            MapStyle::Outdoors => "mapbox://styles/mapbox/outdoors-v12",
        }
    }
}

/// Marker color for a category; uncategorized items render as `Other`.
pub fn category_color(category: Option<ItemCategory>) -> &'static str {
    match category.unwrap_or(ItemCategory::Other) {
        ItemCategory::Accommodation => "#3B82F6",
        ItemCategory::Activity => "#10B981",
        ItemCategory::Transport => "#F59E0B",
        ItemCategory::Food => "#EF4444",
        ItemCategory::Other => "#8B5CF6",
    }
}

/// Visual attributes of one marker, including its popup content.
///
/// Equality doubles as the update-needed check: two equal styles render
/// identically.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerStyle {
    pub color: &'static str,
    pub is_anchor: bool,
    pub title: String,
    pub place_name: Option<String>,
    pub category: Option<ItemCategory>,
    pub booking_status: BookingStatus,
}

impl MarkerStyle {
    pub fn for_item(item: &SavedItem) -> Self {
        Self {
            color: category_color(item.category),
            is_anchor: item.is_anchor,
            title: item.title.clone(),
            place_name: item.place_name.clone(),
            category: item.category,
            booking_status: item.booking_status,
        }
    }
}
