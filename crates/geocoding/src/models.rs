//! Geocoding domain models.

use serde::{Deserialize, Serialize};

/// One candidate place returned for a free-text query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeocodeSuggestion {
    /// Human-readable place label, e.g. "Sydney, New South Wales, Australia".
    pub place_name: String,
    pub longitude: f64,
    pub latitude: f64,
}
