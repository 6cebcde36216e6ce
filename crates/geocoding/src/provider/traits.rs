//! Geocoding provider trait definition.

use async_trait::async_trait;

use crate::errors::Result;
use crate::models::GeocodeSuggestion;

/// Trait for forward-geocoding sources.
///
/// Implement this trait to add support for a new geocoding service.
#[async_trait]
pub trait GeocodeProvider: Send + Sync {
    /// Unique identifier for this provider.
    ///
    /// Should be a constant string like "MAPBOX". Used for logging.
    fn id(&self) -> &'static str;

    /// Resolve free text into up to `limit` candidate places, best first.
    async fn forward(&self, query: &str, limit: usize) -> Result<Vec<GeocodeSuggestion>>;
}
