//! Mapbox forward-geocoding provider.
//!
//! Queries the Mapbox Places API via
//! /geocoding/v5/mapbox.places/{query}.json.
//!
//! API documentation: https://docs.mapbox.com/api/search/geocoding/

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::errors::{GeocodeError, Result};
use crate::models::GeocodeSuggestion;
use crate::provider::GeocodeProvider;

const BASE_URL: &str = "https://api.mapbox.com/geocoding/v5/mapbox.places";
const PROVIDER_ID: &str = "MAPBOX";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Environment variable holding the access token.
pub const ACCESS_TOKEN_ENV: &str = "MAPBOX_ACCESS_TOKEN";

// ============================================================================
// API Response Structures
// ============================================================================

/// Response from the places endpoint
#[derive(Debug, Deserialize)]
struct PlacesResponse {
    #[serde(default)]
    features: Vec<Feature>,
}

/// Individual feature in a geocoding response
#[derive(Debug, Deserialize)]
struct Feature {
    /// Full display name
    place_name: String,
    /// [longitude, latitude]
    center: [f64; 2],
}

pub struct MapboxProvider {
    client: Client,
    access_token: String,
}

impl MapboxProvider {
    /// Create a provider from an access token. An empty token is a
    /// configuration error reported to the caller, which renders a static
    /// placeholder instead of the location field's suggestions.
    pub fn new(access_token: impl Into<String>) -> Result<Self> {
        let access_token = access_token.into();
        if access_token.trim().is_empty() {
            return Err(GeocodeError::MissingAccessToken);
        }
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            access_token,
        })
    }

    /// Build from the conventional [`ACCESS_TOKEN_ENV`] environment variable.
    pub fn from_env() -> Result<Self> {
        Self::new(std::env::var(ACCESS_TOKEN_ENV).unwrap_or_default())
    }
}

#[async_trait]
impl GeocodeProvider for MapboxProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn forward(&self, query: &str, limit: usize) -> Result<Vec<GeocodeSuggestion>> {
        let url = format!(
            "{BASE_URL}/{}.json?access_token={}&limit={limit}",
            urlencoding::encode(query),
            self.access_token,
        );

        debug!(provider = PROVIDER_ID, query, "forward geocoding request");

        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(GeocodeError::Status(status.as_u16()));
        }

        let payload: PlacesResponse = response
            .json()
            .await
            .map_err(|err| GeocodeError::InvalidResponse(err.to_string()))?;

        Ok(payload
            .features
            .into_iter()
            .take(limit)
            .map(|feature| GeocodeSuggestion {
                place_name: feature.place_name,
                longitude: feature.center[0],
                latitude: feature.center[1],
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_places_response() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "id": "place.123",
                    "place_name": "Sydney, New South Wales, Australia",
                    "center": [151.2093, -33.8688]
                }
            ]
        }"#;

        let payload: PlacesResponse = serde_json::from_str(json).unwrap();
        assert_eq!(payload.features.len(), 1);
        assert_eq!(
            payload.features[0].place_name,
            "Sydney, New South Wales, Australia"
        );
        assert_eq!(payload.features[0].center, [151.2093, -33.8688]);
    }

    #[test]
    fn parses_empty_response() {
        let payload: PlacesResponse =
            serde_json::from_str(r#"{"type":"FeatureCollection"}"#).unwrap();
        assert!(payload.features.is_empty());
    }

    #[test]
    fn blank_access_token_is_a_configuration_error() {
        assert!(matches!(
            MapboxProvider::new("  "),
            Err(GeocodeError::MissingAccessToken)
        ));
    }
}
