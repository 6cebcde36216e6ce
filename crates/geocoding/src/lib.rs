//! Wayfarer Geocoding Crate
//!
//! This crate provides provider-agnostic forward geocoding for the
//! Wayfarer application.
//!
//! # Overview
//!
//! - [`GeocodeProvider`] - trait for forward-geocoding sources
//! - [`MapboxProvider`] - implementation over the Mapbox Places API
//! - [`DebouncedSearch`] - keystroke-driven search session with a quiet
//!   period and stale-result discard
//!
//! Lookups are issued only after the input has been quiet for
//! [`DEBOUNCE`] and has reached [`MIN_QUERY_LEN`] characters. Provider
//! failures are suppressed; the suggestion list simply stays empty.

use std::time::Duration;

pub mod errors;
pub mod models;
pub mod provider;
pub mod search;

pub use errors::{GeocodeError, Result};
pub use models::GeocodeSuggestion;
pub use provider::{GeocodeProvider, MapboxProvider};
pub use search::DebouncedSearch;

/// Quiet period before a lookup is issued.
pub const DEBOUNCE: Duration = Duration::from_millis(300);

/// Minimum query length before any lookup is issued.
pub const MIN_QUERY_LEN: usize = 3;

/// Maximum number of candidate suggestions requested.
pub const MAX_SUGGESTIONS: usize = 5;
