//! Debounced geocoding search session.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::time;
use tracing::debug;

use crate::models::GeocodeSuggestion;
use crate::provider::GeocodeProvider;
use crate::{DEBOUNCE, MAX_SUGGESTIONS, MIN_QUERY_LEN};

/// Keystroke-driven search over a geocoding provider.
///
/// Each input bumps a generation counter and schedules a lookup after the
/// quiet period. A newer input supersedes any scheduled or in-flight lookup;
/// a superseded lookup's result is discarded when it resolves, so the
/// published suggestions always belong to the latest query. Queries below
/// the minimum length clear the suggestions immediately, and provider
/// failures leave the list empty.
pub struct DebouncedSearch {
    provider: Arc<dyn GeocodeProvider>,
    generation: Arc<AtomicU64>,
    suggestions: Arc<watch::Sender<Vec<GeocodeSuggestion>>>,
    debounce: Duration,
    min_query_len: usize,
    limit: usize,
}

impl DebouncedSearch {
    pub fn new(provider: Arc<dyn GeocodeProvider>) -> Self {
        Self::with_debounce(provider, DEBOUNCE)
    }

    /// Same as [`new`](Self::new) with a custom quiet period.
    pub fn with_debounce(provider: Arc<dyn GeocodeProvider>, debounce: Duration) -> Self {
        let (tx, _) = watch::channel(Vec::new());
        Self {
            provider,
            generation: Arc::new(AtomicU64::new(0)),
            suggestions: Arc::new(tx),
            debounce,
            min_query_len: MIN_QUERY_LEN,
            limit: MAX_SUGGESTIONS,
        }
    }

    /// Current suggestions; replaced whenever a lookup lands.
    pub fn suggestions(&self) -> watch::Receiver<Vec<GeocodeSuggestion>> {
        self.suggestions.subscribe()
    }

    /// Feed the latest input text. Returns immediately; the lookup, if any,
    /// runs on a background task after the quiet period.
    pub fn on_input(&self, query: &str) {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        let query = query.trim().to_string();

        if query.chars().count() < self.min_query_len {
            self.suggestions.send_replace(Vec::new());
            return;
        }

        let provider = Arc::clone(&self.provider);
        let generations = Arc::clone(&self.generation);
        let suggestions = Arc::clone(&self.suggestions);
        let debounce = self.debounce;
        let limit = self.limit;

        tokio::spawn(async move {
            time::sleep(debounce).await;
            if generations.load(Ordering::SeqCst) != generation {
                // Superseded during the quiet period.
                return;
            }
            let result = provider.forward(&query, limit).await;
            if generations.load(Ordering::SeqCst) != generation {
                debug!(query, "discarding superseded geocoding result");
                return;
            }
            match result {
                Ok(found) => {
                    suggestions.send_replace(found);
                }
                Err(err) => {
                    debug!(query, error = %err, "geocoding lookup failed");
                    suggestions.send_replace(Vec::new());
                }
            }
        });
    }
}
