//! Marker-set reconciliation against the rendering surface.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::debug;

use super::bounds::GeoBounds;
use super::style::{MapStyle, MarkerStyle};
use super::surface::{MarkerSelect, MarkerSurface};
use crate::constants::{FIT_BOUNDS_MAX_ZOOM, FIT_BOUNDS_PADDING};
use crate::errors::Result;
use crate::items::{GeoPoint, ItemCategory, SavedItem};

/// Whether the map can be shown at all.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapAvailability {
    /// Surface constructed and ready for markers.
    Ready,
    /// Surface constructed, initial load still running.
    Loading,
    /// Surface could not be constructed; render a static placeholder.
    Unavailable { reason: String },
}

/// Net effect of one [`MarkerReconciler::sync`] call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SyncOutcome {
    pub added: usize,
    pub updated: usize,
    pub removed: usize,
    /// Region the viewport was fitted to, when any marker remained.
    pub fitted: Option<GeoBounds>,
    /// True when reconciliation ran and left no markers; drives the
    /// "no locations yet" overlay.
    pub empty: bool,
}

struct RenderedMarker {
    position: GeoPoint,
    style: MarkerStyle,
}

enum SurfaceState {
    Attached(Box<dyn MarkerSurface>),
    Unavailable(String),
}

/// Owns the identity -> marker mapping and keeps the surface in sync with
/// the filtered item list.
pub struct MarkerReconciler {
    surface: SurfaceState,
    rendered: HashMap<String, RenderedMarker>,
    on_select: MarkerSelect,
}

impl MarkerReconciler {
    pub fn new(surface: Box<dyn MarkerSurface>, on_select: MarkerSelect) -> Self {
        Self {
            surface: SurfaceState::Attached(surface),
            rendered: HashMap::new(),
            on_select,
        }
    }

    /// Degraded reconciler for a surface that failed to initialize (for
    /// example a missing access token). Every operation is a no-op; the
    /// caller renders a static placeholder.
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            surface: SurfaceState::Unavailable(reason.into()),
            rendered: HashMap::new(),
            on_select: Arc::new(|_| {}),
        }
    }

    pub fn availability(&self) -> MapAvailability {
        match &self.surface {
            SurfaceState::Attached(surface) if surface.is_ready() => MapAvailability::Ready,
            SurfaceState::Attached(_) => MapAvailability::Loading,
            SurfaceState::Unavailable(reason) => MapAvailability::Unavailable {
                reason: reason.clone(),
            },
        }
    }

    /// Reconcile the rendered marker set against `items`.
    ///
    /// Each call is a full reconciliation against the previously rendered
    /// state, not an accumulation of diffs, so stale markers cannot survive
    /// a call and repeating a call with the same input issues no marker
    /// operations. Items without a position are skipped. Before the surface
    /// is ready, or when it is unavailable, nothing is issued.
    pub fn sync<'a, I>(&mut self, items: I) -> Result<SyncOutcome>
    where
        I: IntoIterator<Item = &'a SavedItem>,
    {
        let surface = match &mut self.surface {
            SurfaceState::Attached(surface) if surface.is_ready() => surface,
            SurfaceState::Attached(_) => {
                debug!("map surface not ready, skipping marker sync");
                return Ok(SyncOutcome::default());
            }
            SurfaceState::Unavailable(_) => return Ok(SyncOutcome::default()),
        };

        let desired: Vec<(&SavedItem, GeoPoint)> = items
            .into_iter()
            .filter_map(|item| item.position().map(|position| (item, position)))
            .collect();

        let mut outcome = SyncOutcome::default();

        // Markers rendered before but absent now.
        let desired_ids: HashSet<&str> = desired.iter().map(|(item, _)| item.id.as_str()).collect();
        let stale: Vec<String> = self
            .rendered
            .keys()
            .filter(|id| !desired_ids.contains(id.as_str()))
            .cloned()
            .collect();
        for id in stale {
            surface.remove_marker(&id)?;
            self.rendered.remove(&id);
            outcome.removed += 1;
        }

        for (item, position) in &desired {
            let style = MarkerStyle::for_item(item);
            match self.rendered.get_mut(&item.id) {
                Some(marker) => {
                    if marker.position != *position || marker.style != style {
                        surface.update_marker(&item.id, *position, &style)?;
                        marker.position = *position;
                        marker.style = style;
                        outcome.updated += 1;
                    }
                }
                None => {
                    surface.add_marker(&item.id, *position, &style, Arc::clone(&self.on_select))?;
                    self.rendered.insert(
                        item.id.clone(),
                        RenderedMarker {
                            position: *position,
                            style,
                        },
                    );
                    outcome.added += 1;
                }
            }
        }

        if self.rendered.is_empty() {
            // Leave the viewport where it was; the caller shows the overlay.
            outcome.empty = true;
        } else if let Some(bounds) =
            GeoBounds::from_points(self.rendered.values().map(|marker| marker.position))
        {
            surface.fit_bounds(bounds, FIT_BOUNDS_PADDING, FIT_BOUNDS_MAX_ZOOM)?;
            outcome.fitted = Some(bounds);
        }

        Ok(outcome)
    }

    /// Switch the basemap style. A no-op on an unavailable surface.
    pub fn set_style(&mut self, style: MapStyle) -> Result<()> {
        match &mut self.surface {
            SurfaceState::Attached(surface) => surface.set_style(style),
            SurfaceState::Unavailable(_) => Ok(()),
        }
    }

    /// Located-item tallies per category for the map legend.
    pub fn legend_counts(&self) -> HashMap<ItemCategory, usize> {
        let mut counts = HashMap::new();
        for marker in self.rendered.values() {
            *counts
                .entry(marker.style.category.unwrap_or(ItemCategory::Other))
                .or_insert(0) += 1;
        }
        counts
    }

    pub fn marker_count(&self) -> usize {
        self.rendered.len()
    }

    pub fn has_marker(&self, id: &str) -> bool {
        self.rendered.contains_key(id)
    }
}
