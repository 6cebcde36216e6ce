//! Rendering surface seam.

use std::sync::Arc;

use super::bounds::GeoBounds;
use super::style::{MapStyle, MarkerStyle};
use crate::errors::Result;
use crate::items::GeoPoint;

/// Callback invoked with an item identity when its marker is clicked.
pub type MarkerSelect = Arc<dyn Fn(&str) + Send + Sync>;

/// Stateful rendering surface owning the marker primitives.
///
/// Implementations wrap a concrete mapping library. The reconciler issues no
/// marker operations until [`is_ready`](Self::is_ready) reports true, which
/// the surface should flip once its initial load completes.
pub trait MarkerSurface: Send {
    fn add_marker(
        &mut self,
        id: &str,
        position: GeoPoint,
        style: &MarkerStyle,
        on_select: MarkerSelect,
    ) -> Result<()>;

    /// Restyle or move an existing marker without destroying it.
    fn update_marker(&mut self, id: &str, position: GeoPoint, style: &MarkerStyle) -> Result<()>;

    fn remove_marker(&mut self, id: &str) -> Result<()>;

    /// Fit the viewport to `bounds` with pixel padding, never zooming past
    /// `max_zoom`.
    fn fit_bounds(&mut self, bounds: GeoBounds, padding: u32, max_zoom: f64) -> Result<()>;

    fn set_style(&mut self, style: MapStyle) -> Result<()>;

    /// True once the surface's initial load has completed.
    fn is_ready(&self) -> bool;
}
