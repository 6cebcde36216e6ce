//! Marker-set reconciliation for the map view.
//!
//! The rendering surface (a mapping library owning the actual marker
//! primitives) sits behind [`MarkerSurface`]; [`MarkerReconciler`] diffs the
//! filtered item list against the previously rendered marker set and issues
//! the minimal add/update/remove operations, then refits the viewport.

mod bounds;
mod reconciler;
mod style;
mod surface;

pub use bounds::*;
pub use reconciler::*;
pub use style::*;
pub use surface::*;
