/// Pixel padding applied when fitting the viewport to the marker set
pub const FIT_BOUNDS_PADDING: u32 = 50;

/// Zoom ceiling applied when fitting, so a single marker is not over-zoomed
pub const FIT_BOUNDS_MAX_ZOOM: f64 = 12.0;

/// Default viewport center (longitude, latitude) before any fit
pub const DEFAULT_MAP_CENTER: (f64, f64) = (133.7751, -25.2744);

/// Default viewport zoom before any fit
pub const DEFAULT_MAP_ZOOM: f64 = 4.0;

/// Currency assumed for price estimates entered without one
pub const DEFAULT_CURRENCY: &str = "USD";

/// Identity prefix for optimistic local records awaiting their created event
pub const LOCAL_ID_PREFIX: &str = "local-";
