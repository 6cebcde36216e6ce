//! Axis-aligned geographic bounds.

use serde::{Deserialize, Serialize};

use crate::items::GeoPoint;

/// Axis-aligned bounding region over marker positions.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeoBounds {
    pub min_longitude: f64,
    pub min_latitude: f64,
    pub max_longitude: f64,
    pub max_latitude: f64,
}

impl GeoBounds {
    pub fn from_point(point: GeoPoint) -> Self {
        Self {
            min_longitude: point.longitude,
            min_latitude: point.latitude,
            max_longitude: point.longitude,
            max_latitude: point.latitude,
        }
    }

    /// Grow the region to include `point`.
    pub fn extend(&mut self, point: GeoPoint) {
        self.min_longitude = self.min_longitude.min(point.longitude);
        self.min_latitude = self.min_latitude.min(point.latitude);
        self.max_longitude = self.max_longitude.max(point.longitude);
        self.max_latitude = self.max_latitude.max(point.latitude);
    }

    /// Bounds over all points, or `None` for an empty set.
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = GeoPoint>,
    {
        let mut iter = points.into_iter();
        let mut bounds = Self::from_point(iter.next()?);
        for point in iter {
            bounds.extend(point);
        }
        Some(bounds)
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        (self.min_longitude..=self.max_longitude).contains(&point.longitude)
            && (self.min_latitude..=self.max_latitude).contains(&point.latitude)
    }

    pub fn center(&self) -> GeoPoint {
        GeoPoint {
            longitude: (self.min_longitude + self.max_longitude) / 2.0,
            latitude: (self.min_latitude + self.max_latitude) / 2.0,
        }
    }
}
