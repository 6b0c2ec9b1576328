//! Input boundary types: coordinates and linear features.
//!
//! A [`LineFeature`] is the unit of input to graph construction: an ordered
//! sequence of 2D coordinates plus an opaque attribute payload. Upstream
//! readers (shapefile, GML, database cursors) produce these; netgraph never
//! parses files itself.

use crate::graph::PropertyMap;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A 2D coordinate.
///
/// Coordinate equality is exact: two endpoints merge into one node only when
/// their bit patterns match. There is no tolerance/snapping distance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Easting / longitude
    pub x: f64,
    /// Northing / latitude
    pub y: f64,
}

impl Coordinate {
    /// Create a coordinate from x/y values.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Exact merge key for endpoint deduplication.
    ///
    /// Uses the raw bit patterns so the key is hashable and two coordinates
    /// merge only on exact equality (NaN payloads included).
    pub fn key(&self) -> (u64, u64) {
        (self.x.to_bits(), self.y.to_bits())
    }

    /// Euclidean distance to another coordinate.
    pub fn distance(&self, other: &Coordinate) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Unique identifier for a feature, carried onto the edges built from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FeatureId(Uuid);

impl FeatureId {
    /// Generate a fresh random feature id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Wrap an existing UUID (e.g., one assigned by an upstream data store).
    pub fn from_uuid(id: Uuid) -> Self {
        Self(id)
    }

    /// The underlying UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for FeatureId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FeatureId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A linear feature: an ordered run of coordinates with attributes.
///
/// Each consecutive coordinate pair becomes one edge during construction.
/// A feature needs at least two coordinates to be usable; shorter features
/// are rejected by the builder at `add()` time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LineFeature {
    /// Identifier carried through to the edges built from this feature
    pub id: FeatureId,
    /// Ordered vertex run (at least two entries for a valid feature)
    pub coordinates: Vec<Coordinate>,
    /// Opaque attribute payload (road class, name, flow direction, ...)
    pub properties: PropertyMap,
}

impl LineFeature {
    /// Create a feature with a freshly generated id.
    pub fn new(coordinates: Vec<Coordinate>, properties: PropertyMap) -> Self {
        Self {
            id: FeatureId::new(),
            coordinates,
            properties,
        }
    }

    /// Create a feature with an explicit id.
    pub fn with_id(id: FeatureId, coordinates: Vec<Coordinate>, properties: PropertyMap) -> Self {
        Self {
            id,
            coordinates,
            properties,
        }
    }

    /// Number of line segments this feature contributes (0 when degenerate).
    pub fn segment_count(&self) -> usize {
        self.coordinates.len().saturating_sub(1)
    }

    /// Total Euclidean length over all segments.
    pub fn length(&self) -> f64 {
        self.coordinates
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coordinate_key_exact_equality() {
        let a = Coordinate::new(1.0, 2.0);
        let b = Coordinate::new(1.0, 2.0);
        let c = Coordinate::new(1.0 + 1e-12, 2.0);

        assert_eq!(a.key(), b.key());
        assert_ne!(a.key(), c.key());
    }

    #[test]
    fn test_coordinate_distance() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(3.0, 4.0);
        assert_eq!(a.distance(&b), 5.0);
    }

    #[test]
    fn test_feature_segment_count() {
        let f = LineFeature::new(
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(1.0, 0.0),
                Coordinate::new(2.0, 0.0),
            ],
            PropertyMap::new(),
        );
        assert_eq!(f.segment_count(), 2);

        let degenerate = LineFeature::new(vec![Coordinate::new(0.0, 0.0)], PropertyMap::new());
        assert_eq!(degenerate.segment_count(), 0);
    }

    #[test]
    fn test_feature_length() {
        let f = LineFeature::new(
            vec![
                Coordinate::new(0.0, 0.0),
                Coordinate::new(3.0, 4.0),
                Coordinate::new(3.0, 5.0),
            ],
            PropertyMap::new(),
        );
        assert_eq!(f.length(), 6.0);
    }

    #[test]
    fn test_feature_ids_are_unique() {
        assert_ne!(FeatureId::new(), FeatureId::new());
    }
}
