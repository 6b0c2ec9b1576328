//! Build policies: the pluggable node/edge factory seam.
//!
//! The construction algorithm never changes; what varies between graph
//! flavors is the payload (and optional weight) attached to each node and
//! edge. A [`BuildPolicy`] supplies exactly that, replacing a subclass
//! hierarchy of builder variants with one injected strategy.

use crate::feature::{Coordinate, LineFeature};
use crate::graph::PropertyMap;

/// Strategy producing node/edge payloads during graph construction.
pub trait BuildPolicy {
    /// Payload for a node created at `coordinate`.
    ///
    /// Called once per distinct coordinate, when the node is first created.
    fn node_properties(&self, coordinate: &Coordinate) -> PropertyMap;

    /// Payload and optional weight for the edge built from segment
    /// `segment` (0-based) of `feature`.
    fn edge_properties(
        &self,
        feature: &LineFeature,
        segment: usize,
    ) -> (PropertyMap, Option<f64>);
}

/// Default policy: edges carry only the originating feature id, no weight.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinePolicy;

impl BuildPolicy for LinePolicy {
    fn node_properties(&self, _coordinate: &Coordinate) -> PropertyMap {
        PropertyMap::new()
    }

    fn edge_properties(
        &self,
        feature: &LineFeature,
        segment: usize,
    ) -> (PropertyMap, Option<f64>) {
        let props = PropertyMap::new()
            .with("feature", feature.id.to_string())
            .with("segment", segment as i64);
        (props, None)
    }
}

/// Network policy: like [`LinePolicy`], but every edge is weighted by the
/// Euclidean length of its segment, ready for shortest-path analysis.
#[derive(Debug, Clone, Copy, Default)]
pub struct NetworkPolicy;

impl BuildPolicy for NetworkPolicy {
    fn node_properties(&self, _coordinate: &Coordinate) -> PropertyMap {
        PropertyMap::new()
    }

    fn edge_properties(
        &self,
        feature: &LineFeature,
        segment: usize,
    ) -> (PropertyMap, Option<f64>) {
        let props = PropertyMap::new()
            .with("feature", feature.id.to_string())
            .with("segment", segment as i64);

        let length = feature
            .coordinates
            .get(segment)
            .zip(feature.coordinates.get(segment + 1))
            .map(|(a, b)| a.distance(b));

        (props, length)
    }
}
