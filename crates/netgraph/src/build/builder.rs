//! Incremental graph construction from linear features.

use super::policy::{BuildPolicy, LinePolicy, NetworkPolicy};
use crate::error::{GraphError, Result};
use crate::feature::{Coordinate, LineFeature};
use crate::graph::{Edge, EdgeId, Graph, Node, NodeId, Orientation};
use log::{debug, info, trace};
use std::collections::HashMap;

/// Incrementally converts a stream of linear features into a [`Graph`].
///
/// For each consecutive coordinate pair of an added feature, the builder
/// resolves or creates the endpoint nodes (merging exactly-equal
/// coordinates into a single node) and creates an edge between them.
/// Duplicate edges between the same node pair are kept as parallel edges.
///
/// The coordinate-to-node merge map is working state only; [`build`]
/// discards it and hands over the finished graph.
///
/// [`build`]: GraphBuilder::build
pub struct GraphBuilder {
    graph: Graph,
    policy: Box<dyn BuildPolicy>,
    // Working state: exact coordinate bit-key -> node, dropped by build()
    coordinate_nodes: HashMap<(u64, u64), NodeId>,
    node_counter: NodeId,
    edge_counter: EdgeId,
}

impl GraphBuilder {
    /// Create a builder with the default [`LinePolicy`].
    pub fn new(orientation: Orientation) -> Self {
        Self::with_policy(orientation, Box::new(LinePolicy))
    }

    /// Create a builder whose edges are weighted by segment length.
    pub fn network(orientation: Orientation) -> Self {
        Self::with_policy(orientation, Box::new(NetworkPolicy))
    }

    /// Create a builder with an explicit node/edge payload policy.
    pub fn with_policy(orientation: Orientation, policy: Box<dyn BuildPolicy>) -> Self {
        Self {
            graph: Graph::new(orientation),
            policy,
            coordinate_nodes: HashMap::new(),
            node_counter: 0,
            edge_counter: 0,
        }
    }

    /// Add a linear feature, creating one edge per segment.
    ///
    /// Endpoint coordinates that exactly match an earlier endpoint resolve
    /// to the existing node; otherwise a new node is created. Returns the
    /// created edge ids in segment order.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::InvalidFeature`] if the feature has fewer than
    /// two coordinates. Rejection happens before any mutation, so a bad
    /// feature never corrupts graph state built from earlier features.
    pub fn add(&mut self, feature: &LineFeature) -> Result<Vec<EdgeId>> {
        if feature.coordinates.len() < 2 {
            return Err(GraphError::invalid_feature(format!(
                "feature {} has {} coordinate(s), need at least 2",
                feature.id,
                feature.coordinates.len()
            )));
        }

        debug!(
            "Adding feature {}: {} segment(s)",
            feature.id,
            feature.segment_count()
        );

        let mut edge_ids = Vec::with_capacity(feature.segment_count());
        for (segment, pair) in feature.coordinates.windows(2).enumerate() {
            let source = self.resolve_node(&pair[0]);
            let target = self.resolve_node(&pair[1]);

            let edge_id = self.next_edge_id();
            let (properties, weight) = self.policy.edge_properties(feature, segment);
            let edge = Edge::new(edge_id, source, target, properties, weight);
            trace!("Edge {edge_id}: node {source} -> node {target}");

            // Endpoints were just resolved, so insertion cannot miss them.
            self.graph.insert_edge(edge)?;
            edge_ids.push(edge_id);
        }

        Ok(edge_ids)
    }

    /// Remove an edge from the edge set and from both endpoints' adjacency
    /// (the tail's out-list and the head's in-list in directed mode).
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::EdgeNotFound`] if the edge doesn't exist.
    pub fn remove_edge(&mut self, id: EdgeId) -> Result<()> {
        debug!("Removing edge {id}");
        self.graph.detach_edge(id)?;
        Ok(())
    }

    /// Detach a node from the graph.
    ///
    /// This only removes the node from the container and from the
    /// coordinate merge map. Edges still referencing the node are NOT
    /// removed; callers must remove incident edges first or accept dangling
    /// edge endpoints. Later features ending at the same coordinate get a
    /// fresh node.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NodeNotFound`] if the node doesn't exist.
    pub fn remove_node(&mut self, id: NodeId) -> Result<()> {
        debug!("Detaching node {id}");
        let node = self.graph.detach_node(id)?;
        self.coordinate_nodes.remove(&node.coordinate.key());
        Ok(())
    }

    /// Number of nodes built so far.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Number of edges built so far.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Finalize construction and return the graph.
    ///
    /// Consumes the builder, discarding the coordinate merge map. Further
    /// mutation requires a new builder.
    pub fn build(self) -> Graph {
        info!(
            "Graph built: {} node(s), {} edge(s)",
            self.graph.node_count(),
            self.graph.edge_count()
        );
        self.graph
    }

    fn resolve_node(&mut self, coordinate: &Coordinate) -> NodeId {
        let key = coordinate.key();
        if let Some(id) = self.coordinate_nodes.get(&key) {
            return *id;
        }

        let id = self.next_node_id();
        let properties = self.policy.node_properties(coordinate);
        let node = Node::new(id, *coordinate, properties, self.graph.orientation());
        trace!("Node {id} at {coordinate}");
        self.graph.insert_node(node);
        self.coordinate_nodes.insert(key, id);
        id
    }

    fn next_node_id(&mut self) -> NodeId {
        let id = self.node_counter;
        self.node_counter += 1;
        id
    }

    fn next_edge_id(&mut self) -> EdgeId {
        let id = self.edge_counter;
        self.edge_counter += 1;
        id
    }
}
