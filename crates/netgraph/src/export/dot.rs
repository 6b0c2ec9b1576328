//! Graphviz DOT export for network visualization.

use crate::error::Result;
use crate::graph::{Graph, Orientation};
use std::fmt::Write as _;

/// Export the graph to Graphviz DOT format.
///
/// Directed graphs render as `digraph` with `->` edges, undirected ones as
/// `graph` with `--`. Nodes are labeled with their coordinate, edges with
/// their weight when one is set. Output is deterministic (sorted ids).
pub fn export_dot(graph: &Graph) -> Result<String> {
    let (header, arrow) = match graph.orientation() {
        Orientation::Directed => ("digraph network {", "->"),
        Orientation::Undirected => ("graph network {", "--"),
    };

    let mut out = String::new();
    out.push_str(header);
    out.push('\n');
    out.push_str("  node [shape=point];\n");

    for id in graph.node_ids() {
        let node = graph.get_node(id)?;
        // Writing to a String cannot fail
        let _ = writeln!(out, "  n{} [xlabel=\"{}\"];", id, node.coordinate);
    }

    for id in graph.edge_ids() {
        let edge = graph.get_edge(id)?;
        match edge.weight {
            Some(weight) => {
                let _ = writeln!(
                    out,
                    "  n{} {} n{} [label=\"{}\"];",
                    edge.source, arrow, edge.target, weight
                );
            }
            None => {
                let _ = writeln!(out, "  n{} {} n{};", edge.source, arrow, edge.target);
            }
        }
    }

    out.push_str("}\n");
    Ok(out)
}
