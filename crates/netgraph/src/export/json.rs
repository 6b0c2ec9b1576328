//! JSON export for D3.js and web visualization tools.
//!
//! Generates JSON with "nodes" and "links" arrays compatible with D3.js
//! force-directed layouts.

use crate::error::Result;
use crate::graph::{Graph, Orientation, PropertyMap, PropertyValue};
use serde_json::{json, Value};

/// Export the graph to D3.js-compatible JSON.
///
/// Output is deterministic (sorted ids).
pub fn export_json(graph: &Graph) -> Result<String> {
    let mut nodes_array = Vec::new();
    let mut links_array = Vec::new();

    for id in graph.node_ids() {
        let node = graph.get_node(id)?;
        nodes_array.push(json!({
            "id": node.id,
            "x": node.coordinate.x,
            "y": node.coordinate.y,
            "degree": node.degree(),
            "properties": properties_to_json(&node.properties),
        }));
    }

    for id in graph.edge_ids() {
        let edge = graph.get_edge(id)?;
        links_array.push(json!({
            "id": edge.id,
            "source": edge.source,
            "target": edge.target,
            "weight": edge.weight,
            "properties": properties_to_json(&edge.properties),
        }));
    }

    let orientation = match graph.orientation() {
        Orientation::Directed => "directed",
        Orientation::Undirected => "undirected",
    };

    let result = json!({
        "orientation": orientation,
        "nodes": nodes_array,
        "links": links_array,
    });

    // serde_json::to_string_pretty should never fail for our data structures
    Ok(serde_json::to_string_pretty(&result).expect("Failed to serialize JSON"))
}

fn properties_to_json(properties: &PropertyMap) -> Value {
    let mut map = serde_json::Map::new();
    for (key, value) in properties.iter() {
        let json_value = match value {
            PropertyValue::String(s) => json!(s),
            PropertyValue::Int(i) => json!(i),
            PropertyValue::Float(f) => json!(f),
            PropertyValue::Bool(b) => json!(b),
            PropertyValue::StringList(list) => json!(list),
            PropertyValue::Null => Value::Null,
        };
        map.insert(key.clone(), json_value);
    }
    Value::Object(map)
}
