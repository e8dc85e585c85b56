//! topomap - Render indoor building maps with a topology overlay as SVG
//!
//! A map is a base raster image plus a graph of typed nodes (rooms,
//! corridors, exits, ...) and typed edges (normal, emergency, restricted)
//! positioned in a fixed 800×600 logical canvas. Rendering produces a
//! layered vector scene that can be written out as SVG.
//!
//! # Example
//!
//! ```rust
//! use topomap::{render_json_to_svg, RenderOptions};
//!
//! let json = r#"{
//!     "id": "m1",
//!     "name": "Floor 1",
//!     "topology": {
//!         "nodes": [
//!             {"id": "a", "x": 10, "y": 10, "category": "room"},
//!             {"id": "b", "x": 50, "y": 50, "category": "exit"}
//!         ],
//!         "edges": [{"id": "e1", "from": "a", "to": "b", "kind": "emergency"}]
//!     }
//! }"#;
//! let svg = render_json_to_svg(json, &RenderOptions::default()).unwrap();
//! assert!(svg.contains("topo-edge"));
//! ```
//!
//! Malformed topology never fails a render: dangling edges are dropped and
//! unknown categories get a fallback style.

pub mod config;
pub mod error;
pub mod graph;
pub mod svg;
pub mod types;

pub use config::{RenderOptions, Viewport};
pub use error::MapError;
pub use graph::{inspect, resolve_edges, GraphDiagnostics};
pub use svg::{render, render_with_options, resolve_edge_style, resolve_node_color, VectorScene};
pub use types::*;

/// Parse map data from JSON.
pub fn parse_map_data(json: &str) -> Result<MapData, MapError> {
    Ok(serde_json::from_str(json)?)
}

/// Render a map to SVG text.
///
/// # Example
/// ```rust
/// let map = topomap::MapData::new("m1", "Floor 1");
/// let svg = topomap::render_to_svg(&map, &topomap::RenderOptions::default());
/// assert!(svg.contains("Floor 1"));
/// ```
pub fn render_to_svg(map: &MapData, options: &RenderOptions) -> String {
    let scene = render_with_options(map, options);
    let colors = svg::CardColors::from_theme(options.theme);
    svg::write_svg(&scene, &colors, &options.font)
}

/// Parse map JSON and render it to SVG text.
pub fn render_json_to_svg(json: &str, options: &RenderOptions) -> Result<String, MapError> {
    let map = parse_map_data(json)?;
    Ok(render_to_svg(&map, options))
}
