//! Type definitions for building maps and their topology graphs

use serde::{Deserialize, Serialize};

/// Width of the logical canvas that node coordinates live in
pub const LOGICAL_WIDTH: f64 = 800.0;
/// Height of the logical canvas that node coordinates live in
pub const LOGICAL_HEIGHT: f64 = 600.0;

/// Category of a topology node
///
/// Unrecognized strings land in `Other` and are drawn with the fallback style.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeCategory {
    Room,
    Corridor,
    Entrance,
    Exit,
    Elevator,
    Stairs,
    Other(String),
}

impl NodeCategory {
    /// Total: never fails, unknown input becomes `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "room" => NodeCategory::Room,
            "corridor" => NodeCategory::Corridor,
            "entrance" => NodeCategory::Entrance,
            "exit" => NodeCategory::Exit,
            "elevator" => NodeCategory::Elevator,
            "stairs" => NodeCategory::Stairs,
            _ => NodeCategory::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            NodeCategory::Room => "room",
            NodeCategory::Corridor => "corridor",
            NodeCategory::Entrance => "entrance",
            NodeCategory::Exit => "exit",
            NodeCategory::Elevator => "elevator",
            NodeCategory::Stairs => "stairs",
            NodeCategory::Other(raw) => raw,
        }
    }
}

impl From<String> for NodeCategory {
    fn from(s: String) -> Self {
        NodeCategory::parse(&s)
    }
}

impl From<NodeCategory> for String {
    fn from(c: NodeCategory) -> Self {
        c.as_str().to_string()
    }
}

impl Default for NodeCategory {
    fn default() -> Self {
        NodeCategory::Other(String::new())
    }
}

/// Kind of a topology edge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum EdgeKind {
    Normal,
    Emergency,
    Restricted,
    Other(String),
}

impl EdgeKind {
    /// Total: never fails, unknown input becomes `Other`.
    pub fn parse(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "normal" => EdgeKind::Normal,
            "emergency" => EdgeKind::Emergency,
            "restricted" => EdgeKind::Restricted,
            _ => EdgeKind::Other(s.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            EdgeKind::Normal => "normal",
            EdgeKind::Emergency => "emergency",
            EdgeKind::Restricted => "restricted",
            EdgeKind::Other(raw) => raw,
        }
    }
}

impl From<String> for EdgeKind {
    fn from(s: String) -> Self {
        EdgeKind::parse(&s)
    }
}

impl From<EdgeKind> for String {
    fn from(k: EdgeKind) -> Self {
        k.as_str().to_string()
    }
}

impl Default for EdgeKind {
    fn default() -> Self {
        EdgeKind::Normal
    }
}

/// A point of interest on the map, in logical canvas coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyNode {
    pub id: String,
    pub x: f64,
    pub y: f64,
    #[serde(default, alias = "type")]
    pub category: NodeCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

/// A connection between two nodes, referenced by id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopologyEdge {
    pub id: String,
    pub from: String,
    pub to: String,
    /// Traversal cost. Not used for drawing.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(default, alias = "type")]
    pub kind: EdgeKind,
}

/// Nodes and edges drawn over the base image
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Topology {
    #[serde(default)]
    pub nodes: Vec<TopologyNode>,
    #[serde(default)]
    pub edges: Vec<TopologyEdge>,
}

/// A building map as supplied by the host application
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapData {
    pub id: String,
    pub name: String,
    /// Free-form, e.g. "warehouse" or "office"
    #[serde(default)]
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// URL or path of the raster background
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_image_ref: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub topology: Option<Topology>,
}

impl MapData {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: String::new(),
            description: None,
            base_image_ref: None,
            topology: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_is_total() {
        assert_eq!(NodeCategory::parse("room"), NodeCategory::Room);
        assert_eq!(NodeCategory::parse(" Stairs "), NodeCategory::Stairs);
        assert_eq!(
            NodeCategory::parse("loading-dock"),
            NodeCategory::Other("loading-dock".to_string())
        );
        assert_eq!(EdgeKind::parse("EMERGENCY"), EdgeKind::Emergency);
        assert_eq!(EdgeKind::parse(""), EdgeKind::Other(String::new()));
    }

    #[test]
    fn test_deserialize_map() {
        let json = r#"{
            "id": "m1",
            "name": "Floor 1",
            "category": "warehouse",
            "baseImageRef": "/maps/floor1.png",
            "topology": {
                "nodes": [
                    {"id": "a", "x": 10, "y": 10, "category": "room", "label": "Dock"},
                    {"id": "b", "x": 50, "y": 50, "type": "helipad"}
                ],
                "edges": [
                    {"id": "e1", "from": "a", "to": "b", "type": "restricted", "weight": 2.5}
                ]
            }
        }"#;
        let map: MapData = serde_json::from_str(json).unwrap();
        assert_eq!(map.base_image_ref.as_deref(), Some("/maps/floor1.png"));
        let topology = map.topology.unwrap();
        assert_eq!(topology.nodes[0].label.as_deref(), Some("Dock"));
        assert_eq!(
            topology.nodes[1].category,
            NodeCategory::Other("helipad".to_string())
        );
        assert_eq!(topology.edges[0].kind, EdgeKind::Restricted);
        assert_eq!(topology.edges[0].weight, Some(2.5));
    }

    #[test]
    fn test_missing_optionals() {
        let map: MapData = serde_json::from_str(r#"{"id": "m2", "name": "Empty"}"#).unwrap();
        assert!(map.topology.is_none());
        assert!(map.base_image_ref.is_none());
        assert_eq!(map.category, "");
    }

    #[test]
    fn test_edge_kind_defaults_to_normal() {
        let edge: TopologyEdge =
            serde_json::from_str(r#"{"id": "e", "from": "a", "to": "b"}"#).unwrap();
        assert_eq!(edge.kind, EdgeKind::Normal);
    }
}
