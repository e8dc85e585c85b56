//! Scene types produced by the renderer and consumed by the SVG writer.

use serde::{Serialize, Serializer};

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

/// Stroke pattern of an edge line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DashPattern {
    Solid,
    Dashed,
    Dotted,
}

impl DashPattern {
    /// Value for `stroke-dasharray`, `None` for a solid line
    pub fn dasharray(self) -> Option<&'static str> {
        match self {
            DashPattern::Solid => None,
            DashPattern::Dashed => Some("8 4"),
            DashPattern::Dotted => Some("2 3"),
        }
    }
}

/// Resolved visual style of an edge
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke_color: Color,
    pub stroke_width: f64,
    pub dash_pattern: DashPattern,
}

/// Drawing layers, back to front
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Layer {
    Chrome,
    BaseImage,
    Edges,
    Nodes,
    Legend,
}

impl Layer {
    /// Whether elements of this layer live in logical canvas space
    pub fn is_canvas(self) -> bool {
        matches!(self, Layer::BaseImage | Layer::Edges | Layer::Nodes)
    }
}

/// One row of the legend panel
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: &'static str,
    pub color: Color,
}

/// A single drawable element.
///
/// Chrome and legend coordinates are in card (viewport) space; base image,
/// edge, node and label coordinates are in logical canvas space.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum SceneElement {
    /// Rounded, bordered container
    Card {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    /// Map name and category tag above the canvas
    Title {
        x: f64,
        y: f64,
        text: String,
        tag: Option<String>,
    },
    /// Rounded, bordered drawing area sized to the viewport
    Canvas {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        corner_radius: f64,
    },
    BaseImage {
        href: String,
        width: f64,
        height: f64,
        opacity: f64,
    },
    Edge {
        id: String,
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        style: EdgeStyle,
        opacity: f64,
    },
    NodeMarker {
        id: String,
        cx: f64,
        cy: f64,
        r: f64,
        fill: Color,
        stroke: Color,
        stroke_width: f64,
        opacity: f64,
    },
    NodeLabel {
        node_id: String,
        x: f64,
        y: f64,
        text: String,
    },
    Legend {
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        entries: Vec<LegendEntry>,
    },
}

impl SceneElement {
    pub fn layer(&self) -> Layer {
        match self {
            SceneElement::Card { .. } | SceneElement::Title { .. } | SceneElement::Canvas { .. } => {
                Layer::Chrome
            }
            SceneElement::BaseImage { .. } => Layer::BaseImage,
            SceneElement::Edge { .. } => Layer::Edges,
            SceneElement::NodeMarker { .. } | SceneElement::NodeLabel { .. } => Layer::Nodes,
            SceneElement::Legend { .. } => Layer::Legend,
        }
    }
}

/// Rectangle inside the card that the logical canvas is scaled into
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CanvasFrame {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Complete output of one render, elements ordered back to front
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorScene {
    pub width: f64,
    pub height: f64,
    /// Logical canvas size, always 800×600
    pub logical_width: f64,
    pub logical_height: f64,
    pub canvas: CanvasFrame,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub elements: Vec<SceneElement>,
}

impl VectorScene {
    pub fn count_layer(&self, layer: Layer) -> usize {
        self.elements.iter().filter(|e| e.layer() == layer).count()
    }

    pub fn edges(&self) -> impl Iterator<Item = &SceneElement> {
        self.elements
            .iter()
            .filter(|e| matches!(e, SceneElement::Edge { .. }))
    }

    pub fn node_markers(&self) -> impl Iterator<Item = &SceneElement> {
        self.elements
            .iter()
            .filter(|e| matches!(e, SceneElement::NodeMarker { .. }))
    }

    pub fn has_legend(&self) -> bool {
        self.elements
            .iter()
            .any(|e| matches!(e, SceneElement::Legend { .. }))
    }
}
