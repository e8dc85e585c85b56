//! Style resolution and fixed drawing constants.
//!
//! Category and kind lookups are total: anything unrecognized gets the
//! fallback style.

use super::types::{Color, DashPattern, EdgeStyle, LegendEntry};
use crate::types::{EdgeKind, NodeCategory};

/// Named palette colors
pub struct Palette;

impl Palette {
    pub const BLUE: Color = Color::rgb(0x18, 0x90, 0xff);
    pub const GREEN: Color = Color::rgb(0x52, 0xc4, 0x1a);
    pub const ORANGE: Color = Color::rgb(0xfa, 0x8c, 0x16);
    pub const RED: Color = Color::rgb(0xf5, 0x22, 0x2d);
    pub const PURPLE: Color = Color::rgb(0x72, 0x2e, 0xd1);
    pub const PINK: Color = Color::rgb(0xeb, 0x2f, 0x96);
    pub const AMBER: Color = Color::rgb(0xfa, 0xad, 0x14);
    pub const GRAY: Color = Color::rgb(0x8c, 0x8c, 0x8c);
    pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
}

pub fn resolve_node_color(category: &NodeCategory) -> Color {
    match category {
        NodeCategory::Room => Palette::BLUE,
        NodeCategory::Corridor => Palette::GREEN,
        NodeCategory::Entrance => Palette::ORANGE,
        NodeCategory::Exit => Palette::RED,
        NodeCategory::Elevator => Palette::PURPLE,
        NodeCategory::Stairs => Palette::PINK,
        NodeCategory::Other(_) => Palette::GRAY,
    }
}

const NORMAL_EDGE: EdgeStyle = EdgeStyle {
    stroke_color: Palette::BLUE,
    stroke_width: 2.0,
    dash_pattern: DashPattern::Solid,
};

pub fn resolve_edge_style(kind: &EdgeKind) -> EdgeStyle {
    match kind {
        EdgeKind::Normal | EdgeKind::Other(_) => NORMAL_EDGE,
        EdgeKind::Emergency => EdgeStyle {
            stroke_color: Palette::RED,
            stroke_width: 4.0,
            dash_pattern: DashPattern::Dashed,
        },
        EdgeKind::Restricted => EdgeStyle {
            stroke_color: Palette::AMBER,
            stroke_width: 3.0,
            dash_pattern: DashPattern::Dotted,
        },
    }
}

/// The legend always shows these four entries, whatever the data contains.
pub fn legend_entries() -> Vec<LegendEntry> {
    [
        ("Room", NodeCategory::Room),
        ("Corridor", NodeCategory::Corridor),
        ("Entrance", NodeCategory::Entrance),
        ("Exit", NodeCategory::Exit),
    ]
    .into_iter()
    .map(|(label, category)| LegendEntry {
        label,
        color: resolve_node_color(&category),
    })
    .collect()
}

/// Opacity per layer
pub struct Opacity;

impl Opacity {
    pub const BASE_IMAGE: f64 = 0.8;
    pub const EDGE: f64 = 0.7;
    pub const NODE: f64 = 0.9;
}

/// Node marker geometry (logical units)
pub struct NodeMarker;

impl NodeMarker {
    pub const RADIUS: f64 = 8.0;
    pub const OUTLINE_WIDTH: f64 = 2.0;
    /// Distance from node center down to the label baseline
    pub const LABEL_OFFSET: f64 = 20.0;
}

/// Card chrome geometry (viewport px)
pub struct Chrome;

impl Chrome {
    pub const TITLE_HEIGHT: f64 = 32.0;
    pub const CORNER_RADIUS: f64 = 6.0;
    pub const BORDER_WIDTH: f64 = 1.0;
    pub const PADDING: f64 = 12.0;
}

/// Legend panel geometry (viewport px)
pub struct LegendBox;

impl LegendBox {
    pub const WIDTH: f64 = 84.0;
    pub const ROW_HEIGHT: f64 = 16.0;
    pub const PADDING: f64 = 6.0;
    pub const MARGIN: f64 = 8.0;
    pub const SWATCH_RADIUS: f64 = 4.0;
}

pub struct FontSizes;

impl FontSizes {
    pub const TITLE: f64 = 14.0;
    pub const TAG: f64 = 11.0;
    pub const NODE_LABEL: f64 = 10.0;
    pub const LEGEND: f64 = 10.0;
}

pub struct FontWeights;

impl FontWeights {
    pub const TITLE: u32 = 600;
    pub const NODE_LABEL: u32 = 500;
    pub const LEGEND: u32 = 400;
}

/// Vertical shift applied to centered text, scales with font size.
pub const TEXT_BASELINE_SHIFT: &str = "0.35em";
