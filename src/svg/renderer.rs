//! Map renderer - converts MapData into a layered VectorScene.
//!
//! Builds back-to-front: card chrome → base image → edges → nodes (each
//! followed by its label) → legend. Holds no state between calls.

use super::styles::{
    legend_entries, resolve_edge_style, resolve_node_color, Chrome, LegendBox, NodeMarker, Opacity,
    Palette,
};
use super::types::{CanvasFrame, SceneElement, VectorScene};
use crate::config::{RenderOptions, Viewport};
use crate::graph::{resolve_edges_with, NodeIndex};
use crate::types::{MapData, Topology, LOGICAL_HEIGHT, LOGICAL_WIDTH};

/// Render a map into a scene sized to `viewport`.
pub fn render(map: &MapData, viewport: Viewport, show_topology_overlay: bool) -> VectorScene {
    let canvas = CanvasFrame {
        x: 0.0,
        y: Chrome::TITLE_HEIGHT,
        width: viewport.width(),
        height: viewport.height(),
    };
    let width = viewport.width();
    let height = viewport.height() + Chrome::TITLE_HEIGHT;

    let mut elements = Vec::new();

    // 1. Card chrome
    push_chrome(&mut elements, map, width, height, &canvas);

    // 2. Base image
    if let Some(href) = &map.base_image_ref {
        elements.push(SceneElement::BaseImage {
            href: href.clone(),
            width: LOGICAL_WIDTH,
            height: LOGICAL_HEIGHT,
            opacity: Opacity::BASE_IMAGE,
        });
    }

    // 3. Overlay is all-or-nothing
    if let (true, Some(topology)) = (show_topology_overlay, &map.topology) {
        push_topology(&mut elements, topology);
        push_legend(&mut elements, &canvas);
    }

    VectorScene {
        width,
        height,
        logical_width: LOGICAL_WIDTH,
        logical_height: LOGICAL_HEIGHT,
        canvas,
        description: map.description.clone(),
        elements,
    }
}

/// Render with a full option set.
pub fn render_with_options(map: &MapData, options: &RenderOptions) -> VectorScene {
    render(map, options.viewport, options.show_topology_overlay)
}

// ============================================================================
// Chrome
// ============================================================================

fn push_chrome(
    elements: &mut Vec<SceneElement>,
    map: &MapData,
    width: f64,
    height: f64,
    canvas: &CanvasFrame,
) {
    // Inset by half the border so the stroke is not clipped
    let inset = Chrome::BORDER_WIDTH / 2.0;
    elements.push(SceneElement::Card {
        x: inset,
        y: inset,
        width: width - Chrome::BORDER_WIDTH,
        height: height - Chrome::BORDER_WIDTH,
        corner_radius: Chrome::CORNER_RADIUS,
    });

    let tag = if map.category.trim().is_empty() {
        None
    } else {
        Some(map.category.clone())
    };
    elements.push(SceneElement::Title {
        x: Chrome::PADDING,
        y: Chrome::TITLE_HEIGHT / 2.0,
        text: map.name.clone(),
        tag,
    });

    elements.push(SceneElement::Canvas {
        x: canvas.x,
        y: canvas.y,
        width: canvas.width,
        height: canvas.height,
        corner_radius: Chrome::CORNER_RADIUS,
    });
}

// ============================================================================
// Topology overlay
// ============================================================================

fn push_topology(elements: &mut Vec<SceneElement>, topology: &Topology) {
    let index = NodeIndex::build(&topology.nodes);

    // Edges first so they sit beneath every node
    for resolved in resolve_edges_with(&index, &topology.edges) {
        elements.push(SceneElement::Edge {
            id: resolved.edge.id.clone(),
            x1: resolved.from.x,
            y1: resolved.from.y,
            x2: resolved.to.x,
            y2: resolved.to.y,
            style: resolve_edge_style(&resolved.edge.kind),
            opacity: Opacity::EDGE,
        });
    }

    for node in &topology.nodes {
        elements.push(SceneElement::NodeMarker {
            id: node.id.clone(),
            cx: node.x,
            cy: node.y,
            r: NodeMarker::RADIUS,
            fill: resolve_node_color(&node.category),
            stroke: Palette::WHITE,
            stroke_width: NodeMarker::OUTLINE_WIDTH,
            opacity: Opacity::NODE,
        });
        if let Some(label) = &node.label {
            elements.push(SceneElement::NodeLabel {
                node_id: node.id.clone(),
                x: node.x,
                y: node.y + NodeMarker::LABEL_OFFSET,
                text: label.clone(),
            });
        }
    }
}

fn push_legend(elements: &mut Vec<SceneElement>, canvas: &CanvasFrame) {
    let entries = legend_entries();
    let height = LegendBox::PADDING * 2.0 + LegendBox::ROW_HEIGHT * entries.len() as f64;
    elements.push(SceneElement::Legend {
        x: canvas.x + canvas.width - LegendBox::WIDTH - LegendBox::MARGIN,
        y: canvas.y + LegendBox::MARGIN,
        width: LegendBox::WIDTH,
        height,
        entries,
    });
}
