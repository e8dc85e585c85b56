//! SVG writer - converts a VectorScene into an SVG string.
//!
//! Pure string building, no DOM manipulation. Canvas layers go inside a
//! nested `<svg>` whose viewBox is the logical canvas, so the drawing
//! surface does the uniform scaling.

use super::styles::{Chrome, FontSizes, FontWeights, LegendBox, TEXT_BASELINE_SHIFT};
use super::theme::{build_style_block, svg_open_tag, CardColors};
use super::types::{CanvasFrame, Color, EdgeStyle, LegendEntry, SceneElement, VectorScene};

/// Write a scene as an SVG document.
pub fn write_svg(scene: &VectorScene, colors: &CardColors, font: &str) -> String {
    let mut parts: Vec<String> = Vec::new();

    parts.push(svg_open_tag(scene.width, scene.height));
    if let Some(description) = &scene.description {
        parts.push(format!("<desc>{}</desc>", escape_xml(description)));
    }
    parts.push(build_style_block(font));

    let mut canvas_open = false;
    for element in &scene.elements {
        let in_canvas = element.layer().is_canvas();
        if in_canvas && !canvas_open {
            parts.push(canvas_open_tag(scene));
            canvas_open = true;
        } else if !in_canvas && canvas_open {
            parts.push("</svg>".to_string());
            canvas_open = false;
        }
        parts.push(write_element(element, colors));
    }
    if canvas_open {
        parts.push("</svg>".to_string());
    }

    parts.push("</svg>".to_string());
    parts.join("\n")
}

fn canvas_open_tag(scene: &VectorScene) -> String {
    let CanvasFrame { x, y, width, height } = scene.canvas;
    format!(
        r#"<svg class="topo-canvas" x="{}" y="{}" width="{}" height="{}" viewBox="0 0 {} {}" preserveAspectRatio="xMidYMid meet">"#,
        fmt_num(x),
        fmt_num(y),
        fmt_num(width),
        fmt_num(height),
        fmt_num(scene.logical_width),
        fmt_num(scene.logical_height)
    )
}

fn write_element(element: &SceneElement, colors: &CardColors) -> String {
    match element {
        SceneElement::Card {
            x,
            y,
            width,
            height,
            corner_radius,
        } => format!(
            r#"<rect class="card" x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" fill="{}" stroke="{}" stroke-width="{}" />"#,
            fmt_num(*x),
            fmt_num(*y),
            fmt_num(*width),
            fmt_num(*height),
            colors.bg,
            colors.border,
            Chrome::BORDER_WIDTH,
            r = fmt_num(*corner_radius)
        ),
        SceneElement::Title { x, y, text, tag } => write_title(*x, *y, text, tag.as_deref(), colors),
        SceneElement::Canvas {
            x,
            y,
            width,
            height,
            corner_radius,
        } => format!(
            r#"<rect class="canvas" x="{}" y="{}" width="{}" height="{}" rx="{r}" ry="{r}" fill="{}" stroke="{}" stroke-width="{}" />"#,
            fmt_num(*x),
            fmt_num(*y),
            fmt_num(*width),
            fmt_num(*height),
            colors.canvas_fill,
            colors.border,
            Chrome::BORDER_WIDTH,
            r = fmt_num(*corner_radius)
        ),
        SceneElement::BaseImage {
            href,
            width,
            height,
            opacity,
        } => format!(
            r#"<image class="base-image" href="{}" x="0" y="0" width="{}" height="{}" opacity="{}" preserveAspectRatio="none" />"#,
            escape_xml(href),
            fmt_num(*width),
            fmt_num(*height),
            fmt_num(*opacity)
        ),
        SceneElement::Edge {
            id,
            x1,
            y1,
            x2,
            y2,
            style,
            opacity,
        } => write_edge(id, (*x1, *y1), (*x2, *y2), style, *opacity),
        SceneElement::NodeMarker {
            id,
            cx,
            cy,
            r,
            fill,
            stroke,
            stroke_width,
            opacity,
        } => format!(
            r#"<circle class="topo-node" data-id="{}" cx="{}" cy="{}" r="{}" fill="{}" stroke="{}" stroke-width="{}" opacity="{}" />"#,
            escape_xml(id),
            fmt_num(*cx),
            fmt_num(*cy),
            fmt_num(*r),
            fill,
            stroke,
            fmt_num(*stroke_width),
            fmt_num(*opacity)
        ),
        SceneElement::NodeLabel {
            node_id,
            x,
            y,
            text,
        } => format!(
            r#"<text class="topo-label" data-id="{}" x="{}" y="{}" text-anchor="middle" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
            escape_xml(node_id),
            fmt_num(*x),
            fmt_num(*y),
            FontSizes::NODE_LABEL,
            FontWeights::NODE_LABEL,
            colors.fg,
            escape_xml(text)
        ),
        SceneElement::Legend {
            x,
            y,
            width,
            height,
            entries,
        } => write_legend(*x, *y, *width, *height, entries, colors),
    }
}

fn write_title(x: f64, y: f64, text: &str, tag: Option<&str>, colors: &CardColors) -> String {
    let mut out = format!(
        r#"<text class="title" x="{}" y="{}" dy="{}" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
        fmt_num(x),
        fmt_num(y),
        TEXT_BASELINE_SHIFT,
        FontSizes::TITLE,
        FontWeights::TITLE,
        colors.fg,
        escape_xml(text)
    );
    if let Some(tag) = tag {
        out.push_str(&format!(
            r#"
<text class="category-tag" x="100%" y="{}" dx="-{}" dy="{}" text-anchor="end" font-size="{}" fill="{}">{}</text>"#,
            fmt_num(y),
            fmt_num(Chrome::PADDING),
            TEXT_BASELINE_SHIFT,
            FontSizes::TAG,
            colors.muted,
            escape_xml(tag)
        ));
    }
    out
}

fn write_edge(id: &str, from: (f64, f64), to: (f64, f64), style: &EdgeStyle, opacity: f64) -> String {
    let dash_array = style
        .dash_pattern
        .dasharray()
        .map(|d| format!(" stroke-dasharray=\"{}\"", d))
        .unwrap_or_default();
    format!(
        r#"<line class="topo-edge" data-id="{}" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}" stroke-width="{}"{} opacity="{}" />"#,
        escape_xml(id),
        fmt_num(from.0),
        fmt_num(from.1),
        fmt_num(to.0),
        fmt_num(to.1),
        style.stroke_color,
        fmt_num(style.stroke_width),
        dash_array,
        fmt_num(opacity)
    )
}

fn write_legend(
    x: f64,
    y: f64,
    width: f64,
    height: f64,
    entries: &[LegendEntry],
    colors: &CardColors,
) -> String {
    let mut parts = vec![
        r#"<g class="legend">"#.to_string(),
        format!(
            r#"<rect x="{}" y="{}" width="{}" height="{}" rx="4" ry="4" fill="{}" stroke="{}" stroke-width="0.5" />"#,
            fmt_num(x),
            fmt_num(y),
            fmt_num(width),
            fmt_num(height),
            colors.legend_bg,
            colors.border
        ),
    ];
    for (i, entry) in entries.iter().enumerate() {
        let row_y = y + LegendBox::PADDING + LegendBox::ROW_HEIGHT * (i as f64 + 0.5);
        parts.push(write_legend_row(x + LegendBox::PADDING, row_y, entry.label, entry.color, colors));
    }
    parts.push("</g>".to_string());
    parts.join("\n")
}

fn write_legend_row(x: f64, y: f64, label: &str, color: Color, colors: &CardColors) -> String {
    let r = LegendBox::SWATCH_RADIUS;
    format!(
        r#"<circle class="legend-swatch" cx="{}" cy="{}" r="{}" fill="{}" />
<text class="legend-label" x="{}" y="{}" dy="{}" font-size="{}" font-weight="{}" fill="{}">{}</text>"#,
        fmt_num(x + r),
        fmt_num(y),
        fmt_num(r),
        color,
        fmt_num(x + r * 2.0 + 6.0),
        fmt_num(y),
        TEXT_BASELINE_SHIFT,
        FontSizes::LEGEND,
        FontWeights::LEGEND,
        colors.muted,
        escape_xml(label)
    )
}

// ============================================================================
// Utilities
// ============================================================================

/// Escape special XML characters in text and attribute values
pub fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Format a number without a trailing `.0` for whole values.
pub fn fmt_num(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        format!("{}", n)
    }
}
