//! SVG renderer - converts building maps into layered vector scenes and SVG strings.
//!
//! - `render` builds a `VectorScene` from `MapData`
//! - `write_svg` serializes a scene
//! - `resolve_node_color` / `resolve_edge_style` map categories to styles
//!
//! Pure string building, no DOM manipulation.

mod renderer;
mod styles;
mod theme;
mod types;
mod writer;

pub use renderer::{render, render_with_options};
pub use styles::{legend_entries, resolve_edge_style, resolve_node_color, Palette};
pub use theme::{CardColors, MapTheme};
pub use types::*;
pub use writer::{escape_xml, write_svg};
