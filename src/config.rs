//! Render options and viewport parsing

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::MapError;
use crate::svg::MapTheme;

lazy_static! {
    static ref RE_SIZE: Regex =
        Regex::new(r"^\s*(\d+(?:\.\d+)?)\s*[xX×]\s*(\d+(?:\.\d+)?)\s*$").unwrap();
}

/// On-screen box the logical canvas is scaled into.
///
/// Always finite and positive: every constructor, serde included, goes
/// through `Viewport::new`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawViewport")]
pub struct Viewport {
    width: f64,
    height: f64,
}

#[derive(Deserialize)]
struct RawViewport {
    width: f64,
    height: f64,
}

impl TryFrom<RawViewport> for Viewport {
    type Error = MapError;

    fn try_from(raw: RawViewport) -> Result<Self, Self::Error> {
        Viewport::new(raw.width, raw.height)
    }
}

impl Viewport {
    pub fn width(&self) -> f64 {
        self.width
    }

    pub fn height(&self) -> f64 {
        self.height
    }

    /// Both sides must be finite and positive.
    pub fn new(width: f64, height: f64) -> Result<Self, MapError> {
        if !(width.is_finite() && width > 0.0 && height.is_finite() && height > 0.0) {
            return Err(MapError::InvalidViewport(format!(
                "{}x{} (both sides must be positive)",
                width, height
            )));
        }
        Ok(Self { width, height })
    }

    /// Parse a `WIDTHxHEIGHT` string such as `640x480`.
    pub fn parse(s: &str) -> Result<Self, MapError> {
        let caps = RE_SIZE
            .captures(s)
            .ok_or_else(|| MapError::InvalidViewport(format!("expected WIDTHxHEIGHT, got '{}'", s)))?;
        let width: f64 = caps[1]
            .parse()
            .map_err(|_| MapError::InvalidViewport(s.to_string()))?;
        let height: f64 = caps[2]
            .parse()
            .map_err(|_| MapError::InvalidViewport(s.to_string()))?;
        Self::new(width, height)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 400.0,
            height: 300.0,
        }
    }
}

/// Configuration options for map rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RenderOptions {
    /// Size of the drawing area. Default: 400×300
    pub viewport: Viewport,
    /// Draw edges, nodes and legend. Default: true
    pub show_topology_overlay: bool,
    /// Card theme. Default: light
    pub theme: MapTheme,
    /// Font family for all text. Default: "Inter"
    pub font: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            show_topology_overlay: true,
            theme: MapTheme::Light,
            font: "Inter".to_string(),
        }
    }
}
