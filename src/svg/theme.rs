//! Card chrome theming.
//!
//! Only the card, canvas and legend follow the theme. Node and edge colors
//! come from the style tables and are the same in every theme.

use serde::{Deserialize, Serialize};

use crate::error::MapError;

/// Built-in card themes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MapTheme {
    #[default]
    Light,
    Dark,
}

impl std::str::FromStr for MapTheme {
    type Err = MapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(MapTheme::Light),
            "dark" => Ok(MapTheme::Dark),
            other => Err(MapError::InvalidOption(format!(
                "unknown theme '{}' (expected light or dark)",
                other
            ))),
        }
    }
}

impl std::fmt::Display for MapTheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MapTheme::Light => write!(f, "light"),
            MapTheme::Dark => write!(f, "dark"),
        }
    }
}

/// Colors of the card surrounding the map
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardColors {
    /// Card background
    pub bg: String,
    /// Title text
    pub fg: String,
    /// Secondary text: category tag, legend labels
    pub muted: String,
    /// Card and canvas border
    pub border: String,
    /// Drawing area fill, visible where no base image covers it
    pub canvas_fill: String,
    /// Legend panel fill
    pub legend_bg: String,
}

impl Default for CardColors {
    fn default() -> Self {
        Self::from_theme(MapTheme::Light)
    }
}

impl CardColors {
    pub fn from_theme(theme: MapTheme) -> Self {
        match theme {
            MapTheme::Light => Self {
                bg: "#ffffff".to_string(),
                fg: "#262626".to_string(),
                muted: "#595959".to_string(),
                border: "#d9d9d9".to_string(),
                canvas_fill: "#f5f5f5".to_string(),
                legend_bg: "rgba(255,255,255,0.9)".to_string(),
            },
            MapTheme::Dark => Self {
                bg: "#1f1f1f".to_string(),
                fg: "#e8e8e8".to_string(),
                muted: "#a6a6a6".to_string(),
                border: "#434343".to_string(),
                canvas_fill: "#141414".to_string(),
                legend_bg: "rgba(31,31,31,0.9)".to_string(),
            },
        }
    }
}

/// Build the <style> block with the text font family.
pub fn build_style_block(font: &str) -> String {
    format!(
        r#"<style>
  text {{ font-family: '{}', system-ui, sans-serif; }}
</style>"#,
        super::writer::escape_xml(font)
    )
}

/// Build the outer SVG opening tag, sized to the card.
pub fn svg_open_tag(width: f64, height: f64) -> String {
    let w = super::writer::fmt_num(width);
    let h = super::writer::fmt_num(height);
    format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}" width="{}" height="{}">"#,
        w, h, w, h
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_theme_round_trips_through_name() {
        for theme in [MapTheme::Light, MapTheme::Dark] {
            assert_eq!(theme.to_string().parse::<MapTheme>().unwrap(), theme);
        }
        assert_eq!(" Dark ".parse::<MapTheme>().unwrap(), MapTheme::Dark);
    }

    #[test]
    fn test_unknown_theme_is_an_error() {
        let err = "solarized".parse::<MapTheme>().unwrap_err();
        assert!(matches!(err, MapError::InvalidOption(_)));
    }

    #[test]
    fn test_themes_have_distinct_chrome() {
        assert_ne!(
            CardColors::from_theme(MapTheme::Light),
            CardColors::from_theme(MapTheme::Dark)
        );
    }
}
