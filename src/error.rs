//! Errors raised at the input boundary.
//!
//! Rendering itself is total; only reading map data and parsing
//! render arguments can fail.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MapError {
    #[error("Invalid map data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid viewport: {0}")]
    InvalidViewport(String),

    #[error("Invalid option: {0}")]
    InvalidOption(String),

    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),
}
