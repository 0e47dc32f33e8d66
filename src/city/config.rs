//! City layout configuration
//!
//! A city is described by a JSON file listing zones and their global bounds.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

/// Global placement and size of one zone, in city coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ZoneBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ZoneConfig {
    pub id: String,
    pub bounds: ZoneBounds,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CityConfig {
    pub city_name: String,
    #[serde(default)]
    pub zones: Vec<ZoneConfig>,
}

/// Load a city layout from a JSON file.
pub fn load_city_config(path: &Path) -> Result<CityConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read city layout {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("Invalid city layout in {}", path.display()))
}

/// Built-in 2x2 grid of 800x600 zones, for runs without a layout file.
pub fn test_layout() -> CityConfig {
    let zones = (0..4)
        .map(|index| ZoneConfig {
            id: format!("zone_{}", index),
            bounds: ZoneBounds {
                x: (index % 2) as f32 * 800.0,
                y: (index / 2) as f32 * 600.0,
                width: 800.0,
                height: 600.0,
            },
        })
        .collect();

    CityConfig {
        city_name: "Test City".to_string(),
        zones,
    }
}
