use serde::{Deserialize, Serialize};

use crate::consts::DEFAULT_TILE_SIZE;
use crate::error::Result;
use crate::naming::NamingScheme;
use crate::pyramid::ScalingPolicy;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidConfig {
    /// Base image width in pixels.
    pub width: u32,
    /// Base image height in pixels.
    pub height: u32,
    /// Tile width (and height, unless `y_tile_size` is set).
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,
    /// Separate tile height for non-square tiles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y_tile_size: Option<u32>,
    /// Explicit level count; inferred from the scaling policy when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub levels: Option<usize>,
    #[serde(default)]
    pub policy: ScalingPolicy,
    #[serde(default)]
    pub naming: NamingScheme,
}

fn default_tile_size() -> u32 {
    DEFAULT_TILE_SIZE
}

impl Default for PyramidConfig {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            tile_size: DEFAULT_TILE_SIZE,
            y_tile_size: None,
            levels: None,
            policy: ScalingPolicy::default(),
            naming: NamingScheme::default(),
        }
    }
}

/// Image descriptor as returned by a tile server's metadata endpoint.
///
/// Only the geometry fields matter here; anything else in the JSON
/// document is ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub tile_size: Option<u32>,
    #[serde(default)]
    pub levels: Option<usize>,
}

impl ImageInfo {
    /// Parse a JSON descriptor document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Turn the descriptor into a pyramid configuration, keeping the
    /// given policy and naming scheme.
    pub fn into_config(self, policy: ScalingPolicy, naming: NamingScheme) -> PyramidConfig {
        PyramidConfig {
            width: self.width,
            height: self.height,
            tile_size: self.tile_size.unwrap_or(DEFAULT_TILE_SIZE),
            y_tile_size: None,
            levels: self.levels,
            policy,
            naming,
        }
    }
}
