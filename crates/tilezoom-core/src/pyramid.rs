//! Multi-resolution tile pyramid geometry.
//!
//! A [`TilePyramid`] maps a base image's dimensions to an ordered set of
//! resolution levels and gives every tile a single global index, counted
//! level-major (coarsest level first) and row-major within a level. The
//! pyramid is built once from a [`PyramidConfig`] and never mutated; all
//! queries are pure.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PyramidConfig;
use crate::consts::min_level_extent;
use crate::error::{Result, TilezoomError};
use crate::level::{PyramidLevel, TileCoord};

/// How level dimensions shrink from full resolution down to level 0.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScalingPolicy {
    /// Halve width and height per level (Zoomify/Imgcnv-style).
    #[default]
    PowerOfTwo,
    /// Scale dimensions in equal increments across the level count
    /// (Bisque-style grid subdivision).
    EvenSubdivision,
}

impl std::fmt::Display for ScalingPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScalingPolicy::PowerOfTwo => write!(f, "Power of Two"),
            ScalingPolicy::EvenSubdivision => write!(f, "Even Subdivision"),
        }
    }
}

/// Immutable level stack for one image, ordered coarsest to finest.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TilePyramid {
    levels: Vec<PyramidLevel>,
    x_tile_size: u32,
    y_tile_size: u32,
}

impl TilePyramid {
    /// Build a power-of-two pyramid with square tiles and an inferred
    /// level count.
    pub fn new(width: u32, height: u32, tile_size: u32) -> Result<Self> {
        Self::build(&PyramidConfig {
            width,
            height,
            tile_size,
            ..PyramidConfig::default()
        })
    }

    /// Build a pyramid from a full configuration.
    ///
    /// Fails fast on non-positive dimensions or tile sizes, or an explicit
    /// level count of zero; no partial pyramid is produced.
    pub fn build(config: &PyramidConfig) -> Result<Self> {
        if config.width == 0 || config.height == 0 {
            return Err(TilezoomError::InvalidDimensions {
                width: config.width,
                height: config.height,
            });
        }
        let x_tile_size = config.tile_size;
        let y_tile_size = config.y_tile_size.unwrap_or(config.tile_size);
        if x_tile_size == 0 || y_tile_size == 0 {
            return Err(TilezoomError::InvalidTileSize {
                x: x_tile_size,
                y: y_tile_size,
            });
        }
        if config.levels == Some(0) {
            return Err(TilezoomError::InvalidLevelCount(0));
        }

        let dims = match config.policy {
            ScalingPolicy::PowerOfTwo => {
                halved_dims(config.width, config.height, x_tile_size, y_tile_size, config.levels)
            }
            ScalingPolicy::EvenSubdivision => {
                let count = config.levels.unwrap_or_else(|| {
                    halved_dims(config.width, config.height, x_tile_size, y_tile_size, None).len()
                });
                subdivided_dims(config.width, config.height, count)
            }
        };

        let levels: Vec<PyramidLevel> = dims
            .into_iter()
            .enumerate()
            .map(|(index, (w, h))| PyramidLevel::new(index, w, h, x_tile_size, y_tile_size))
            .collect();

        let pyramid = Self {
            levels,
            x_tile_size,
            y_tile_size,
        };
        debug!(
            "built {} pyramid: {} levels, {} tiles, base {}x{}",
            config.policy,
            pyramid.level_count(),
            pyramid.total_tiles(),
            config.width,
            config.height
        );
        Ok(pyramid)
    }

    /// Number of levels.
    pub fn level_count(&self) -> usize {
        self.levels.len()
    }

    /// Index of the full-resolution level.
    pub fn max_level(&self) -> usize {
        self.levels.len() - 1
    }

    /// Tile width in pixels.
    pub fn x_tile_size(&self) -> u32 {
        self.x_tile_size
    }

    /// Tile height in pixels.
    pub fn y_tile_size(&self) -> u32 {
        self.y_tile_size
    }

    /// The level at index `n`.
    ///
    /// An index past the last level clamps to the full-resolution level
    /// rather than failing; viewers routinely ask one zoom step past the
    /// deepest level they were told about.
    pub fn level(&self, n: usize) -> &PyramidLevel {
        &self.levels[n.min(self.max_level())]
    }

    /// Iterate levels from coarsest to finest.
    pub fn levels(&self) -> impl Iterator<Item = &PyramidLevel> {
        self.levels.iter()
    }

    /// Sum of tiles over all levels strictly below `n`.
    pub fn tiles_below(&self, n: usize) -> u64 {
        self.levels.iter().take(n).map(PyramidLevel::tiles).sum()
    }

    /// Total tiles across the whole pyramid.
    pub fn total_tiles(&self) -> u64 {
        self.tiles_below(self.level_count())
    }

    /// Global index of the tile at (x, y) on `level`.
    ///
    /// Indices run level-major from the coarsest level, row-major within
    /// a level, forming a bijection onto `0..total_tiles()`. The level is
    /// clamped like [`TilePyramid::level`]; out-of-range x/y is an error.
    pub fn tile_index(&self, level: usize, x: u64, y: u64) -> Result<u64> {
        let lvl = self.level(level);
        if !lvl.contains(x, y) {
            return Err(TilezoomError::TileOutOfRange {
                level: lvl.index,
                x,
                y,
                x_tiles: lvl.x_tiles,
                y_tiles: lvl.y_tiles,
            });
        }
        Ok(x + y * lvl.x_tiles + self.tiles_below(lvl.index))
    }

    /// Inverse of [`TilePyramid::tile_index`]: the (level, x, y) position
    /// of a global tile index.
    pub fn locate(&self, index: u64) -> Result<TileCoord> {
        let mut remaining = index;
        for lvl in &self.levels {
            if remaining < lvl.tiles() {
                return Ok(TileCoord {
                    level: lvl.index,
                    x: remaining % lvl.x_tiles,
                    y: remaining / lvl.x_tiles,
                });
            }
            remaining -= lvl.tiles();
        }
        Err(TilezoomError::TileIndexOutOfRange {
            index,
            total: self.total_tiles(),
        })
    }
}

/// Halve dimensions per level, coarsest first.
///
/// With an explicit count, exactly `count - 1` halvings are taken (a count
/// of 1 skips halving). Otherwise halving continues until both dimensions
/// fit under the minimum level extent for their tile size.
fn halved_dims(
    width: u32,
    height: u32,
    x_tile_size: u32,
    y_tile_size: u32,
    count: Option<usize>,
) -> Vec<(u32, u32)> {
    let mut dims = vec![(width, height)];
    let (mut w, mut h) = (width, height);
    match count {
        Some(n) => {
            for _ in 1..n {
                w = (w / 2).max(1);
                h = (h / 2).max(1);
                dims.push((w, h));
            }
        }
        None => {
            let min_w = min_level_extent(x_tile_size);
            let min_h = min_level_extent(y_tile_size);
            while w > min_w || h > min_h {
                w = (w / 2).max(1);
                h = (h / 2).max(1);
                dims.push((w, h));
            }
        }
    }
    dims.reverse();
    dims
}

/// Scale dimensions in equal increments over `count` levels, coarsest
/// first. Level `i` spans `ceil(dim * (i + 1) / count)` pixels, so the top
/// level is always the full resolution.
fn subdivided_dims(width: u32, height: u32, count: usize) -> Vec<(u32, u32)> {
    let n = count as u64;
    (1..=n)
        .map(|i| {
            let w = (u64::from(width) * i).div_ceil(n).max(1) as u32;
            let h = (u64::from(height) * i).div_ceil(n).max(1) as u32;
            (w, h)
        })
        .collect()
}
