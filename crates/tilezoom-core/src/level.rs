use serde::{Deserialize, Serialize};

use crate::consts::ceil_div;

/// One resolution step in a tile pyramid.
///
/// Level 0 is the most downsampled; the last level is full resolution.
/// The tile grid is the ceiling division of the level dimensions by the
/// tile size, so edge tiles may be smaller than `x_tile_size x y_tile_size`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PyramidLevel {
    /// Position in the pyramid, 0 = coarsest.
    pub index: usize,
    /// Level width in pixels.
    pub width: u32,
    /// Level height in pixels.
    pub height: u32,
    /// Tile width in pixels.
    pub x_tile_size: u32,
    /// Tile height in pixels.
    pub y_tile_size: u32,
    /// Number of tile columns, `ceil(width / x_tile_size)`.
    pub x_tiles: u64,
    /// Number of tile rows, `ceil(height / y_tile_size)`.
    pub y_tiles: u64,
}

impl PyramidLevel {
    pub(crate) fn new(
        index: usize,
        width: u32,
        height: u32,
        x_tile_size: u32,
        y_tile_size: u32,
    ) -> Self {
        Self {
            index,
            width,
            height,
            x_tile_size,
            y_tile_size,
            x_tiles: ceil_div(width, x_tile_size),
            y_tiles: ceil_div(height, y_tile_size),
        }
    }

    /// Total tiles at this level.
    pub fn tiles(&self) -> u64 {
        self.x_tiles * self.y_tiles
    }

    /// Whether (x, y) is a valid tile coordinate at this level.
    pub fn contains(&self, x: u64, y: u64) -> bool {
        x < self.x_tiles && y < self.y_tiles
    }

    /// Tile coordinate ranges (inclusive) covering a pixel region.
    ///
    /// The region is clamped to the level extents, so a viewport hanging
    /// past the image edge still maps to valid tiles. Returns `None` for
    /// an empty region (zero-size or entirely outside the level).
    pub fn tile_range(
        &self,
        x0: u32,
        y0: u32,
        x1: u32,
        y1: u32,
    ) -> Option<(std::ops::RangeInclusive<u64>, std::ops::RangeInclusive<u64>)> {
        if x0 >= self.width || y0 >= self.height || x1 <= x0 || y1 <= y0 {
            return None;
        }
        let x1 = x1.min(self.width);
        let y1 = y1.min(self.height);
        let first_col = u64::from(x0 / self.x_tile_size);
        let first_row = u64::from(y0 / self.y_tile_size);
        let last_col = u64::from((x1 - 1) / self.x_tile_size);
        let last_row = u64::from((y1 - 1) / self.y_tile_size);
        Some((first_col..=last_col, first_row..=last_row))
    }
}

/// Position of a tile within the pyramid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileCoord {
    pub level: usize,
    pub x: u64,
    pub y: u64,
}
