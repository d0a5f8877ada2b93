//! Tile addressing strategies.
//!
//! Each scheme is a pure formatting function over (level, x, y) and the
//! pyramid's tile counts; callers attach a base URL themselves.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pyramid::TilePyramid;

/// Naming convention mapping a tile position to a resource identifier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamingScheme {
    /// `TileGroup{g}/{level}-{x}-{y}.jpg`, where groups advance every
    /// `tile_size` tiles of global index.
    #[default]
    Zoomify,
    /// Zero-padded `{level:03}_{x:03}_{y:03}.jpg`.
    Imgcnv,
    /// Query-string form `tile={level},{x},{y},{xsize},{ysize}`.
    Bisque,
}

impl std::fmt::Display for NamingScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NamingScheme::Zoomify => write!(f, "Zoomify"),
            NamingScheme::Imgcnv => write!(f, "Imgcnv"),
            NamingScheme::Bisque => write!(f, "Bisque"),
        }
    }
}

impl NamingScheme {
    /// Format the address of the tile at (x, y) on `level`.
    ///
    /// Validates x/y against the level grid (via the global index for
    /// Zoomify, directly for the others), so a malformed address is never
    /// produced.
    pub fn filename(&self, pyramid: &TilePyramid, level: usize, x: u64, y: u64) -> Result<String> {
        let index = pyramid.tile_index(level, x, y)?;
        let lvl = pyramid.level(level);
        Ok(match self {
            NamingScheme::Zoomify => {
                let group = index / u64::from(pyramid.x_tile_size());
                format!("TileGroup{}/{}-{}-{}.jpg", group, lvl.index, x, y)
            }
            NamingScheme::Imgcnv => format!("{:03}_{:03}_{:03}.jpg", lvl.index, x, y),
            NamingScheme::Bisque => format!(
                "tile={},{},{},{},{}",
                lvl.index,
                x,
                y,
                lvl.x_tile_size,
                lvl.y_tile_size
            ),
        })
    }
}

impl TilePyramid {
    /// Address of the tile at (x, y) on `level` under `scheme`.
    pub fn tile_filename(
        &self,
        scheme: NamingScheme,
        level: usize,
        x: u64,
        y: u64,
    ) -> Result<String> {
        scheme.filename(self, level, x, y)
    }
}
