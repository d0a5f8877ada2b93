/// Default tile edge length in pixels, shared by all naming schemes.
pub const DEFAULT_TILE_SIZE: u32 = 256;

/// Smallest dimension (in pixels) that still gets its own pyramid level.
///
/// Halving stops once both dimensions fit under `tile_size / 2 + 1`,
/// so the coarsest level is never a degenerate sliver of a tile.
pub fn min_level_extent(tile_size: u32) -> u32 {
    tile_size / 2 + 1
}

/// Ceiling division for tile-grid extents.
pub fn ceil_div(value: u32, divisor: u32) -> u64 {
    (u64::from(value) + u64::from(divisor) - 1) / u64::from(divisor)
}
