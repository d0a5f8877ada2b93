use thiserror::Error;

#[derive(Error, Debug)]
pub enum TilezoomError {
    #[error("Invalid image dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Invalid tile size: {x}x{y}")]
    InvalidTileSize { x: u32, y: u32 },

    #[error("Invalid level count: {0}")]
    InvalidLevelCount(usize),

    #[error("Tile ({x}, {y}) out of range at level {level} (grid: {x_tiles}x{y_tiles})")]
    TileOutOfRange {
        level: usize,
        x: u64,
        y: u64,
        x_tiles: u64,
        y_tiles: u64,
    },

    #[error("Tile index {index} out of range (total: {total})")]
    TileIndexOutOfRange { index: u64, total: u64 },

    #[error("Invalid image descriptor: {0}")]
    InvalidDescriptor(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TilezoomError>;
