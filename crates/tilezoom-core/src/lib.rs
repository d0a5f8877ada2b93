pub mod config;
pub mod consts;
pub mod error;
pub mod level;
pub mod naming;
pub mod pyramid;

pub use config::{ImageInfo, PyramidConfig};
pub use error::{Result, TilezoomError};
pub use level::{PyramidLevel, TileCoord};
pub use naming::NamingScheme;
pub use pyramid::{ScalingPolicy, TilePyramid};
