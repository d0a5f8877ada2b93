pub mod config;
pub mod info;
pub mod locate;
pub mod tiles;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Args, ValueEnum};
use tilezoom_core::{ImageInfo, NamingScheme, PyramidConfig, ScalingPolicy};

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    PowerOfTwo,
    EvenSubdivision,
}

impl From<PolicyArg> for ScalingPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::PowerOfTwo => ScalingPolicy::PowerOfTwo,
            PolicyArg::EvenSubdivision => ScalingPolicy::EvenSubdivision,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum NamingArg {
    Zoomify,
    Imgcnv,
    Bisque,
}

impl From<NamingArg> for NamingScheme {
    fn from(arg: NamingArg) -> Self {
        match arg {
            NamingArg::Zoomify => NamingScheme::Zoomify,
            NamingArg::Imgcnv => NamingScheme::Imgcnv,
            NamingArg::Bisque => NamingScheme::Bisque,
        }
    }
}

/// Image geometry source shared by the pyramid-building subcommands:
/// a TOML config file, a JSON descriptor, or inline flags.
#[derive(Args)]
pub struct GeometryArgs {
    /// Pyramid config file (TOML)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Image descriptor file (JSON, as served by a metadata endpoint)
    #[arg(long)]
    pub descriptor: Option<PathBuf>,

    /// Base image width in pixels
    #[arg(long)]
    pub width: Option<u32>,

    /// Base image height in pixels
    #[arg(long)]
    pub height: Option<u32>,

    /// Tile size in pixels
    #[arg(long, default_value = "256")]
    pub tile_size: u32,

    /// Separate tile height for non-square tiles
    #[arg(long)]
    pub y_tile_size: Option<u32>,

    /// Explicit level count (inferred when omitted)
    #[arg(long)]
    pub levels: Option<usize>,

    /// Level scaling policy
    #[arg(long, value_enum, default_value = "power-of-two")]
    pub policy: PolicyArg,

    /// Tile naming scheme
    #[arg(long, value_enum, default_value = "zoomify")]
    pub naming: NamingArg,
}

impl GeometryArgs {
    pub fn resolve(&self) -> Result<PyramidConfig> {
        if let Some(ref path) = self.config {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            return toml::from_str(&contents).context("Invalid pyramid config");
        }
        if let Some(ref path) = self.descriptor {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read descriptor {}", path.display()))?;
            let info = ImageInfo::from_json(&contents).context("Invalid image descriptor")?;
            return Ok(info.into_config(self.policy.into(), self.naming.into()));
        }
        let (Some(width), Some(height)) = (self.width, self.height) else {
            bail!("Specify --width and --height, or --config, or --descriptor");
        };
        Ok(PyramidConfig {
            width,
            height,
            tile_size: self.tile_size,
            y_tile_size: self.y_tile_size,
            levels: self.levels,
            policy: self.policy.into(),
            naming: self.naming.into(),
        })
    }
}
