use anyhow::Result;
use clap::Args;
use tilezoom_core::TilePyramid;

use super::GeometryArgs;

#[derive(Args)]
pub struct InfoArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,
}

pub fn run(args: &InfoArgs) -> Result<()> {
    let config = args.geometry.resolve()?;
    let pyramid = TilePyramid::build(&config)?;
    crate::summary::print_pyramid_summary(&config, &pyramid);
    Ok(())
}
