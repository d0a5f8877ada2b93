use anyhow::Result;
use clap::Args;
use tilezoom_core::TilePyramid;

use super::GeometryArgs;

#[derive(Args)]
pub struct LocateArgs {
    /// Global tile index to look up
    pub index: u64,

    #[command(flatten)]
    pub geometry: GeometryArgs,
}

pub fn run(args: &LocateArgs) -> Result<()> {
    let config = args.geometry.resolve()?;
    let naming = config.naming;
    let pyramid = TilePyramid::build(&config)?;

    let coord = pyramid.locate(args.index)?;
    let lvl = pyramid.level(coord.level);
    let name = pyramid.tile_filename(naming, coord.level, coord.x, coord.y)?;

    println!("Index:       {}", args.index);
    println!("Level:       {} ({}x{} px)", coord.level, lvl.width, lvl.height);
    println!("Tile:        ({}, {}) of {}x{}", coord.x, coord.y, lvl.x_tiles, lvl.y_tiles);
    println!("Address:     {}", name);

    Ok(())
}
