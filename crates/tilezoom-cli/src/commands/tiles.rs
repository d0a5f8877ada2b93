use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use tilezoom_core::{NamingScheme, TilePyramid};
use tracing::debug;

use super::GeometryArgs;

#[derive(Args)]
pub struct TilesArgs {
    #[command(flatten)]
    pub geometry: GeometryArgs,

    /// Only emit tiles for this level (whole pyramid when omitted)
    #[arg(long)]
    pub level: Option<usize>,

    /// Prefix every address with this base URL
    #[arg(long)]
    pub base_url: Option<String>,

    /// Write addresses to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn run(args: &TilesArgs) -> Result<()> {
    let config = args.geometry.resolve()?;
    let naming = config.naming;
    let pyramid = TilePyramid::build(&config)?;

    let levels: Vec<usize> = match args.level {
        Some(n) => vec![pyramid.level(n).index],
        None => (0..pyramid.level_count()).collect(),
    };
    let total: u64 = levels.iter().map(|&n| pyramid.level(n).tiles()).sum();
    let base = args.base_url.as_deref().unwrap_or("");
    debug!("emitting {} addresses across {} level(s)", total, levels.len());

    match args.output {
        Some(ref path) => {
            let file = std::fs::File::create(path)
                .with_context(|| format!("Failed to create {}", path.display()))?;
            let mut out = std::io::BufWriter::new(file);

            let pb = ProgressBar::new(total);
            pb.set_style(
                ProgressStyle::default_bar()
                    .template("{msg} [{bar:40}] {pos}/{len}")?
                    .progress_chars("=> "),
            );
            pb.set_message("Writing tile list");

            for_each_address(&pyramid, &levels, naming, base, |addr| {
                writeln!(out, "{addr}")?;
                pb.inc(1);
                Ok(())
            })?;
            pb.finish_with_message(format!("{} addresses -> {}", total, path.display()));
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            for_each_address(&pyramid, &levels, naming, base, |addr| {
                writeln!(out, "{addr}")?;
                Ok(())
            })?;
        }
    }

    Ok(())
}

fn for_each_address(
    pyramid: &TilePyramid,
    levels: &[usize],
    naming: NamingScheme,
    base: &str,
    mut emit: impl FnMut(&str) -> Result<()>,
) -> Result<()> {
    for &n in levels {
        let lvl = pyramid.level(n);
        for y in 0..lvl.y_tiles {
            for x in 0..lvl.x_tiles {
                let name = pyramid.tile_filename(naming, n, x, y)?;
                emit(&format!("{base}{name}"))?;
            }
        }
    }
    Ok(())
}
