mod commands;
mod summary;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tilezoom", about = "Deep-zoom tile pyramid addressing tool")]
#[command(version)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show pyramid geometry for an image
    Info(commands::info::InfoArgs),
    /// Emit tile addresses for one level or the whole pyramid
    Tiles(commands::tiles::TilesArgs),
    /// Map a global tile index back to level/x/y
    Locate(commands::locate::LocateArgs),
    /// Print or save a default pyramid config
    Config(commands::config::ConfigArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match &cli.command {
        Commands::Info(args) => commands::info::run(args),
        Commands::Tiles(args) => commands::tiles::run(args),
        Commands::Locate(args) => commands::locate::run(args),
        Commands::Config(args) => commands::config::run(args),
    }
}
