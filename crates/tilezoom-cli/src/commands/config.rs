use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tilezoom_core::{NamingScheme, PyramidConfig, ScalingPolicy};

#[derive(Args)]
pub struct ConfigArgs {
    /// Write config to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Print or save a full default PyramidConfig as TOML.
pub fn run(args: &ConfigArgs) -> Result<()> {
    let config = PyramidConfig {
        width: 4096,
        height: 4096,
        levels: None,
        policy: ScalingPolicy::PowerOfTwo,
        naming: NamingScheme::Zoomify,
        ..PyramidConfig::default()
    };
    let toml_str = toml::to_string_pretty(&config)?;

    if let Some(ref path) = args.output {
        std::fs::write(path, &toml_str)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        println!("Default config saved to {}", path.display());
    } else {
        print!("{}", toml_str);
    }

    Ok(())
}
