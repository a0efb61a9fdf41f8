//! webembed - round-trip tooling for web assets embedded in a firmware header.

mod asset;
mod cli;
mod config;
mod embed;
mod logger;
mod utils;
mod validate;

use anyhow::Result;
use asset::NativeTransformer;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ToolConfig;
use utils::date::DateTimeUtc;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    let config = ToolConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "using {}", path.display());
    }
    debug!("config"; "project root {}", config.root.display());

    let transformer = NativeTransformer::new(config.beautify_style(), config.minify.compress);

    match &cli.command {
        Commands::Extract => {
            cli::extract::run_extract(&config, &transformer, Some(DateTimeUtc::now())).map(|_| ())
        }
        Commands::Minify { dry_run } => {
            cli::minify::run_minify(&config, &transformer, *dry_run).map(|_| ())
        }
        Commands::Validate { path } => cli::validate::run_validate(&config, path.as_deref()),
    }
}
