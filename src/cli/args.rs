//! Command-line interface definitions.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Round-trip tooling for web assets embedded in a firmware C++ header
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: nearest webembed.toml, if any)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Project root (default: directory of the config file, else cwd)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Enable verbose output for debugging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// subcommands
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Extract embedded CSS/JS from the header into editable source files
    #[command(visible_alias = "e")]
    Extract,

    /// Minify edited sources and inject them back into the header
    #[command(visible_alias = "inject")]
    Minify {
        /// Report what would change without writing the header
        #[arg(short = 'n', long)]
        dry_run: bool,
    },

    /// Validate the reference HTML template
    Validate {
        /// Template to check (default: `paths.template` from config)
        #[arg(value_name = "PATH", value_hint = clap::ValueHint::FilePath)]
        path: Option<PathBuf>,
    },
}
