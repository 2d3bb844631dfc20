//! Command-line interface definitions.
//!
//! Defines the CLI arguments using clap. There are no subcommands: a run
//! always stages assets, combines module pages and fixes every page.

use clap::Parser;
use std::path::PathBuf;

/// Post-process generated API documentation in place
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Project root (asset sources and fragments resolve against it)
    #[arg(short, long)]
    pub root: Option<PathBuf>,

    /// Config file name, relative to root (default: docfix.toml)
    #[arg(short = 'C', long, default_value = "docfix.toml")]
    pub config: PathBuf,

    /// Documentation directory (relative to project root)
    #[arg(short, long)]
    pub docs: Option<PathBuf>,
}
