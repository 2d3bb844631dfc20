//! docfix - post-processing for generated API documentation.

mod assets;
mod build;
mod cli;
mod combine;
mod config;
mod error;
mod html;
mod logger;
mod search;

use anyhow::Result;
use build::build_docs;
use clap::Parser;
use cli::Cli;
use config::DocsConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = DocsConfig::load(&cli)?;

    build_docs(&config).inspect_err(|err| log!("error"; "{:#}", err))
}
