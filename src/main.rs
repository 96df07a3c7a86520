//! progmem - embed static web assets into firmware sources.

mod asset;
mod cli;
mod config;
mod emit;
mod logger;
mod utils;
mod zones;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::ToolConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }

    let config = ToolConfig::load(&cli)?;
    if let Some(path) = &config.config_path {
        debug!("config"; "using {}", path.display());
    }

    let output = cli.output();
    match &cli.command {
        Commands::Table { dir, .. } => cli::embed::run_table(dir, &config, output),
        Commands::Routes { files, root, .. } => {
            cli::embed::run_routes(files, root.as_deref(), &config, output)
        }
        Commands::Zones { .. } => cli::zones::run_zones(&config, output),
    }
}
