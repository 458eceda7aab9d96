//! evcat - load, validate and export EventCatalog site configuration.

#![allow(dead_code)]

mod catalog;
mod cli;
mod config;
mod generator;
mod logger;
mod utils;

use anyhow::Result;
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;

fn main() {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => {} // owo-colors auto-detects TTY
    }
    logger::set_verbose(cli.verbose);

    if let Err(e) = run(&cli) {
        log!("error"; "{:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    match &cli.command {
        Commands::Init { dir, dry } => cli::init::new_config(dir.as_deref(), cli.preset, *dry),
        Commands::Check { .. } => cli::check::check_config(&SiteConfig::load(cli)?),
        Commands::Export { format, output } => {
            cli::export::export_config(&SiteConfig::load(cli)?, *format, output.as_deref())
        }
        Commands::Catalog { dir, warn_only } => {
            cli::catalog::check_catalog(&SiteConfig::load(cli)?, dir, *warn_only)
        }
    }
}
