//! Command-line interface definitions.

use crate::{config::Preset, generator::ExportFormat};
use clap::{ColorChoice, Parser, Subcommand};
use std::path::{Path, PathBuf};

/// EventCatalog site configuration tool
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (default: search upward for eventcatalog.toml)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Use a built-in site instead of a config file (bank-account, lunar-frontiers)
    #[arg(long, global = true, conflicts_with = "config")]
    pub preset: Option<Preset>,

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
    /// Load and validate the site config
    #[command(visible_alias = "c")]
    Check {
        /// Treat unknown fields as errors
        #[arg(long)]
        strict: bool,
    },

    /// Render the config for the catalog generator
    #[command(visible_alias = "e")]
    Export {
        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: ExportFormat,

        /// Write output to file instead of stdout
        #[arg(short, long, value_hint = clap::ValueHint::FilePath)]
        output: Option<PathBuf>,
    },

    /// Write a new eventcatalog.toml
    #[command(visible_alias = "i")]
    Init {
        /// Target directory (default: current directory)
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: Option<PathBuf>,

        /// Print the config to stdout instead of writing it
        #[arg(long)]
        dry: bool,
    },

    /// Check catalog pages against the site config
    Catalog {
        /// Catalog root containing events/ and services/
        #[arg(value_hint = clap::ValueHint::DirPath)]
        dir: PathBuf,

        /// Treat findings as warnings instead of errors
        #[arg(long, short = 'w')]
        warn_only: bool,
    },
}

impl Cli {
    /// Whether unknown config fields are errors.
    pub const fn is_strict(&self) -> bool {
        matches!(self.command, Commands::Check { strict: true })
    }

    /// Directory to start the config search from, if not the cwd.
    pub fn search_dir(&self) -> Option<&Path> {
        match &self.command {
            Commands::Catalog { dir, .. } => Some(dir.as_path()),
            _ => None,
        }
    }
}
