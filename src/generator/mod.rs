//! Config generators for the EventCatalog site.
//!
//! Renders a validated [`SiteConfig`] in the forms the catalog tooling
//! consumes:
//!
//! - **JS**: `eventcatalog.config.js`, read by the catalog generator
//! - **JSON**: the same object, for tools that can't evaluate JS
//! - **TOML**: our own format, reloads to an equal config
//!
//! Keys keep declaration order in every format, so `footerLinks` and
//! `users` come out exactly as written.

mod config_js;

use crate::config::SiteConfig;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::{fmt, fs, path::Path};

/// Output format for `evcat export`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    #[default]
    Js,
    Json,
    Toml,
}

impl ExportFormat {
    /// Conventional file name for this format.
    pub const fn file_name(self) -> &'static str {
        match self {
            Self::Js => "eventcatalog.config.js",
            Self::Json => "eventcatalog.json",
            Self::Toml => "eventcatalog.toml",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Js => "js",
            Self::Json => "json",
            Self::Toml => "toml",
        })
    }
}

/// Render `config` in `format`.
///
/// Refuses configs that fail validation, so nothing malformed reaches the
/// catalog generator.
pub fn render(config: &SiteConfig, format: ExportFormat) -> Result<String> {
    config.validate()?;

    let rendered = match format {
        ExportFormat::Js => config_js::render(config)?,
        ExportFormat::Json => {
            let mut json = serde_json::to_string_pretty(config)
                .context("failed to serialize config as JSON")?;
            json.push('\n');
            json
        }
        ExportFormat::Toml => {
            toml::to_string_pretty(config).context("failed to serialize config as TOML")?
        }
    };
    Ok(rendered)
}

/// Write rendered output to `path`, or stdout when `None`.
pub fn write_output(rendered: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => fs::write(path, rendered)
            .with_context(|| format!("failed to write '{}'", path.display())),
        None => {
            print!("{rendered}");
            Ok(())
        }
    }
}
