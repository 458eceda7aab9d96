//! `evcat init`: write a new `eventcatalog.toml`.

use crate::{
    config::{
        CONFIG_FILE_NAMES, Preset, SiteConfig,
        section::{LinkConfig, UserConfig},
    },
    log,
    utils::path::expand_path,
};
use anyhow::{Context, Result, bail};
use std::{fs, path::Path};

/// Write a config into `dir` (default: cwd), or print it when `dry_run`.
///
/// Without a preset the file is a commented template generated from the
/// field docs. Never overwrites an existing config.
pub fn new_config(dir: Option<&Path>, preset: Option<Preset>, dry_run: bool) -> Result<()> {
    let content = match preset {
        Some(preset) => preset_config(preset)?,
        None => generate_config_template(),
    };

    if dry_run {
        print!("{content}");
        return Ok(());
    }

    let root = match dir {
        Some(dir) => expand_path(dir),
        None => std::env::current_dir()?,
    };
    let path = write_config(&root, &content)?;
    log!("init"; "wrote {}", path.display());
    Ok(())
}

/// Write `content` as `root/eventcatalog.toml`, creating `root` if needed.
fn write_config(root: &Path, content: &str) -> Result<std::path::PathBuf> {
    let path = root.join(CONFIG_FILE_NAMES[0]);
    if path.exists() {
        bail!(
            "'{}' already exists.\n\
             Remove it first or edit it in place.",
            path.display()
        );
    }

    fs::create_dir_all(root)
        .with_context(|| format!("Failed to create directory '{}'", root.display()))?;
    fs::write(&path, content)
        .with_context(|| format!("Failed to write config file '{}'", path.display()))?;
    Ok(path)
}

fn header() -> String {
    format!(
        "# EventCatalog site configuration (evcat v{})\n\
         # Run `evcat export` to produce eventcatalog.config.js.\n\n",
        env!("CARGO_PKG_VERSION")
    )
}

/// A preset rendered as a complete config file.
fn preset_config(preset: Preset) -> Result<String> {
    let body = toml::to_string_pretty(&preset.config())
        .with_context(|| format!("failed to render preset `{preset}`"))?;
    Ok(format!("{}{body}", header()))
}

/// Generate eventcatalog.toml content with comments
pub fn generate_config_template() -> String {
    let mut out = header();

    // Root keys, generators and [logo]
    out.push_str(&SiteConfig::template_with_header());
    out.push('\n');

    out.push_str("# Call-to-action links on the landing page.\n");
    out.push_str(&comment_out(&format!(
        "[primaryCTA]\n{}",
        LinkConfig::template()
    )));
    out.push('\n');
    out.push_str(&comment_out(&format!(
        "[secondaryCTA]\n{}",
        LinkConfig::template()
    )));
    out.push('\n');

    out.push_str("# Footer links, rendered in order. At least one is required.\n");
    out.push_str("[[footerLinks]]\n");
    out.push_str(&LinkConfig::template());
    out.push('\n');

    out.push_str("# Contributors, referenced by `owners` in catalog pages.\n");
    out.push_str(&comment_out(&format!("[[users]]\n{}", UserConfig::template())));

    out
}

/// Prefix every line that isn't already a comment with `# `.
fn comment_out(text: &str) -> String {
    text.lines()
        .map(|line| {
            if line.starts_with('#') {
                format!("{line}\n")
            } else {
                format!("# {line}\n")
            }
        })
        .collect()
}
