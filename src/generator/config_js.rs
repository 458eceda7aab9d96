//! `eventcatalog.config.js` rendering.
//!
//! # Format
//!
//! ```js
//! // Generated by evcat from eventcatalog.toml. Do not edit.
//! module.exports = {
//!   "title": "Bank Account",
//!   ...
//! };
//! ```
//!
//! The object is plain JSON, which is a valid JS expression, so string
//! escaping follows `serde_json`.

use crate::config::SiteConfig;
use anyhow::{Context, Result};

/// Render the CommonJS module for `config`.
pub fn render(config: &SiteConfig) -> Result<String> {
    let object =
        serde_json::to_string_pretty(config).context("failed to serialize config as JS")?;

    let source = config
        .config_path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "preset".to_string());

    Ok(format!(
        "// Generated by evcat from {source}. Do not edit.\nmodule.exports = {object};\n"
    ))
}
