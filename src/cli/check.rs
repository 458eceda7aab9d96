//! `evcat check`: load and validate the site config.

use crate::{config::SiteConfig, log, utils::plural::plural_count};
use anyhow::Result;

/// Print a one-line summary of a config that passed validation.
pub fn check_config(config: &SiteConfig) -> Result<()> {
    let source = if config.config_path.as_os_str().is_empty() {
        "preset".to_string()
    } else {
        config.config_path.display().to_string()
    };

    log!(
        "check";
        "`{}` ({}) is valid: {}, {}",
        config.title,
        source,
        plural_count(config.footer_links.len(), "footer link"),
        plural_count(config.users.len(), "user")
    );
    Ok(())
}
