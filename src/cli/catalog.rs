//! `evcat catalog`: check catalog pages against the site config.

use crate::{
    catalog::{CatalogSite, EntityType},
    config::SiteConfig,
    log,
    utils::plural::plural_count,
};
use anyhow::{Context, Result, bail};
use std::path::Path;

/// Scan `dir` and report findings.
///
/// Findings fail the command unless `warn_only` is set.
pub fn check_catalog(config: &SiteConfig, dir: &Path, warn_only: bool) -> Result<()> {
    let site = CatalogSite::from_directory(dir)
        .with_context(|| format!("failed to read catalog '{}'", dir.display()))?;
    let report = site.check(config);

    crate::debug_do! {
        for service in &site.services {
            let (inbound, outbound) = site.inbound_outbound(service);
            crate::debug!(
                "catalog";
                "{} ({}): {} in, {} out",
                service.name,
                EntityType::of_service(&service.tags),
                plural_count(inbound.len(), "event"),
                plural_count(outbound.len(), "event")
            );
        }
    }

    let scanned = format!(
        "{} and {}",
        plural_count(site.events.len(), "event"),
        plural_count(site.services.len(), "service")
    );

    if report.is_clean() {
        log!("catalog"; "checked {}, no problems found", scanned);
        return Ok(());
    }

    let problems = plural_count(report.findings().len(), "problem");
    if warn_only {
        log!("warning"; "{} in {}:", problems, scanned);
        eprint!("{report}");
        return Ok(());
    }
    bail!("{} in {}:\n{}", problems, scanned, report.to_string().trim_end())
}
