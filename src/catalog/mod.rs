//! EventCatalog content directory.
//!
//! Reads the pages the site config describes and cross-checks them:
//!
//! ```text
//! <catalog>/
//! ├── eventcatalog.toml
//! ├── events/
//! │   └── AccountCreated/
//! │       ├── index.md      # EventFrontMatter
//! │       └── schema.json   # keyed by "title"
//! └── services/
//!     └── Bank Account Aggregate/
//!         └── index.md      # ServiceFrontMatter
//! ```

mod entity;
mod frontmatter;

pub use entity::{Entity, EntityType};
pub use frontmatter::{EventFrontMatter, FrontMatter, ServiceFrontMatter};

use crate::config::SiteConfig;
use rustc_hash::FxHashSet;
use serde_json::Value;
use std::{
    collections::BTreeMap,
    fmt, fs, io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Catalog reading errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error when reading `{}`", .0.display())]
    Io(PathBuf, #[source] io::Error),

    #[error("invalid front matter in `{}`: {message}", .path.display())]
    FrontMatter { path: PathBuf, message: String },

    #[error("invalid schema `{}`: {message}", .path.display())]
    Schema { path: PathBuf, message: String },
}

/// Pages of a catalog, in directory name order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogSite {
    pub events: Vec<EventFrontMatter>,
    pub services: Vec<ServiceFrontMatter>,
    /// Event schemas keyed by their `title`.
    pub schemas: BTreeMap<String, Value>,
}

impl CatalogSite {
    /// Read every page under `root`.
    ///
    /// A missing `events/` or `services/` directory counts as empty.
    pub fn from_directory(root: &Path) -> Result<Self, CatalogError> {
        let mut site = Self::default();

        for dir in entry_dirs(&root.join("events"))? {
            let index = dir.join("index.md");
            if index.is_file() {
                site.events.push(read_page(&index)?);
            }

            let schema = dir.join("schema.json");
            if schema.is_file() {
                let (title, value) = read_schema(&schema)?;
                site.schemas.insert(title, value);
            }
        }

        for dir in entry_dirs(&root.join("services"))? {
            let index = dir.join("index.md");
            if index.is_file() {
                site.services.push(read_page(&index)?);
            }
        }

        crate::debug!(
            "catalog";
            "read {} events, {} services, {} schemas from `{}`",
            site.events.len(),
            site.services.len(),
            site.schemas.len(),
            root.display()
        );
        Ok(site)
    }

    /// Find a service by name, ignoring case.
    pub fn service(&self, name: &str) -> Option<&ServiceFrontMatter> {
        self.services.iter().find(|s| names_service(&s.name, name))
    }

    /// Events consumed (inbound) and produced (outbound) by `service`.
    ///
    /// Producer and consumer names match the service name ignoring case,
    /// the same rule [`CatalogSite::check`] uses.
    pub fn inbound_outbound(&self, service: &ServiceFrontMatter) -> (Vec<Entity>, Vec<Entity>) {
        let mut inbound = Vec::new();
        let mut outbound = Vec::new();

        for event in &self.events {
            let entity = || Entity {
                name: event.name.clone(),
                description: event.summary.clone().unwrap_or_default(),
                entity_type: EntityType::of_event(&event.tags),
            };
            if event.consumers.iter().any(|n| names_service(&service.name, n)) {
                inbound.push(entity());
            }
            if event.producers.iter().any(|n| names_service(&service.name, n)) {
                outbound.push(entity());
            }
        }

        (inbound, outbound)
    }

    /// Cross-check pages against each other and against `config`.
    pub fn check(&self, config: &SiteConfig) -> CatalogReport {
        let users: FxHashSet<&str> = config.users.iter().map(|u| u.id.as_str()).collect();
        let mut report = CatalogReport::default();

        for event in &self.events {
            let page = format!("events/{}", event.name);
            check_owners(&mut report, &page, event.owners(), &users);

            if EntityType::of_event(&event.tags) == EntityType::Unknown {
                report.push(&page, "not tagged `event` or `command`");
            }
            for (role, names) in [("producer", &event.producers), ("consumer", &event.consumers)] {
                for name in names.iter().filter(|n| self.service(n.as_str()).is_none()) {
                    report.push(&page, format!("{role} `{name}` is not a known service"));
                }
            }
        }

        for service in &self.services {
            let page = format!("services/{}", service.name);
            check_owners(&mut report, &page, service.owners(), &users);
        }

        report
    }
}

fn names_service(service: &str, name: &str) -> bool {
    service.eq_ignore_ascii_case(name)
}

fn check_owners(report: &mut CatalogReport, page: &str, owners: &[String], users: &FxHashSet<&str>) {
    for owner in owners.iter().filter(|o| !users.contains(o.as_str())) {
        report.push(page, format!("owner `{owner}` is not listed in `users`"));
    }
}

/// Subdirectories of `dir`, sorted. Empty if `dir` doesn't exist.
fn entry_dirs(dir: &Path) -> Result<Vec<PathBuf>, CatalogError> {
    if !dir.is_dir() {
        crate::debug!("catalog"; "no `{}`, skipping", dir.display());
        return Ok(Vec::new());
    }

    let io_err = |err| CatalogError::Io(dir.to_path_buf(), err);
    let mut dirs = Vec::new();
    for entry in fs::read_dir(dir).map_err(io_err)? {
        let path = entry.map_err(io_err)?.path();
        if path.is_dir() {
            dirs.push(path);
        }
    }
    dirs.sort();
    Ok(dirs)
}

fn read_page<T: FrontMatter>(path: &Path) -> Result<T, CatalogError> {
    let content =
        fs::read_to_string(path).map_err(|err| CatalogError::Io(path.to_path_buf(), err))?;
    T::parse(&content, path)
}

fn read_schema(path: &Path) -> Result<(String, Value), CatalogError> {
    let schema_err = |message: String| CatalogError::Schema {
        path: path.to_path_buf(),
        message,
    };

    let content =
        fs::read_to_string(path).map_err(|err| CatalogError::Io(path.to_path_buf(), err))?;
    let value: Value = serde_json::from_str(&content).map_err(|e| schema_err(e.to_string()))?;
    let title = value
        .get("title")
        .and_then(Value::as_str)
        .ok_or_else(|| schema_err("missing string `title`".to_string()))?
        .to_string();
    Ok((title, value))
}

// ============================================================================
// report
// ============================================================================

/// A problem found by [`CatalogSite::check`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    /// Page the problem was found on, e.g. `events/AccountCreated`.
    pub page: String,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogReport {
    findings: Vec<Finding>,
}

impl CatalogReport {
    fn push(&mut self, page: &str, message: impl Into<String>) {
        self.findings.push(Finding {
            page: page.to_string(),
            message: message.into(),
        });
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

impl fmt::Display for CatalogReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for finding in &self.findings {
            writeln!(f, "- {}: {}", finding.page, finding.message)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use tempfile::TempDir;

    fn write(root: &Path, rel: &str, content: &str) {
        let path = root.join(rel);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    /// A small bank account catalog.
    fn bank_catalog() -> TempDir {
        let temp = TempDir::new().unwrap();
        let root = temp.path();
        write(
            root,
            "events/AccountCreated/index.md",
            "---\nname: AccountCreated\nversion: 0.0.1\nsummary: A new account\nproducers:\n  - Bank Account Aggregate\nconsumers:\n  - Bank Account Projector\nowners:\n  - dboyne\ntags:\n  - label: event\n---\n",
        );
        write(
            root,
            "events/AccountCreated/schema.json",
            r#"{ "title": "AccountCreated", "type": "object" }"#,
        );
        write(
            root,
            "events/CreateAccount/index.md",
            "---\nname: CreateAccount\nversion: 0.0.1\nconsumers:\n  - Bank Account Aggregate\ntags:\n  - label: command\n---\n",
        );
        write(
            root,
            "services/Bank Account Aggregate/index.md",
            "---\nname: Bank Account Aggregate\nowners:\n  - dboyne\ntags:\n  - label: aggregate\n---\n",
        );
        write(
            root,
            "services/Bank Account Projector/index.md",
            "---\nname: Bank Account Projector\ntags:\n  - label: projector\n---\n",
        );
        temp
    }

    #[test]
    fn test_from_directory() {
        let temp = bank_catalog();
        let site = CatalogSite::from_directory(temp.path()).unwrap();

        let names: Vec<_> = site.events.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["AccountCreated", "CreateAccount"]);
        assert_eq!(site.services.len(), 2);
        assert_eq!(site.schemas["AccountCreated"]["type"], "object");
    }

    #[test]
    fn test_inbound_outbound() {
        let temp = bank_catalog();
        let site = CatalogSite::from_directory(temp.path()).unwrap();
        let aggregate = site.service("bank account aggregate").unwrap();
        assert_eq!(EntityType::of_service(&aggregate.tags), EntityType::Aggregate);

        let (inbound, outbound) = site.inbound_outbound(aggregate);
        assert_eq!(inbound.len(), 1);
        assert_eq!(inbound[0].name, "CreateAccount");
        assert_eq!(inbound[0].entity_type, EntityType::Command);
        assert_eq!(outbound[0].name, "AccountCreated");
        assert_eq!(outbound[0].description, "A new account");
    }

    #[test]
    fn test_inbound_outbound_ignores_case() {
        let temp = bank_catalog();
        write(
            temp.path(),
            "events/AccountClosed/index.md",
            "---\nname: AccountClosed\nversion: 0.0.1\nproducers:\n  - bank account aggregate\nowners:\n  - dboyne\ntags:\n  - label: event\n---\n",
        );
        let site = CatalogSite::from_directory(temp.path()).unwrap();
        assert!(site.check(&Preset::BankAccount.config()).is_clean());

        let aggregate = site.service("Bank Account Aggregate").unwrap();
        let (_, outbound) = site.inbound_outbound(aggregate);
        let names: Vec<_> = outbound.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["AccountClosed", "AccountCreated"]);
    }

    #[test]
    fn test_check_clean_against_preset() {
        let temp = bank_catalog();
        let site = CatalogSite::from_directory(temp.path()).unwrap();
        let report = site.check(&Preset::BankAccount.config());
        assert!(report.is_clean(), "unexpected findings:\n{report}");
    }

    #[test]
    fn test_check_reports_unknown_owner_and_service() {
        let temp = bank_catalog();
        write(
            temp.path(),
            "events/FundsReserved/index.md",
            "---\nname: FundsReserved\nversion: 0.0.1\nproducers:\n  - Ledger\nowners:\n  - mSmith\ntags:\n  - label: event\n---\n",
        );
        let site = CatalogSite::from_directory(temp.path()).unwrap();
        let report = site.check(&Preset::BankAccount.config());

        let messages: Vec<_> = report
            .findings()
            .iter()
            .map(|f| format!("{}: {}", f.page, f.message))
            .collect();
        assert_eq!(
            messages,
            [
                "events/FundsReserved: owner `mSmith` is not listed in `users`",
                "events/FundsReserved: producer `Ledger` is not a known service",
            ]
        );

        // mSmith is a Lunar Frontiers contributor
        let report = site.check(&Preset::LunarFrontiers.config());
        assert_eq!(report.findings().len(), 1);
    }

    #[test]
    fn test_untagged_event_is_reported() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "events/Ping/index.md",
            "---\nname: Ping\nversion: 0.0.1\n---\n",
        );
        let site = CatalogSite::from_directory(temp.path()).unwrap();
        let report = site.check(&Preset::BankAccount.config());
        assert_eq!(report.findings()[0].message, "not tagged `event` or `command`");
    }

    #[test]
    fn test_schema_without_title() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "events/Ping/schema.json", r#"{ "type": "object" }"#);
        let err = CatalogSite::from_directory(temp.path()).unwrap_err();
        assert!(matches!(err, CatalogError::Schema { .. }));
    }

    #[test]
    fn test_empty_directory() {
        let temp = TempDir::new().unwrap();
        let site = CatalogSite::from_directory(temp.path()).unwrap();
        assert_eq!(site, CatalogSite::default());
    }
}
