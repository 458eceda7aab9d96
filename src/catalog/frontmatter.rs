//! YAML front matter of catalog pages.
//!
//! Every `index.md` under `events/` and `services/` starts with a YAML
//! block between `---` fences:
//!
//! ```markdown
//! ---
//! name: AccountCreated
//! version: 0.0.1
//! summary: Indicates the creation of a new bank account
//! producers:
//!     - Bank Account Aggregate
//! owners:
//!     - dboyne
//! tags:
//!     - label: 'event'
//! ---
//! ```

use super::CatalogError;
use regex::Regex;
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::path::Path;
use std::sync::LazyLock;

/// Front matter block at the start of a document, fences excluded.
static FRONT_MATTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?s)\A---[ \t]*\r?\n(?:(.*?)\r?\n)?---[ \t]*(?:\r?\n|\z)").unwrap()
});

/// Extract the front matter of a document.
///
/// Returns `None` when the document doesn't open with a `---` fence or the
/// closing fence is missing. An empty block yields `Some("")`.
pub fn split_front_matter(content: &str) -> Option<&str> {
    let caps = FRONT_MATTER.captures(content)?;
    Some(caps.get(1).map_or("", |m| m.as_str()))
}

/// A page type whose metadata lives in front matter.
pub trait FrontMatter: DeserializeOwned {
    /// Parse the front matter of `content`, read from `path`.
    fn parse(content: &str, path: &Path) -> Result<Self, CatalogError> {
        let front = split_front_matter(content).ok_or_else(|| CatalogError::FrontMatter {
            path: path.to_path_buf(),
            message: "missing `---` fenced front matter".to_string(),
        })?;
        serde_yaml::from_str(front).map_err(|err| CatalogError::FrontMatter {
            path: path.to_path_buf(),
            message: err.to_string(),
        })
    }

    /// Tag labels, in declaration order.
    fn tags(&self) -> &[Tag];

    /// Contributor ids listed as owners.
    fn owners(&self) -> &[String];
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    pub label: String,
}

/// Front matter of `events/<Name>/index.md`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventFrontMatter {
    pub name: String,
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default)]
    pub producers: Vec<String>,
    #[serde(default)]
    pub consumers: Vec<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub external_links: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl FrontMatter for EventFrontMatter {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }

    fn owners(&self) -> &[String] {
        &self.owners
    }
}

/// Front matter of `services/<Name>/index.md`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceFrontMatter {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repository: Option<String>,
    #[serde(default)]
    pub owners: Vec<String>,
    #[serde(default)]
    pub external_links: Vec<String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl FrontMatter for ServiceFrontMatter {
    fn tags(&self) -> &[Tag] {
        &self.tags
    }

    fn owners(&self) -> &[String] {
        &self.owners
    }
}
