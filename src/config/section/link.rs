//! Labeled links: `primaryCTA`, `secondaryCTA` and `[[footerLinks]]`.
//!
//! # Example
//!
//! ```toml
//! [primaryCTA]
//! label = "Explore Events"
//! href = "/events"
//!
//! [[footerLinks]]
//! label = "GitHub"
//! href = "https://github.com/cosmonic/concordance"
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, util};
use macros::Config;
use serde::{Deserialize, Serialize};

/// A labeled link rendered by the catalog UI.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "")]
pub struct LinkConfig {
    /// Text shown for the link.
    pub label: String,

    /// Target, either a site path (`/events`) or an absolute URL.
    pub href: String,
}

impl LinkConfig {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }

    /// Validate a link located at `at`.
    ///
    /// # Checks
    /// - `label` and `href` are non-empty
    /// - an `href` with a scheme must be a well-formed URL
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        util::require_non_empty(diag, at.join(Self::FIELDS.label), &self.label);

        let href = at.join(Self::FIELDS.href);
        if util::require_non_empty(diag, href.clone(), &self.href) && util::has_scheme(&self.href)
        {
            util::check_url(diag, href, &self.href);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn site_path_href_is_accepted() {
        let mut diag = ConfigDiagnostics::new();
        LinkConfig::new("Events", "/events").validate(&FieldPath::new("primaryCTA"), &mut diag);
        assert!(!diag.has_errors());
    }

    #[test]
    fn empty_href_is_named() {
        let mut diag = ConfigDiagnostics::new();
        let at = FieldPath::new("footerLinks").index(2);
        LinkConfig::new("Visualiser", "").validate(&at, &mut diag);
        assert!(diag.names("footerLinks[2].href"));
        assert!(!diag.names("footerLinks[2].label"));
    }

    #[test]
    fn broken_absolute_href_is_rejected() {
        let mut diag = ConfigDiagnostics::new();
        LinkConfig::new("GitHub", "https://")
            .validate(&FieldPath::new("secondaryCTA"), &mut diag);
        assert!(diag.names("secondaryCTA.href"));
    }
}
