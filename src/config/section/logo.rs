//! `[logo]` configuration.
//!
//! # Example
//!
//! ```toml
//! [logo]
//! alt = "EventCatalog Logo"
//! src = "logo.svg"
//! ```

use crate::config::{ConfigDiagnostics, util};
use macros::Config;
use serde::{Deserialize, Serialize};

/// Site logo, found in the catalog's public directory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, Config)]
#[serde(default)]
#[config(section = "logo")]
pub struct LogoConfig {
    /// Alternative text for the logo image.
    #[config(default = "EventCatalog Logo")]
    pub alt: String,

    /// Image path, relative to the public directory.
    #[config(default = "logo.svg")]
    pub src: String,
}

impl LogoConfig {
    pub fn new(alt: impl Into<String>, src: impl Into<String>) -> Self {
        Self {
            alt: alt.into(),
            src: src.into(),
        }
    }

    /// Validate logo configuration.
    ///
    /// # Checks
    /// - `alt` and `src` are non-empty
    /// - `src` is a relative path, not a URL or an absolute path
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        util::require_non_empty(diag, Self::FIELDS.alt, &self.alt);

        if !util::require_non_empty(diag, Self::FIELDS.src, &self.src) {
            return;
        }
        if util::has_scheme(&self.src) || self.src.starts_with('/') {
            diag.error_with_hint(
                Self::FIELDS.src,
                format!("`{}` is not a relative path", self.src),
                "place the image in the public directory and use e.g. \"logo.svg\"",
            );
        }
    }
}
