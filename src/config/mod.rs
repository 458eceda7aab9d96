//! Site configuration management for `eventcatalog.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── generator  # generators
//! │   ├── link       # primaryCTA, secondaryCTA, [[footerLinks]]
//! │   ├── logo       # [logo]
//! │   └── user       # [[users]]
//! ├── types/         # Utility types
//! │   ├── error      # ConfigError, ConfigDiagnostics
//! │   ├── field      # FieldPath
//! │   └── status     # FieldStatus
//! ├── preset         # Built-in sites
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Keys are camelCase, matching what the catalog generator reads from
//! `eventcatalog.config.js`.

pub mod preset;
pub mod section;
pub mod types;
mod util;

pub use preset::Preset;
pub use types::{ConfigDiagnostics, ConfigError, FieldPath};

use section::{GeneratorDecl, LinkConfig, LogoConfig, UserConfig};

use crate::{cli::Cli, log, utils::path::expand_path};
use anyhow::{Result, bail};
use macros::Config;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

/// Config file names searched for, in order of preference.
pub const CONFIG_FILE_NAMES: [&str; 2] = ["eventcatalog.toml", "eventcatalog.json"];

// ============================================================================
// root configuration
// ============================================================================

/// EventCatalog site configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Config)]
#[serde(default, rename_all = "camelCase")]
#[config(section = "")]
pub struct SiteConfig {
    /// Path of the file this config was read from (empty for presets)
    #[serde(skip)]
    #[config(skip)]
    pub config_path: PathBuf,

    /// Catalog root directory - parent of config file
    #[serde(skip)]
    #[config(skip)]
    pub root: PathBuf,

    /// Site title.
    pub title: String,

    /// Short description shown under the title.
    pub tagline: String,

    /// Organization owning the catalog.
    pub organization_name: String,

    /// Project name.
    pub project_name: String,

    /// Base URL for "edit this page" links.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edit_url: Option<String>,

    /// Generate URLs with a trailing slash.
    pub trailing_slash: bool,

    /// Main call-to-action on the landing page.
    #[serde(rename = "primaryCTA", skip_serializing_if = "Option::is_none")]
    #[config(status = hidden)]
    pub primary_cta: Option<LinkConfig>,

    /// Secondary call-to-action on the landing page.
    #[serde(rename = "secondaryCTA", skip_serializing_if = "Option::is_none")]
    #[config(status = hidden)]
    pub secondary_cta: Option<LinkConfig>,

    /// Branding.
    #[config(sub)]
    pub logo: LogoConfig,

    /// Footer links, rendered in declaration order.
    #[config(status = hidden)]
    pub footer_links: Vec<LinkConfig>,

    /// Contributors referenced by `owners` in catalog pages.
    #[config(status = hidden)]
    pub users: Vec<UserConfig>,

    /// Content-generator plugins as `[pluginName, options]` pairs.
    #[serde(skip_serializing_if = "Option::is_none")]
    #[config(status = experimental, default = "[]")]
    pub generators: Option<Vec<GeneratorDecl>>,
}

/// Where a configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    File(PathBuf),
    Preset(Preset),
}

/// Input format of a config file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Ok(Self::Toml),
            Some("json") => Ok(Self::Json),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or_default().to_string(),
            )),
        }
    }
}

impl SiteConfig {
    /// Load and validate configuration selected by CLI arguments.
    ///
    /// `--preset` wins over `--config`; without either, searches upward
    /// from cwd for one of [`CONFIG_FILE_NAMES`].
    pub fn load(cli: &Cli) -> Result<Self> {
        let source = Self::resolve_source(cli)?;
        let (config, diag) = Self::load_from(&source, cli.is_strict())?;
        diag.print_hints_and_warnings();
        Ok(config)
    }

    /// Resolve the config source from CLI arguments.
    fn resolve_source(cli: &Cli) -> Result<ConfigSource> {
        if let Some(preset) = cli.preset {
            return Ok(ConfigSource::Preset(preset));
        }
        if let Some(path) = &cli.config {
            return Ok(ConfigSource::File(expand_path(path)));
        }

        let start = match cli.search_dir() {
            Some(dir) => expand_path(dir),
            None => std::env::current_dir()?,
        };
        let names = CONFIG_FILE_NAMES.map(Path::new);
        match util::find_config_file(&start, &names) {
            Some(path) => Ok(ConfigSource::File(path)),
            None => bail!(
                "no {} found in '{}' or its parents. Run 'evcat init' to create one.",
                CONFIG_FILE_NAMES.join(" or "),
                start.display()
            ),
        }
    }

    /// Load a configuration and validate it.
    ///
    /// On success returns the config with the non-fatal diagnostics
    /// (warnings, experimental hints) collected along the way.
    pub fn load_from(
        source: &ConfigSource,
        strict: bool,
    ) -> Result<(Self, ConfigDiagnostics), ConfigError> {
        let config = match source {
            ConfigSource::Preset(preset) => {
                crate::debug!("config"; "using preset `{}`", preset);
                preset.config()
            }
            ConfigSource::File(path) => Self::from_path(path, strict)?,
        };
        let diag = config.validate()?;
        Ok((config, diag))
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        let (config, _) = Self::parse_with_ignored(content, ConfigFormat::Toml, "<inline>")?;
        Ok(config)
    }

    /// Load configuration from file path with unknown field detection.
    ///
    /// Unknown fields are a warning, or an error when `strict`.
    pub fn from_path(path: &Path, strict: bool) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;

        let source_name = path.display().to_string();
        let (mut config, ignored) = Self::parse_with_ignored(&content, format, &source_name)?;

        if !ignored.is_empty() {
            if strict {
                return Err(ConfigError::UnknownFields(path.to_path_buf(), ignored));
            }
            Self::print_unknown_fields_warning(&ignored, path);
        }

        crate::debug!("config"; "loaded `{}`", path.display());
        config.config_path = path.to_path_buf();
        config.root = path.parent().map(Path::to_path_buf).unwrap_or_default();
        Ok(config)
    }

    /// Parse content, collecting any unknown fields.
    fn parse_with_ignored(
        content: &str,
        format: ConfigFormat,
        source_name: &str,
    ) -> Result<(Self, Vec<String>), ConfigError> {
        let mut ignored = Vec::new();
        let record = |path: serde_ignored::Path| ignored.push(path.to_string());

        let parsed = match format {
            ConfigFormat::Toml => {
                let deserializer = toml::Deserializer::new(content);
                serde_ignored::deserialize(deserializer, record).map_err(|e| e.to_string())
            }
            ConfigFormat::Json => {
                let mut deserializer = serde_json::Deserializer::from_str(content);
                serde_ignored::deserialize(&mut deserializer, record).map_err(|e| e.to_string())
            }
        };

        let config = parsed.map_err(|message| ConfigError::Parse {
            source_name: source_name.to_string(),
            message,
        })?;
        Ok((config, ignored))
    }

    /// Print warning about unknown fields.
    fn print_unknown_fields_warning(fields: &[String], path: &Path) {
        let display_path = path
            .file_name()
            .map(|n| n.to_string_lossy())
            .unwrap_or_else(|| path.to_string_lossy());
        log!("warning"; "unknown fields in {}, ignoring:", display_path);
        for field in fields {
            eprintln!("- {}", field);
        }
    }

    // ========================================================================
    // validation
    // ========================================================================

    /// Validate the whole record.
    ///
    /// Collects every problem before failing; each error names its field.
    /// Returns the collected warnings and hints when there are no errors.
    pub fn validate(&self) -> Result<ConfigDiagnostics, ConfigError> {
        let mut diag = ConfigDiagnostics::new();
        let fields = Self::FIELDS;

        self.validate_field_status(&mut diag);

        util::require_non_empty(&mut diag, fields.title, &self.title);
        util::require_non_empty(&mut diag, fields.tagline, &self.tagline);
        util::require_non_empty(&mut diag, fields.organization_name, &self.organization_name);
        util::require_non_empty(&mut diag, fields.project_name, &self.project_name);

        if let Some(edit_url) = &self.edit_url
            && util::require_non_empty(&mut diag, fields.edit_url.clone(), edit_url)
        {
            util::check_url(&mut diag, fields.edit_url, edit_url);
        }

        if let Some(cta) = &self.primary_cta {
            cta.validate(&fields.primary_cta, &mut diag);
        }
        if let Some(cta) = &self.secondary_cta {
            cta.validate(&fields.secondary_cta, &mut diag);
        }

        self.logo.validate(&mut diag);

        if self.footer_links.is_empty() {
            diag.error_with_hint(
                fields.footer_links.clone(),
                "required field is missing or empty",
                "add at least one [[footerLinks]] entry with label and href",
            );
        }
        for (i, link) in self.footer_links.iter().enumerate() {
            link.validate(&fields.footer_links.index(i), &mut diag);
        }

        if self.users.is_empty() {
            diag.warn(
                fields.users.clone(),
                "no contributors, catalog owners cannot be resolved",
            );
        }
        section::validate_users(&self.users, &fields.users, &mut diag);

        if let Some(generators) = &self.generators {
            section::validate_generators(generators, &fields.generators, &mut diag);
        }

        if diag.has_errors() {
            Err(ConfigError::Malformed(diag))
        } else {
            Ok(diag)
        }
    }
}

// ============================================================================
// Test Helpers (available to all modules via `use crate::config::test_*`)
// ============================================================================

/// Minimal valid TOML config, to be extended by tests.
#[cfg(test)]
pub const TEST_CONFIG: &str = r#"title = "Test"
tagline = "Test catalog"
organizationName = "Test Org"
projectName = "Test"

[logo]
alt = "Logo"
src = "logo.svg"

[[footerLinks]]
label = "Events"
href = "/events"

[[users]]
id = "dboyne"
name = "David Boyne"
avatarUrl = "https://example.com/avatar.png"
role = "Developer"
"#;

/// Parse [`TEST_CONFIG`] followed by `extra`.
/// Panics if there are unknown fields (to catch config typos in tests).
#[cfg(test)]
pub fn test_parse_config(extra: &str) -> SiteConfig {
    let content = format!("{TEST_CONFIG}{extra}");
    let (parsed, ignored) =
        SiteConfig::parse_with_ignored(&content, ConfigFormat::Toml, "<test>").unwrap();
    assert!(
        ignored.is_empty(),
        "test config has unknown fields: {:?}",
        ignored
    );
    parsed
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_from_str_invalid_toml() {
        let result = SiteConfig::from_str("[logo\nsrc = \"logo.svg\"");
        assert!(matches!(result, Err(ConfigError::Parse { .. })));
    }

    #[test]
    fn test_wrong_shape_is_malformed() {
        let err = SiteConfig::from_str("title = 5").unwrap_err();
        assert!(err.is_malformed());
        assert!(format!("{err}").contains("title"));
    }

    #[test]
    fn test_field_paths_are_camel_case() {
        assert_eq!(SiteConfig::FIELDS.organization_name.as_str(), "organizationName");
        assert_eq!(SiteConfig::FIELDS.primary_cta.as_str(), "primaryCTA");
        assert_eq!(SiteConfig::FIELDS.footer_links.as_str(), "footerLinks");
        assert_eq!(LogoConfig::FIELDS.src.as_str(), "logo.src");
    }

    #[test]
    fn test_minimal_config_is_valid() {
        let config = test_parse_config("");
        let diag = config.validate().unwrap();
        assert!(diag.warnings().is_empty());
        assert!(!config.trailing_slash);
        assert!(config.generators.is_none());
    }

    #[test]
    fn test_missing_logo_src_is_rejected() {
        let content = TEST_CONFIG.replace("src = \"logo.svg\"\n", "");
        let config = SiteConfig::from_str(&content).unwrap();
        let err = config.validate().unwrap_err();
        assert!(err.is_malformed());
        assert!(err.diagnostics().unwrap().names("logo.src"));
    }

    #[test]
    fn test_missing_required_fields_are_all_reported() {
        let config = SiteConfig::from_str("").unwrap();
        let err = config.validate().unwrap_err();
        let diag = err.diagnostics().unwrap();
        for field in [
            "title",
            "tagline",
            "organizationName",
            "projectName",
            "logo.alt",
            "logo.src",
            "footerLinks",
        ] {
            assert!(diag.names(field), "expected `{field}` to be reported");
        }
    }

    #[test]
    fn test_duplicate_user_is_rejected() {
        let config = test_parse_config(
            r#"
[[users]]
id = "dboyne"
name = "Again"
avatarUrl = "https://example.com/b.png"
role = "Developer"
"#,
        );
        let err = config.validate().unwrap_err();
        assert!(err.diagnostics().unwrap().names("users[1].id"));
    }

    #[test]
    fn test_empty_users_is_a_warning() {
        let content = TEST_CONFIG.split("[[users]]").next().unwrap();
        let config = SiteConfig::from_str(content).unwrap();
        let diag = config.validate().unwrap();
        assert_eq!(diag.warnings().len(), 1);
        assert_eq!(diag.warnings()[0].0.as_str(), "users");
    }

    #[test]
    fn test_footer_links_keep_order() {
        let config = test_parse_config(
            r#"
[[footerLinks]]
label = "Services"
href = "/services"

[[footerLinks]]
label = "Visualiser"
href = "/visualiser"
"#,
        );
        let labels: Vec<_> = config.footer_links.iter().map(|l| l.label.as_str()).collect();
        assert_eq!(labels, ["Events", "Services", "Visualiser"]);
    }

    #[test]
    fn test_generators_give_experimental_hint() {
        let content = format!(
            "generators = [[\"@eventcatalog/plugin-doc-generator-asyncapi\", {{ versionEvents = false }}]]\n{TEST_CONFIG}"
        );
        let config = SiteConfig::from_str(&content).unwrap();
        let diag = config.validate().unwrap();
        assert_eq!(diag.hints().len(), 1);
        assert_eq!(diag.hints()[0].as_str(), "generators");

        let diag = test_parse_config("").validate().unwrap();
        assert!(diag.hints().is_empty());
    }

    #[test]
    fn test_generators_before_tables() {
        // `generators` is a root key, so it must precede the first table.
        let content = format!(
            "generators = [[\"plugin-a\", {{}}]]\n{TEST_CONFIG}"
        );
        let config = SiteConfig::from_str(&content).unwrap();
        assert_eq!(config.generators.unwrap()[0].plugin_name, "plugin-a");
    }

    #[test]
    fn test_unknown_fields_detected() {
        let content = format!("theme = \"dark\"\n{TEST_CONFIG}");
        let (config, ignored) =
            SiteConfig::parse_with_ignored(&content, ConfigFormat::Toml, "<test>").unwrap();
        assert_eq!(config.title, "Test");
        assert_eq!(ignored, ["theme"]);
    }

    #[test]
    fn test_from_path_strict_rejects_unknown_fields() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("eventcatalog.toml");
        fs::write(&path, TEST_CONFIG.replace("[logo]\n", "[logo]\nsize = 3\n")).unwrap();

        let err = SiteConfig::from_path(&path, true).unwrap_err();
        assert!(matches!(&err, ConfigError::UnknownFields(_, fields) if fields == &["logo.size"]));

        let config = SiteConfig::from_path(&path, false).unwrap();
        assert_eq!(config.root, temp.path());
        assert_eq!(config.config_path, path);
    }

    #[test]
    fn test_from_path_json() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("eventcatalog.json");
        let json = serde_json::to_string(&preset::bank_account()).unwrap();
        fs::write(&path, json).unwrap();

        let config = SiteConfig::from_path(&path, true).unwrap();
        assert_eq!(config.title, "Bank Account");
        assert_eq!(config.footer_links.len(), 5);
        assert_eq!(config.users[0].id, "dboyne");
    }

    #[test]
    fn test_from_path_unsupported_extension() {
        let err = SiteConfig::from_path(Path::new("eventcatalog.config.js"), false).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedFormat(ext) if ext == "js"));
    }

    #[test]
    fn test_from_path_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = SiteConfig::from_path(&temp.path().join("eventcatalog.toml"), false).unwrap_err();
        assert!(matches!(err, ConfigError::Io(..)));
    }

    #[test]
    fn test_load_from_is_deterministic() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("eventcatalog.toml");
        fs::write(&path, TEST_CONFIG).unwrap();

        let source = ConfigSource::File(path);
        let (first, _) = SiteConfig::load_from(&source, true).unwrap();
        let (second, _) = SiteConfig::load_from(&source, true).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_load_from_preset() {
        let source = ConfigSource::Preset(Preset::LunarFrontiers);
        let (config, _) = SiteConfig::load_from(&source, true).unwrap();
        assert_eq!(config.title, "Lunar Frontiers");
        assert!(config.config_path.as_os_str().is_empty());
        assert!(config.users.iter().any(|u| u.id == "mSmith"));
    }

    #[test]
    fn test_template_lists_scalars_before_logo() {
        let template = SiteConfig::template();
        let title = template.find("title = ").unwrap();
        let logo = template.find("[logo]").unwrap();
        assert!(title < logo);
        assert!(template.contains("organizationName = "));
        assert!(template.contains("# generators = []"));
        assert!(!template.contains("footerLinks"));
    }
}
