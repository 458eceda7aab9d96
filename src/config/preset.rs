//! Built-in site configurations.
//!
//! These are the catalogs shipped with the example applications. Each
//! accessor is pure: it builds the same record on every call.

use super::{
    ConfigError, SiteConfig,
    section::{LinkConfig, LogoConfig, UserConfig},
};
use std::fmt;
use std::str::FromStr;

const DBOYNE_AVATAR: &str =
    "https://pbs.twimg.com/profile_images/1262283153563140096/DYRDqKg6_400x400.png";

/// A built-in site, selected by slug.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    BankAccount,
    LunarFrontiers,
}

impl Preset {
    pub const ALL: [Preset; 2] = [Preset::BankAccount, Preset::LunarFrontiers];

    pub const fn slug(&self) -> &'static str {
        match self {
            Self::BankAccount => "bank-account",
            Self::LunarFrontiers => "lunar-frontiers",
        }
    }

    /// Build the preset's configuration.
    pub fn config(&self) -> SiteConfig {
        match self {
            Self::BankAccount => bank_account(),
            Self::LunarFrontiers => lunar_frontiers(),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl FromStr for Preset {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.slug().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                let available: Vec<_> = Self::ALL.iter().map(Preset::slug).collect();
                ConfigError::UnknownPreset(s.to_string(), available.join(", "))
            })
    }
}

/// Footer shared by the example catalogs, with a site-specific GitHub link.
fn footer_links(github: &str) -> Vec<LinkConfig> {
    vec![
        LinkConfig::new("Events", "/events"),
        LinkConfig::new("Services", "/services"),
        LinkConfig::new("Visualiser", "/visualiser"),
        LinkConfig::new("3D Node Graph", "/overview"),
        LinkConfig::new("GitHub", github),
    ]
}

/// The bank account example catalog.
pub fn bank_account() -> SiteConfig {
    SiteConfig {
        title: "Bank Account".into(),
        tagline: "Bank account example event catalog".into(),
        organization_name: "Cosmonic".into(),
        project_name: "Bank Account".into(),
        edit_url: Some("https://github.com/cosmonic/concordance/edit/main".into()),
        trailing_slash: true,
        primary_cta: Some(LinkConfig::new("Explore Events", "/events")),
        secondary_cta: None,
        logo: LogoConfig::new("EventCatalog Logo", "logo.svg"),
        footer_links: footer_links("https://github.com/cosmonic/concordance/edit/main"),
        users: vec![UserConfig::new(
            "dboyne",
            "David Boyne",
            DBOYNE_AVATAR,
            "Developer",
        )],
        generators: None,
        ..Default::default()
    }
}

/// The lunar frontiers example catalog.
pub fn lunar_frontiers() -> SiteConfig {
    SiteConfig {
        title: "Lunar Frontiers".into(),
        tagline: "An event sourced application example".into(),
        organization_name: "Cosmonic".into(),
        project_name: "Lunar Frontiers".into(),
        edit_url: Some("https://github.com/cosmonic/concordance".into()),
        trailing_slash: true,
        primary_cta: Some(LinkConfig::new("Explore Events", "/events")),
        secondary_cta: Some(LinkConfig::new(
            "Getting Started",
            "https://www.eventcatalog.dev/",
        )),
        logo: LogoConfig::new("EventCatalog Logo", "logo.svg"),
        footer_links: footer_links("https://github.com/boyney123/eventcatalog-demo/edit/master"),
        users: vec![
            UserConfig::new("dboyne", "David Boyne", DBOYNE_AVATAR, "Developer"),
            UserConfig::new(
                "mSmith",
                "Matthew Smith",
                "https://randomuser.me/api/portraits/lego/3.jpg",
                "Developer",
            ),
        ],
        generators: None,
        ..Default::default()
    }
}
