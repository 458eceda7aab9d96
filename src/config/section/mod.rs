//! Configuration section definitions.
//!
//! Each module corresponds to a part of `eventcatalog.toml`:
//!
//! | Module      | Keys                                   | Purpose                  |
//! |-------------|----------------------------------------|--------------------------|
//! | `generator` | `generators`                           | Plugin declarations      |
//! | `link`      | `primaryCTA`, `secondaryCTA`, `[[footerLinks]]` | Labeled links   |
//! | `logo`      | `[logo]`                               | Branding                 |
//! | `user`      | `[[users]]`                            | Contributor roster       |

mod generator;
mod link;
mod logo;
mod user;

pub use generator::{GeneratorDecl, validate_generators};
pub use link::LinkConfig;
pub use logo::LogoConfig;
pub use user::{UserConfig, validate_users};
