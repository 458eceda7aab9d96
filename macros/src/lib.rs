//! Proc macros for evcat.
//!
//! # Config derive macro
//!
//! Generates field path accessors, a TOML template and field status checks.
//!
//! ```ignore
//! #[derive(Config)]
//! #[config(section = "logo")]
//! #[serde(rename_all = "camelCase")]
//! /// Site logo shown in the header.
//! pub struct LogoConfig {
//!     /// Alternative text.
//!     pub alt: String,
//!
//!     /// Image path, relative to the public directory.
//!     #[config(default = "logo.svg")]
//!     pub src: String,
//! }
//!
//! // Generates:
//! // - LogoConfig::FIELDS.src -> FieldPath("logo.src")
//! // - LogoConfig::template() -> TOML string with comments
//! // - LogoConfig::template_with_header() -> with [logo] header
//! ```
//!
//! # Attributes
//!
//! Struct-level:
//! - `#[config(section = "path")]` - TOML section path (`""` for the root)
//!
//! Field-level:
//! - `#[config(skip)]` - Skip from FIELDS (internal use)
//! - `#[config(sub)]` - Nested config, rendered with its own header
//! - `#[config(name = "x")]` - Custom key name
//! - `#[config(default = "x")]` - Default value in template
//! - `#[config(inline_doc = "x")]` - Trailing comment in template
//! - `#[config(status = experimental|hidden)]`
//!
//! # Key names
//!
//! Without `name`, the key follows serde: `#[serde(rename = "..")]` on the
//! field, then `#[serde(rename_all = "camelCase")]` on the struct, then the
//! field identifier.
//!
//! # Section inference
//!
//! Without `section` attribute, inferred from struct name:
//! - `LogoConfig` → `logo`
//! - `FooterLinkConfig` → `footer_link`

mod config;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro that generates FIELDS, template() and validate_field_status().
#[proc_macro_derive(Config, attributes(config))]
pub fn derive_config(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    config::derive(&input).into()
}
