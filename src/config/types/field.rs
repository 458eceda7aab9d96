//! Type-safe config field path.

use owo_colors::OwoColorize;
use std::borrow::Cow;
use std::fmt;

/// A config field path used to name the offending key in diagnostics.
///
/// Static paths come from `#[derive(Config)]`; paths into sequences are
/// built at runtime with [`FieldPath::index`] and [`FieldPath::join`].
///
/// # Example
///
/// ```ignore
/// #[derive(Config)]
/// #[config(section = "logo")]
/// pub struct LogoConfig {
///     pub src: String,
/// }
///
/// // Generated:
/// // LogoConfig::FIELDS.src == FieldPath::new("logo.src")
///
/// // Usage:
/// diag.error(LogoConfig::FIELDS.src, "required");
/// let id = SiteConfig::FIELDS.users.index(1).join(UserConfig::FIELDS.id);
/// assert_eq!(id.as_str(), "users[1].id");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath(Cow<'static, str>);

impl FieldPath {
    #[inline]
    pub const fn new(path: &'static str) -> Self {
        Self(Cow::Borrowed(path))
    }

    /// Path to the `i`-th element of a sequence field.
    pub fn index(&self, i: usize) -> Self {
        Self(Cow::Owned(format!("{}[{i}]", self.0)))
    }

    /// Path to a key nested under this one.
    pub fn join(&self, child: impl AsRef<str>) -> Self {
        let child = child.as_ref();
        if self.0.is_empty() {
            return Self(Cow::Owned(child.to_string()));
        }
        Self(Cow::Owned(format!("{}.{child}", self.0)))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for FieldPath {
    fn from(path: String) -> Self {
        Self(Cow::Owned(path))
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", format_args!("`{}`", self.0).bright_blue())
    }
}

impl AsRef<str> for FieldPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_then_join() {
        let path = FieldPath::new("footerLinks").index(3).join("href");
        assert_eq!(path.as_str(), "footerLinks[3].href");
    }

    #[test]
    fn join_onto_root() {
        assert_eq!(FieldPath::new("").join("title").as_str(), "title");
    }
}
