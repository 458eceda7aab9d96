//! Configuration utility functions.

use super::{ConfigDiagnostics, FieldPath};
use std::path::{Path, PathBuf};

/// Report an empty required string. Returns `true` if the value is present.
pub fn require_non_empty(diag: &mut ConfigDiagnostics, field: FieldPath, value: &str) -> bool {
    if value.trim().is_empty() {
        diag.error(field, "required field is missing or empty");
        return false;
    }
    true
}

/// Whether `s` starts with a URL scheme (`https:`, `mailto:`...).
pub fn has_scheme(s: &str) -> bool {
    s.split_once(':').is_some_and(|(scheme, _)| {
        !scheme.is_empty()
            && scheme.starts_with(|c: char| c.is_ascii_alphabetic())
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
    })
}

/// Check that `value` is a well-formed absolute URL.
///
/// Uses the `url` crate, so a missing host on `http`/`https` is rejected.
pub fn check_url(diag: &mut ConfigDiagnostics, field: FieldPath, value: &str) {
    match url::Url::parse(value) {
        Ok(parsed) => {
            if matches!(parsed.scheme(), "http" | "https") && parsed.host_str().is_none() {
                diag.error_with_hint(
                    field,
                    "URL must have a valid host",
                    "use format like https://example.com",
                );
            }
        }
        Err(e) => {
            diag.error_with_hint(
                field,
                format!("invalid URL `{value}`: {e}"),
                "use format like https://example.com",
            );
        }
    }
}

/// Find config file by searching upward from `start`
///
/// Walks up parent directories until one of `names` exists; earlier names
/// win within the same directory. Absolute names are returned as-is when
/// they exist.
///
/// # Example
/// ```text
/// /home/user/catalog/events/Deposit/   ← start
/// /home/user/catalog/eventcatalog.toml ← found!
/// ```
pub fn find_config_file(start: &Path, names: &[&Path]) -> Option<PathBuf> {
    for name in names {
        if name.is_absolute() && name.exists() {
            return Some(name.to_path_buf());
        }
    }

    let mut current = start;
    loop {
        for name in names {
            let candidate = current.join(name);
            if candidate.is_file() {
                return Some(candidate);
            }
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None,
        }
    }
}

// ============================================================================
// tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_has_scheme() {
        assert!(has_scheme("https://example.com"));
        assert!(has_scheme("mailto:team@example.com"));
        assert!(!has_scheme("/events"));
        assert!(!has_scheme("logo.svg"));
        assert!(!has_scheme("1:2"));
    }

    #[test]
    fn test_check_url() {
        let mut diag = ConfigDiagnostics::new();
        check_url(&mut diag, FieldPath::new("editUrl"), "https://github.com/cosmonic/concordance");
        assert!(!diag.has_errors());

        check_url(&mut diag, FieldPath::new("editUrl"), "github.com/cosmonic");
        assert!(diag.names("editUrl"));
    }

    #[test]
    fn test_require_non_empty_whitespace() {
        let mut diag = ConfigDiagnostics::new();
        assert!(!require_non_empty(&mut diag, FieldPath::new("title"), "   "));
        assert!(diag.names("title"));
    }

    #[test]
    fn test_find_config_file_in_parent() {
        let temp = TempDir::new().unwrap();
        let nested = temp.path().join("events/Deposit");
        fs::create_dir_all(&nested).unwrap();
        fs::write(temp.path().join("eventcatalog.toml"), "").unwrap();

        let found = find_config_file(&nested, &[Path::new("eventcatalog.toml")]).unwrap();
        assert_eq!(found, temp.path().join("eventcatalog.toml"));
    }

    #[test]
    fn test_find_config_file_prefers_earlier_name() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("eventcatalog.toml"), "").unwrap();
        fs::write(temp.path().join("eventcatalog.json"), "{}").unwrap();

        let found = find_config_file(
            temp.path(),
            &[Path::new("eventcatalog.toml"), Path::new("eventcatalog.json")],
        )
        .unwrap();
        assert_eq!(found, temp.path().join("eventcatalog.toml"));
    }

    #[test]
    fn test_find_config_file_missing() {
        let temp = TempDir::new().unwrap();
        assert!(find_config_file(temp.path(), &[Path::new("does-not-exist.toml")]).is_none());
    }
}
