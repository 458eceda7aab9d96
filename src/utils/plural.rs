//! Pluralization for summary lines.

/// Format count with noun, handling pluralization
///
/// # Examples
///
/// - `plural_count(0, "event")` -> `"0 events"`
/// - `plural_count(1, "event")` -> `"1 event"`
/// - `plural_count(2, "service")` -> `"2 services"`
#[inline]
pub fn plural_count(count: usize, noun: &str) -> String {
    let suffix = if count == 1 { "" } else { "s" };
    format!("{count} {noun}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plural_count() {
        assert_eq!(plural_count(0, "event"), "0 events");
        assert_eq!(plural_count(1, "warning"), "1 warning");
        assert_eq!(plural_count(3, "service"), "3 services");
    }
}
