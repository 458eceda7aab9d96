//! Field status types for config validation.
//!
//! Used to report fields marked `#[config(status = experimental)]` that a
//! config sets away from their default.

use super::FieldPath;
use crate::config::ConfigDiagnostics;

/// Field status for validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldStatus {
    Experimental,
}

/// Check field status and report diagnostics
///
/// Called by generated `validate_field_status` methods when a field
/// with special status differs from its default value
pub fn check_field_status(field_path: &str, status: FieldStatus, diag: &mut ConfigDiagnostics) {
    let path = FieldPath::from(field_path.to_string());

    match status {
        FieldStatus::Experimental => diag.experimental_hint(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn experimental_is_a_hint_not_an_error() {
        let mut diag = ConfigDiagnostics::new();
        check_field_status("generators", FieldStatus::Experimental, &mut diag);
        assert!(!diag.has_errors());
        assert!(diag.warnings().is_empty());
        assert_eq!(diag.hints().len(), 1);
        assert_eq!(diag.hints()[0].as_str(), "generators");
    }
}
