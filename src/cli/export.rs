//! `evcat export`: render the config for the catalog generator.

use crate::{
    config::SiteConfig,
    generator::{self, ExportFormat},
    log,
};
use anyhow::Result;
use std::path::{Path, PathBuf};

/// Render `config` to `output`, or stdout.
///
/// An `output` directory receives the format's conventional file name,
/// e.g. `eventcatalog.config.js`.
pub fn export_config(config: &SiteConfig, format: ExportFormat, output: Option<&Path>) -> Result<()> {
    let rendered = generator::render(config, format)?;

    let output = output.map(|path| output_file(path, format));
    generator::write_output(&rendered, output.as_deref())?;

    if let Some(path) = output {
        log!("export"; "wrote {} config to {}", format, path.display());
    }
    Ok(())
}

fn output_file(path: &Path, format: ExportFormat) -> PathBuf {
    if path.is_dir() {
        path.join(format.file_name())
    } else {
        path.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preset;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_export_into_directory() {
        let temp = TempDir::new().unwrap();
        export_config(&Preset::BankAccount.config(), ExportFormat::Js, Some(temp.path())).unwrap();

        let js = fs::read_to_string(temp.path().join("eventcatalog.config.js")).unwrap();
        assert!(js.contains("module.exports = {"));
        assert!(js.contains("\"organizationName\": \"Cosmonic\""));
    }

    #[test]
    fn test_export_to_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("site.json");
        export_config(&Preset::LunarFrontiers.config(), ExportFormat::Json, Some(&path)).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
        assert_eq!(value["users"][1]["id"], "mSmith");
    }
}
