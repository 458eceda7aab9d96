//! `generators` plugin declarations.
//!
//! The generator expects each declaration as a two-element array of plugin
//! name and options. Declarations are carried through loading and export
//! untouched; no plugin is run here.
//!
//! # Example
//!
//! ```toml
//! generators = [
//!   ["@eventcatalog/plugin-doc-generator-asyncapi", { pathToSpec = ["rover_aggregate.yaml"], versionEvents = false }],
//! ]
//! ```

use crate::config::{ConfigDiagnostics, FieldPath, util};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A content-generator plugin declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "(String, Value)", into = "(String, Value)")]
pub struct GeneratorDecl {
    /// Package name of the plugin.
    pub plugin_name: String,

    /// Options passed to the plugin, must be a mapping.
    pub options: Value,
}

impl GeneratorDecl {
    pub fn new(plugin_name: impl Into<String>, options: serde_json::Map<String, Value>) -> Self {
        Self {
            plugin_name: plugin_name.into(),
            options: Value::Object(options),
        }
    }

    /// Validate a declaration located at `at`.
    pub fn validate(&self, at: &FieldPath, diag: &mut ConfigDiagnostics) {
        util::require_non_empty(diag, at.join("pluginName"), &self.plugin_name);

        if !self.options.is_object() {
            diag.error_with_hint(
                at.join("options"),
                format!("expected a mapping, found {}", value_kind(&self.options)),
                "write options as a table, e.g. { versionEvents = false }",
            );
        }
    }
}

impl From<(String, Value)> for GeneratorDecl {
    fn from((plugin_name, options): (String, Value)) -> Self {
        Self {
            plugin_name,
            options,
        }
    }
}

impl From<GeneratorDecl> for (String, Value) {
    fn from(decl: GeneratorDecl) -> Self {
        (decl.plugin_name, decl.options)
    }
}

/// Validate every declaration in order.
pub fn validate_generators(
    generators: &[GeneratorDecl],
    at: &FieldPath,
    diag: &mut ConfigDiagnostics,
) {
    for (i, decl) in generators.iter().enumerate() {
        decl.validate(&at.index(i), diag);
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "a mapping",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn serializes_as_tuple() {
        let decl = GeneratorDecl::new(
            "@eventcatalog/plugin-doc-generator-asyncapi",
            serde_json::Map::from_iter([("versionEvents".to_string(), json!(false))]),
        );
        let value = serde_json::to_value(&decl).unwrap();
        assert_eq!(
            value,
            json!(["@eventcatalog/plugin-doc-generator-asyncapi", { "versionEvents": false }])
        );
    }

    #[test]
    fn deserializes_from_toml_array() {
        #[derive(Deserialize)]
        struct Doc {
            generators: Vec<GeneratorDecl>,
        }

        let doc: Doc = toml::from_str(
            r#"generators = [["plugin-a", { pathToSpec = ["a.yaml"], versionEvents = false }]]"#,
        )
        .unwrap();
        assert_eq!(doc.generators[0].plugin_name, "plugin-a");
        assert_eq!(doc.generators[0].options["pathToSpec"], json!(["a.yaml"]));
    }

    #[test]
    fn non_mapping_options_are_rejected() {
        let decl = GeneratorDecl::from(("plugin-a".to_string(), json!(5)));
        let mut diag = ConfigDiagnostics::new();
        validate_generators(&[decl], &FieldPath::new("generators"), &mut diag);
        assert!(diag.names("generators[0].options"));
        assert!(diag.errors()[0].message.contains("a number"));
    }
}
