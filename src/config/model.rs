//! Config struct definition and default implementation.

use crate::template::TemplateMeta;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Config file looked up in the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = ".scaffold.yaml";

/// Configuration for the scaffold CLI.
///
/// Every field is optional. Unknown fields in the YAML are ignored for
/// forward compatibility.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Refuse to write a render with unresolved placeholders.
    pub strict: bool,

    /// Write generated files via temp file and rename.
    pub atomic_writes: bool,

    /// Directories searched for `<id>.tmpl`, before the built-ins.
    /// Relative entries are resolved against the config file's directory.
    pub template_dirs: Vec<String>,

    /// Metadata for templates found in `template_dirs`.
    pub templates: BTreeMap<String, TemplateManifest>,

    /// Bindings applied before any `--set`.
    pub defaults: BTreeMap<String, String>,
}

/// Metadata declared for a directory template.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateManifest {
    pub description: String,

    pub default_out: Option<String>,

    /// Secrets or settings the generated file expects to exist.
    pub required_config: Vec<String>,
}

impl From<&TemplateManifest> for TemplateMeta {
    fn from(manifest: &TemplateManifest) -> Self {
        TemplateMeta {
            description: manifest.description.clone(),
            default_out: manifest.default_out.clone(),
            required_config: manifest.required_config.clone(),
        }
    }
}
