//! Config loading, validation, and utility operations.

use super::model::{Config, DEFAULT_CONFIG_FILE};
use crate::error::{Result, ScaffoldError};
use crate::template::{TemplateMeta, is_valid_id, is_valid_name};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(ScaffoldError::Config)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            ScaffoldError::Config(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        tracing::info!("loaded config from {}", path.display());
        Self::from_yaml(&content)
    }

    /// Find and load the config for an invocation.
    ///
    /// An explicitly named file must exist. Without one, `DEFAULT_CONFIG_FILE`
    /// in `cwd` is used if present, and defaults otherwise. Returns the config
    /// together with the directory relative `template_dirs` resolve against.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<(Self, PathBuf)> {
        let path = match explicit {
            Some(path) => cwd.join(path),
            None => {
                let candidate = cwd.join(DEFAULT_CONFIG_FILE);
                if !candidate.is_file() {
                    tracing::debug!("no {} found, using defaults", DEFAULT_CONFIG_FILE);
                    return Ok((Self::default(), cwd.to_path_buf()));
                }
                candidate
            }
        };

        let config = Self::load(&path)?;
        let base = path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| cwd.to_path_buf());
        Ok((config, base))
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        // An empty document deserializes as unit, not as an empty mapping.
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| ScaffoldError::Config(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `template_dirs` entries must be non-empty
    /// - `templates` keys must be valid template ids
    /// - `defaults` keys must be valid placeholder names
    pub fn validate(&self) -> Result<()> {
        if self.template_dirs.iter().any(|d| d.trim().is_empty()) {
            return Err(ScaffoldError::Config(
                "config validation failed: template_dirs entries must be non-empty".to_string(),
            ));
        }

        for id in self.templates.keys() {
            if !is_valid_id(id) {
                return Err(ScaffoldError::Config(format!(
                    "config validation failed: '{}' is not a valid template id (use lowercase letters, digits, '-' and '_')",
                    id
                )));
            }
        }

        for name in self.defaults.keys() {
            if !is_valid_name(name) {
                return Err(ScaffoldError::Config(format!(
                    "config validation failed: '{}' in defaults is not a valid placeholder name (use A-Z, 0-9 and '_')",
                    name
                )));
            }
        }

        Ok(())
    }

    /// Template directories as paths, relative entries joined onto `base`.
    pub fn template_dir_paths(&self, base: &Path) -> Vec<PathBuf> {
        self.template_dirs.iter().map(|d| base.join(d)).collect()
    }

    /// Template metadata keyed by id.
    pub fn template_metadata(&self) -> BTreeMap<String, TemplateMeta> {
        self.templates
            .iter()
            .map(|(id, manifest)| (id.clone(), TemplateMeta::from(manifest)))
            .collect()
    }
}
