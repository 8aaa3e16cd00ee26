//! Template lookup by id.
//!
//! Stores are searched through the [`TemplateStore`] trait so the CLI does
//! not care whether a template is compiled in or read from disk. The CLI
//! builds a [`LayeredStore`] with user directories first and the embedded
//! built-ins last, so a directory can shadow a built-in of the same id.

use super::embedded::BUILTINS;
use super::{Template, TemplateMeta};
use crate::error::{Result, ScaffoldError};
use regex::Regex;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::LazyLock;

static ID_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("Invalid template id regex"));

/// File extension of on-disk templates.
pub const TEMPLATE_EXTENSION: &str = "tmpl";

/// Subcommand names; a template with one of these ids could never be rendered.
pub const RESERVED_IDS: &[&str] = &["help", "list", "show"];

/// Check whether `id` is a legal template id.
///
/// Ids never contain path separators or dots, so an id can be joined onto
/// a directory without escaping it.
pub fn is_valid_id(id: &str) -> bool {
    ID_REGEX.is_match(id) && !RESERVED_IDS.contains(&id)
}

/// A source of templates.
pub trait TemplateStore {
    /// Load the template named `id`.
    ///
    /// Returns `ScaffoldError::TemplateNotFound` if this store has no such id.
    fn load(&self, id: &str) -> Result<Template>;

    /// Ids available from this store, sorted.
    fn ids(&self) -> Result<Vec<String>>;
}

fn not_found(id: &str) -> ScaffoldError {
    ScaffoldError::TemplateNotFound { id: id.to_string() }
}

/// Templates compiled into the binary.
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbeddedStore;

impl TemplateStore for EmbeddedStore {
    fn load(&self, id: &str) -> Result<Template> {
        BUILTINS
            .iter()
            .find(|b| b.id == id)
            .map(|b| Template::new(b.id, b.text, b.meta()))
            .ok_or_else(|| not_found(id))
    }

    fn ids(&self) -> Result<Vec<String>> {
        Ok(BUILTINS.iter().map(|b| b.id.to_string()).collect())
    }
}

/// Templates stored as `<dir>/<id>.tmpl`.
#[derive(Debug, Clone)]
pub struct DirectoryStore {
    dir: PathBuf,
    metadata: BTreeMap<String, TemplateMeta>,
}

impl DirectoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            metadata: BTreeMap::new(),
        }
    }

    /// Attach metadata (description, default output, required config) by id.
    pub fn with_metadata(mut self, metadata: BTreeMap<String, TemplateMeta>) -> Self {
        self.metadata = metadata;
        self
    }

    fn template_path(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.{}", id, TEMPLATE_EXTENSION))
    }
}

impl TemplateStore for DirectoryStore {
    fn load(&self, id: &str) -> Result<Template> {
        if !is_valid_id(id) {
            return Err(not_found(id));
        }

        let path = self.template_path(id);
        let text = match fs::read_to_string(&path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(not_found(id)),
            Err(e) => return Err(ScaffoldError::io(path, e)),
        };

        tracing::debug!("loaded template '{}' from {}", id, path.display());
        let meta = self.metadata.get(id).cloned().unwrap_or_default();
        Ok(Template::new(id, text, meta))
    }

    fn ids(&self) -> Result<Vec<String>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(ScaffoldError::io(&self.dir, e)),
        };

        let mut ids = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| ScaffoldError::io(&self.dir, e))?.path();
            if path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION) {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str())
                && is_valid_id(stem)
                && path.is_file()
            {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }
}

/// Searches several stores in order; the first one that knows an id wins.
#[derive(Default)]
pub struct LayeredStore {
    layers: Vec<Box<dyn TemplateStore>>,
}

impl LayeredStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a store with lower priority than every store already added.
    pub fn push(mut self, store: impl TemplateStore + 'static) -> Self {
        self.layers.push(Box::new(store));
        self
    }
}

impl TemplateStore for LayeredStore {
    fn load(&self, id: &str) -> Result<Template> {
        for layer in &self.layers {
            match layer.load(id) {
                Err(ScaffoldError::TemplateNotFound { .. }) => continue,
                other => return other,
            }
        }
        Err(not_found(id))
    }

    fn ids(&self) -> Result<Vec<String>> {
        let mut ids = BTreeSet::new();
        for layer in &self.layers {
            ids.extend(layer.ids()?);
        }
        Ok(ids.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_valid_ids() {
        assert!(is_valid_id("android-ci"));
        assert!(is_valid_id("debug_log2"));
        assert!(!is_valid_id(""));
        assert!(!is_valid_id("-leading"));
        assert!(!is_valid_id("Upper"));
        assert!(!is_valid_id("../etc/passwd"));
        assert!(!is_valid_id("a/b"));
        assert!(!is_valid_id("a.b"));
    }

    #[test]
    fn test_subcommand_names_are_reserved() {
        for id in RESERVED_IDS {
            assert!(!is_valid_id(id));
        }

        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("list.tmpl"), "shadowed").unwrap();
        fs::write(temp.path().join("listing.tmpl"), "fine").unwrap();
        let store = DirectoryStore::new(temp.path());

        assert_eq!(store.ids().unwrap(), vec!["listing"]);
        assert!(matches!(
            store.load("list"),
            Err(ScaffoldError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn test_embedded_store_loads_builtins() {
        let store = EmbeddedStore;
        let ids = store.ids().unwrap();
        assert_eq!(ids, vec!["android-ci", "debug-log-viewer"]);

        let template = store.load("android-ci").unwrap();
        assert_eq!(template.id(), "android-ci");
        assert!(template.text().contains("{{APP_NAME}}"));
        assert_eq!(
            template.meta().default_out.as_deref(),
            Some(".github/workflows/android-ci.yml")
        );
        assert!(!template.meta().required_config.is_empty());
    }

    #[test]
    fn test_embedded_store_unknown_id() {
        let err = EmbeddedStore.load("ios-ci").unwrap_err();
        assert!(matches!(err, ScaffoldError::TemplateNotFound { id } if id == "ios-ci"));
    }

    #[test]
    fn test_directory_store_load_and_list() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("greeting.tmpl"), "Hello {{NAME}}").unwrap();
        fs::write(temp.path().join("notes.txt"), "ignored").unwrap();
        fs::write(temp.path().join("Bad Name.tmpl"), "ignored").unwrap();

        let mut metadata = BTreeMap::new();
        metadata.insert(
            "greeting".to_string(),
            TemplateMeta {
                description: "Say hello".to_string(),
                default_out: Some("hello.txt".to_string()),
                required_config: vec!["NONE".to_string()],
            },
        );
        let store = DirectoryStore::new(temp.path()).with_metadata(metadata);

        assert_eq!(store.ids().unwrap(), vec!["greeting"]);

        let template = store.load("greeting").unwrap();
        assert_eq!(template.text(), "Hello {{NAME}}");
        assert_eq!(template.meta().description, "Say hello");
        assert_eq!(template.meta().default_out.as_deref(), Some("hello.txt"));
    }

    #[test]
    fn test_directory_store_missing_template() {
        let temp = TempDir::new().unwrap();
        let store = DirectoryStore::new(temp.path());
        assert!(matches!(
            store.load("absent"),
            Err(ScaffoldError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn test_directory_store_rejects_traversal() {
        let temp = TempDir::new().unwrap();
        let inner = temp.path().join("inner");
        fs::create_dir(&inner).unwrap();
        fs::write(temp.path().join("secret.tmpl"), "x").unwrap();

        let store = DirectoryStore::new(&inner);
        assert!(matches!(
            store.load("../secret"),
            Err(ScaffoldError::TemplateNotFound { .. })
        ));
    }

    #[test]
    fn test_directory_store_missing_dir_lists_nothing() {
        let temp = TempDir::new().unwrap();
        let store = DirectoryStore::new(temp.path().join("nope"));
        assert!(store.ids().unwrap().is_empty());
    }

    #[test]
    fn test_layered_store_directory_shadows_builtin() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("android-ci.tmpl"), "custom {{X}}").unwrap();
        fs::write(temp.path().join("extra.tmpl"), "extra").unwrap();

        let store = LayeredStore::new()
            .push(DirectoryStore::new(temp.path()))
            .push(EmbeddedStore);

        assert_eq!(store.load("android-ci").unwrap().text(), "custom {{X}}");
        assert!(store.load("debug-log-viewer").is_ok());
        assert_eq!(
            store.ids().unwrap(),
            vec!["android-ci", "debug-log-viewer", "extra"]
        );
        assert!(matches!(
            store.load("missing"),
            Err(ScaffoldError::TemplateNotFound { .. })
        ));
    }
}
