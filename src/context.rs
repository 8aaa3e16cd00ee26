//! Invocation context resolution for scaffold.
//!
//! Every command starts by resolving the working directory, the config
//! file, and the layered template store. Commands take a resolved
//! [`ScaffoldContext`] so they never read process-global state themselves.

use crate::cli::GlobalArgs;
use crate::config::Config;
use crate::error::{Result, ScaffoldError};
use crate::template::{DirectoryStore, EmbeddedStore, LayeredStore};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved state for one scaffold invocation.
pub struct ScaffoldContext {
    /// Directory relative output paths and `--template-dir` values resolve against.
    pub cwd: PathBuf,

    /// Loaded (or default) configuration.
    pub config: Config,

    /// Template store: `--template-dir`s, then configured dirs, then built-ins.
    pub store: LayeredStore,
}

impl ScaffoldContext {
    /// Resolve the context from the current working directory.
    pub fn resolve(global: &GlobalArgs) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| ScaffoldError::io(".", e))?;
        Self::resolve_from(global, &cwd)
    }

    /// Resolve the context as if invoked from `cwd`.
    pub fn resolve_from(global: &GlobalArgs, cwd: &Path) -> Result<Self> {
        let (config, config_base) = Config::discover(global.config.as_deref(), cwd)?;

        for dir in missing_template_dirs(global, cwd) {
            tracing::warn!(
                "template directory {} does not exist; ignoring it",
                dir.display()
            );
        }
        let metadata = config.template_metadata();

        let dirs = global
            .template_dirs
            .iter()
            .map(|d| cwd.join(d))
            .chain(config.template_dir_paths(&config_base));

        let mut store = LayeredStore::new();
        for dir in dirs {
            tracing::debug!("template directory: {}", dir.display());
            store = store.push(DirectoryStore::new(dir).with_metadata(metadata.clone()));
        }
        store = store.push(EmbeddedStore);

        Ok(Self {
            cwd: cwd.to_path_buf(),
            config,
            store,
        })
    }

    /// Resolve `path` against the invocation directory.
    pub fn resolve_path(&self, path: &Path) -> PathBuf {
        self.cwd.join(path)
    }
}

/// `--template-dir` values that are not existing directories.
fn missing_template_dirs(global: &GlobalArgs, cwd: &Path) -> Vec<PathBuf> {
    global
        .template_dirs
        .iter()
        .map(|d| cwd.join(d))
        .filter(|d| !d.is_dir())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::TemplateStore;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_resolve_from_without_config_has_builtins() {
        let temp = TempDir::new().unwrap();
        let ctx = ScaffoldContext::resolve_from(&GlobalArgs::default(), temp.path()).unwrap();

        assert_eq!(ctx.config, Config::default());
        assert!(ctx.store.load("android-ci").is_ok());
    }

    #[test]
    fn test_cli_dirs_take_precedence_over_config_dirs() {
        let temp = TempDir::new().unwrap();
        let cli_dir = temp.path().join("cli");
        let conf_dir = temp.path().join("conf");
        fs::create_dir_all(&cli_dir).unwrap();
        fs::create_dir_all(&conf_dir).unwrap();
        fs::write(cli_dir.join("greet.tmpl"), "from cli").unwrap();
        fs::write(conf_dir.join("greet.tmpl"), "from config").unwrap();
        fs::write(conf_dir.join("other.tmpl"), "other").unwrap();
        fs::write(
            temp.path().join(".scaffold.yaml"),
            "template_dirs: [conf]\ntemplates:\n  greet:\n    description: Greeter\n",
        )
        .unwrap();

        let global = GlobalArgs {
            template_dirs: vec![PathBuf::from("cli")],
            ..GlobalArgs::default()
        };
        let ctx = ScaffoldContext::resolve_from(&global, temp.path()).unwrap();

        let greet = ctx.store.load("greet").unwrap();
        assert_eq!(greet.text(), "from cli");
        assert_eq!(greet.meta().description, "Greeter");
        assert_eq!(ctx.store.load("other").unwrap().text(), "other");
    }

    #[test]
    fn test_missing_template_dirs_reported() {
        let temp = TempDir::new().unwrap();
        fs::create_dir(temp.path().join("present")).unwrap();
        let global = GlobalArgs {
            template_dirs: vec![PathBuf::from("present"), PathBuf::from("absent")],
            ..GlobalArgs::default()
        };

        assert_eq!(
            missing_template_dirs(&global, temp.path()),
            vec![temp.path().join("absent")]
        );

        let ctx = ScaffoldContext::resolve_from(&global, temp.path()).unwrap();
        assert!(ctx.store.load("android-ci").is_ok());
    }

    #[test]
    fn test_resolve_path_is_relative_to_cwd() {
        let temp = TempDir::new().unwrap();
        let ctx = ScaffoldContext::resolve_from(&GlobalArgs::default(), temp.path()).unwrap();
        assert_eq!(
            ctx.resolve_path(Path::new("a/b.yml")),
            temp.path().join("a/b.yml")
        );
    }
}
