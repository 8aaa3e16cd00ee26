//! Template model, placeholder rendering, and template storage.
//!
//! This module provides:
//!
//! - **Placeholder**: `{{NAME}}` discovery and substitution
//! - **Store**: lookup of templates by id (embedded built-ins and directories)
//! - **Embedded**: the built-in templates compiled into the binary
//!
//! A [`Template`] is loaded once and rendered any number of times; rendering
//! always produces a new string and never touches the template text.

mod embedded;
mod placeholder;
mod store;


pub use placeholder::{
    Bindings, RenderResult, discover_placeholders, is_valid_name, render, vars,
};
pub use store::{DirectoryStore, EmbeddedStore, LayeredStore, TemplateStore, is_valid_id};

use std::collections::BTreeSet;

/// Static metadata attached to a template id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TemplateMeta {
    /// One-line summary shown by `scaffold list`.
    pub description: String,
    /// Output path used when `--out` is not given.
    pub default_out: Option<String>,
    /// Names of secrets or settings the generated file expects to exist.
    pub required_config: Vec<String>,
}

/// An immutable, named template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    id: String,
    text: String,
    meta: TemplateMeta,
}

impl Template {
    pub fn new(id: impl Into<String>, text: impl Into<String>, meta: TemplateMeta) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            meta,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn meta(&self) -> &TemplateMeta {
        &self.meta
    }

    /// Distinct placeholder names used by this template.
    pub fn placeholders(&self) -> BTreeSet<String> {
        discover_placeholders(self.text())
    }

    /// Render this template with `bindings`.
    pub fn render(&self, bindings: &Bindings) -> RenderResult {
        render(self.text(), bindings)
    }
}
