//! Error types for the scaffold CLI.
//!
//! Uses thiserror for derive macros. Every variant names the id or path it
//! concerns so the message printed by `main` is actionable on its own.

use crate::exit_codes;
use std::collections::BTreeSet;
use std::path::PathBuf;
use thiserror::Error;

/// Main error type for scaffold operations.
///
/// Each variant maps to a specific exit code via [`ScaffoldError::exit_code`].
#[derive(Error, Debug)]
pub enum ScaffoldError {
    /// No store knows the requested template id.
    #[error("unknown template '{id}' (run `scaffold list` to see available templates)")]
    TemplateNotFound { id: String },

    /// A filesystem operation on `path` failed.
    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The config file could not be read, parsed, or validated.
    #[error("config error: {0}")]
    Config(String),

    /// The invocation is incomplete in a way clap cannot detect.
    #[error("{0}")]
    Usage(String),

    /// Strict mode refused to write a render with unresolved placeholders.
    #[error("unresolved placeholders: {}", join_names(.0))]
    UnresolvedPlaceholders(BTreeSet<String>),
}

impl ScaffoldError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            ScaffoldError::TemplateNotFound { .. } => exit_codes::TEMPLATE_NOT_FOUND,
            ScaffoldError::Io { .. } => exit_codes::WRITE_FAILURE,
            ScaffoldError::Config(_) => exit_codes::CONFIG_ERROR,
            ScaffoldError::Usage(_) => exit_codes::CONFIG_ERROR,
            ScaffoldError::UnresolvedPlaceholders(_) => exit_codes::UNRESOLVED_PLACEHOLDERS,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Render a set of placeholder names as `A, B, C`.
pub fn join_names(names: &BTreeSet<String>) -> String {
    names.iter().map(String::as_str).collect::<Vec<_>>().join(", ")
}

/// Result type alias for scaffold operations.
pub type Result<T> = std::result::Result<T, ScaffoldError>;
