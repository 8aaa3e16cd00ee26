//! Placeholder discovery and substitution.
//!
//! # Syntax
//!
//! - `{{NAME}}` marks a substitution point. `NAME` is one or more of
//!   `A-Z`, `0-9` and `_`.
//! - Anything else, including `{{name}}`, `{{ NAME }}`, `{{}}` or a `{{`
//!   with no closing `}}`, is ordinary text and passes through untouched.
//!
//! Unlike a strict engine, a missing binding is not an error: the token is
//! left verbatim and its name is reported in [`RenderResult::unresolved`],
//! so the caller decides whether a partial render is acceptable.

use regex::{Captures, Regex};
use std::collections::{BTreeSet, HashMap};
use std::sync::LazyLock;

static PLACEHOLDER_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\{\{([A-Z0-9_]+)\}\}").expect("Invalid placeholder regex"));

static NAME_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z0-9_]+$").expect("Invalid placeholder name regex"));

/// Binding set: placeholder name to replacement value.
pub type Bindings = HashMap<String, String>;

/// Output of a single render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    /// Template text with every bound placeholder substituted.
    pub output: String,
    /// Names that appeared in the template but had no binding.
    pub unresolved: BTreeSet<String>,
}

impl RenderResult {
    /// True when every placeholder in the template was bound.
    pub fn is_complete(&self) -> bool {
        self.unresolved.is_empty()
    }
}

/// Check whether `name` is a legal placeholder name.
pub fn is_valid_name(name: &str) -> bool {
    NAME_REGEX.is_match(name)
}

/// Return the distinct placeholder names used in `template`.
pub fn discover_placeholders(template: &str) -> BTreeSet<String> {
    PLACEHOLDER_REGEX
        .captures_iter(template)
        .map(|caps| caps[1].to_string())
        .collect()
}

/// Substitute `bindings` into `template`.
///
/// Values are inserted raw and are not scanned again, so a value that
/// itself looks like `{{OTHER}}` is emitted literally.
///
/// # Examples
///
/// ```ignore
/// let bindings = vars([("NAME", "Ann")]);
/// let result = render("Hello {{NAME}}, welcome to {{APP}}", &bindings);
/// assert_eq!(result.output, "Hello Ann, welcome to {{APP}}");
/// assert!(result.unresolved.contains("APP"));
/// ```
pub fn render(template: &str, bindings: &Bindings) -> RenderResult {
    let mut unresolved = BTreeSet::new();

    let output = PLACEHOLDER_REGEX
        .replace_all(template, |caps: &Captures| {
            let name = &caps[1];
            match bindings.get(name) {
                Some(value) => value.clone(),
                None => {
                    unresolved.insert(name.to_string());
                    caps[0].to_string()
                }
            }
        })
        .into_owned();

    RenderResult { output, unresolved }
}

/// Helper to create a binding set from a list of key-value pairs.
#[allow(dead_code)]
pub fn vars<I, K, V>(pairs: I) -> Bindings
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
