//! Implementation of the default render command.
//!
//! # What `scaffold <template-id>` does
//!
//! 1. Loads the template (unknown id: exit 2, nothing written)
//! 2. Builds bindings from config `defaults`, then `--set` (later wins)
//! 3. Renders; under `--strict` any unresolved placeholder aborts here
//! 4. Writes the file to `--out` or the template's default output
//! 5. Prints the template's required external configuration
//! 6. Warns about unresolved placeholders (exit 1) if any remain

use crate::cli::RenderArgs;
use crate::context::ScaffoldContext;
use crate::error::{Result, ScaffoldError, join_names};
use crate::exit_codes;
use crate::fs::{write_generated, write_generated_atomic};
use crate::template::{Bindings, TemplateStore};
use std::collections::BTreeSet;
use std::path::PathBuf;

/// What a render produced, for reporting.
#[derive(Debug)]
pub(crate) struct RenderOutcome {
    /// Where the file was written; `None` for a dry run.
    pub written: Option<PathBuf>,
    /// Rendered text.
    pub output: String,
    pub unresolved: BTreeSet<String>,
    pub required_config: Vec<String>,
}

impl RenderOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.unresolved.is_empty() {
            exit_codes::SUCCESS
        } else {
            exit_codes::UNRESOLVED_PLACEHOLDERS
        }
    }
}

/// Execute the render command and print its report.
pub fn cmd_render(ctx: &ScaffoldContext, args: RenderArgs) -> Result<i32> {
    let outcome = render_to_file(ctx, &args)?;

    match &outcome.written {
        Some(path) => {
            println!("Wrote {}", path.display());
            print_required_config(&outcome.required_config);
        }
        None => print!("{}", outcome.output),
    }

    if !outcome.unresolved.is_empty() {
        eprintln!(
            "Warning: unresolved placeholders left verbatim: {}",
            join_names(&outcome.unresolved)
        );
        eprintln!("Bind them with --set NAME=VALUE, or pass --strict to refuse partial output.");
    }

    Ok(outcome.exit_code())
}

/// Load, render and (unless dry-running) write a template.
pub(crate) fn render_to_file(ctx: &ScaffoldContext, args: &RenderArgs) -> Result<RenderOutcome> {
    let id = args
        .template_id
        .as_deref()
        .ok_or_else(|| ScaffoldError::Usage("missing template id".to_string()))?;

    let template = ctx.store.load(id)?;

    let mut bindings: Bindings = ctx
        .config
        .defaults
        .iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    for (name, value) in &args.set {
        bindings.insert(name.clone(), value.clone());
    }

    let result = template.render(&bindings);
    tracing::info!(
        "rendered '{}' with {} binding(s), {} unresolved",
        id,
        bindings.len(),
        result.unresolved.len()
    );

    let strict = args.strict || ctx.config.strict;
    if strict && !result.is_complete() {
        return Err(ScaffoldError::UnresolvedPlaceholders(result.unresolved));
    }

    let required_config = template.meta().required_config.clone();

    if args.dry_run {
        return Ok(RenderOutcome {
            written: None,
            output: result.output,
            unresolved: result.unresolved,
            required_config,
        });
    }

    let out = match (&args.out, &template.meta().default_out) {
        (Some(out), _) => out.clone(),
        (None, Some(default_out)) => PathBuf::from(default_out),
        (None, None) => {
            return Err(ScaffoldError::Usage(format!(
                "template '{}' has no default output path; pass --out <path>",
                id
            )));
        }
    };
    let path = ctx.resolve_path(&out);

    if args.atomic || ctx.config.atomic_writes {
        write_generated_atomic(&path, &result.output)?;
    } else {
        write_generated(&path, &result.output)?;
    }

    Ok(RenderOutcome {
        written: Some(path),
        output: result.output,
        unresolved: result.unresolved,
        required_config,
    })
}

fn print_required_config(required: &[String]) {
    if required.is_empty() {
        return;
    }

    println!();
    println!("Required external configuration:");
    for item in required {
        println!("  [ ] {}", item);
    }
}
