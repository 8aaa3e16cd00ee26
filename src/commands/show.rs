//! Implementation of the `scaffold show` command.
//!
//! Displays a template's metadata alongside the placeholders discovered in
//! its text, so the static required-configuration list can be compared with
//! what the template actually references.

use crate::cli::ShowArgs;
use crate::context::ScaffoldContext;
use crate::error::{Result, ScaffoldError};
use crate::exit_codes;
use crate::template::{Template, TemplateStore};
use serde::Serialize;

/// Serializable view of a template for `--json` output.
#[derive(Debug, Serialize)]
pub(crate) struct TemplateSummary {
    pub id: String,
    pub description: String,
    pub default_out: Option<String>,
    pub placeholders: Vec<String>,
    pub required_config: Vec<String>,
}

impl From<&Template> for TemplateSummary {
    fn from(template: &Template) -> Self {
        let meta = template.meta();
        Self {
            id: template.id().to_string(),
            description: meta.description.clone(),
            default_out: meta.default_out.clone(),
            placeholders: template.placeholders().into_iter().collect(),
            required_config: meta.required_config.clone(),
        }
    }
}

/// Execute the `scaffold show` command.
pub fn cmd_show(ctx: &ScaffoldContext, args: ShowArgs) -> Result<i32> {
    let template = ctx.store.load(&args.template_id)?;
    let summary = TemplateSummary::from(&template);

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .map_err(|e| ScaffoldError::Usage(format!("failed to serialize template: {}", e)))?;
        println!("{}", json);
        return Ok(exit_codes::SUCCESS);
    }

    println!("{}", summary.id);
    println!("{}", "=".repeat(summary.id.len()));
    println!();

    if !summary.description.is_empty() {
        println!("Description:  {}", summary.description);
    }
    println!(
        "Default out:  {}",
        summary.default_out.as_deref().unwrap_or("(none, --out required)")
    );

    println!();
    println!("Placeholders:");
    if summary.placeholders.is_empty() {
        println!("  (none)");
    }
    for name in &summary.placeholders {
        println!("  {{{{{}}}}}", name);
    }

    if !summary.required_config.is_empty() {
        println!();
        println!("Required external configuration:");
        for item in &summary.required_config {
            println!("  - {}", item);
        }
    }

    Ok(exit_codes::SUCCESS)
}
