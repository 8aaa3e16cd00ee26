//! Implementation of the `scaffold list` command.

use super::show::TemplateSummary;
use crate::cli::ListArgs;
use crate::context::ScaffoldContext;
use crate::error::{Result, ScaffoldError};
use crate::exit_codes;
use crate::template::TemplateStore;

/// Collect a summary of every template reachable from the context's store.
pub(crate) fn collect_summaries(ctx: &ScaffoldContext) -> Result<Vec<TemplateSummary>> {
    ctx.store
        .ids()?
        .iter()
        .map(|id| ctx.store.load(id).map(|t| TemplateSummary::from(&t)))
        .collect()
}

/// Execute the `scaffold list` command.
pub fn cmd_list(ctx: &ScaffoldContext, args: ListArgs) -> Result<i32> {
    let summaries = collect_summaries(ctx)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summaries)
            .map_err(|e| ScaffoldError::Usage(format!("failed to serialize templates: {}", e)))?;
        println!("{}", json);
        return Ok(exit_codes::SUCCESS);
    }

    let width = summaries.iter().map(|s| s.id.len()).max().unwrap_or(0);
    println!("Templates:");
    for summary in &summaries {
        println!("  {:width$}  {}", summary.id, summary.description, width = width);
    }
    println!();
    println!("Run `scaffold show <id>` for placeholders and required configuration.");

    Ok(exit_codes::SUCCESS)
}
