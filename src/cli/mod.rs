//! CLI argument parsing for scaffold.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use crate::exit_codes;
use crate::template::is_valid_name;
use clap::error::ErrorKind;
use clap::{ArgAction, Args, Parser, Subcommand};
use std::path::PathBuf;

/// Scaffold: render a named template into a file.
///
/// Placeholders are written `{{NAME}}`. Bind them with `--set NAME=VALUE`;
/// unbound placeholders are left as-is and reported.
#[derive(Parser, Debug)]
#[command(name = "scaffold")]
#[command(author, version, about, long_about = None)]
#[command(args_conflicts_with_subcommands = true)]
#[command(subcommand_negates_reqs = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    #[command(flatten)]
    pub render: RenderArgs,

    #[command(flatten)]
    pub global: GlobalArgs,
}

/// Options shared by every command.
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Config file (default: ./.scaffold.yaml when present).
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Extra template directory, searched before configured ones (repeatable).
    /// Files named list.tmpl, show.tmpl or help.tmpl are ignored.
    #[arg(long = "template-dir", global = true, value_name = "DIR", action = ArgAction::Append)]
    pub template_dirs: Vec<PathBuf>,

    /// Verbosity level (-v, -vv, -vvv).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available subcommands. Rendering is the default when none is given.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List available templates.
    List(ListArgs),

    /// Show a template's placeholders and required configuration.
    Show(ShowArgs),
}

/// Arguments for rendering a template.
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Template id (see `scaffold list`).
    #[arg(required = true, value_name = "TEMPLATE_ID")]
    pub template_id: Option<String>,

    /// Bind a placeholder: NAME=VALUE (repeatable, later wins).
    #[arg(long = "set", value_name = "NAME=VALUE", value_parser = parse_binding, action = ArgAction::Append)]
    pub set: Vec<(String, String)>,

    /// Output path (default: the template's default output).
    #[arg(long, short, value_name = "PATH")]
    pub out: Option<PathBuf>,

    /// Fail without writing if any placeholder is unresolved.
    #[arg(long)]
    pub strict: bool,

    /// Write through a temporary file and rename.
    #[arg(long)]
    pub atomic: bool,

    /// Print the rendered text instead of writing it.
    #[arg(long)]
    pub dry_run: bool,
}

/// Arguments for the `list` command.
#[derive(Args, Debug, Default)]
pub struct ListArgs {
    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `show` command.
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Template id.
    pub template_id: String,

    /// Output as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Parse a `NAME=VALUE` binding. The first `=` splits; the value may be empty.
pub fn parse_binding(raw: &str) -> Result<(String, String), String> {
    let (name, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected NAME=VALUE, got '{}'", raw))?;

    if !is_valid_name(name) {
        return Err(format!(
            "invalid placeholder name '{}' (use A-Z, 0-9 and '_')",
            name
        ));
    }

    Ok((name.to_string(), value.to_string()))
}

impl Cli {
    /// Parse command-line arguments without exiting on failure.
    pub fn parse_args() -> Result<Self, clap::Error> {
        Self::try_parse()
    }
}

/// Exit code for a failed parse.
///
/// `--help` and `--version` are successes; every other argument error is a
/// usage error so it never collides with an unknown template id.
pub fn parse_error_exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
        _ => exit_codes::CONFIG_ERROR,
    }
}
