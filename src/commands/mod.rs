//! Command implementations for scaffold.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations. Rendering is the default when no subcommand is given.
//! Handlers return the process exit code on success so that a partial
//! render can exit non-zero without being an error.

mod list;
mod render;
mod show;


use crate::cli::{Cli, Command};
use crate::context::ScaffoldContext;
use crate::error::Result;

/// Dispatch a parsed command line to its implementation.
pub fn dispatch(cli: Cli) -> Result<i32> {
    let ctx = ScaffoldContext::resolve(&cli.global)?;

    match cli.command {
        Some(Command::List(args)) => list::cmd_list(&ctx, args),
        Some(Command::Show(args)) => show::cmd_show(&ctx, args),
        None => render::cmd_render(&ctx, cli.render),
    }
}
