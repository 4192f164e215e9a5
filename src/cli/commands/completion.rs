//! Shell completion command implementation.

use std::io::Write;

use clap::CommandFactory;

use crate::cli::{Cli, CompletionArgs};

/// Write a completion script for the requested shell.
pub fn execute<W: Write>(args: &CompletionArgs, out: &mut W) {
    let mut command = Cli::command();
    clap_complete::generate(args.shell, &mut command, "astro", out);
}
