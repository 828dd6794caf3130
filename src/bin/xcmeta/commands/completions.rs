//! `xcmeta completions` command

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};

/// Print a completion script for `args.shell` to stdout.
pub fn execute(args: CompletionsArgs) -> Result<()> {
    let mut cli = Cli::command();
    let mut stdout = io::stdout().lock();

    generate(args.shell, &mut cli, "xcmeta", &mut stdout);
    stdout
        .flush()
        .context("failed to write completion script")
}
