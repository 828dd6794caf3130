//! xcmeta CLI - read metadata from Xcode projects

use std::io::IsTerminal;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use xcmeta::{GlobalContext, ProjectError};

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {:#}", e);
        if let Some(help) = e.downcast_ref::<ProjectError>().and_then(|pe| pe.suggestion()) {
            eprintln!("{}", help);
        }
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout stays clean for scripts
    let filter = if cli.verbose {
        EnvFilter::new("xcmeta=debug")
    } else {
        EnvFilter::new("xcmeta=info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .init();

    let mut ctx = GlobalContext::new()?;
    ctx.set_verbose(cli.verbose);
    if cli.silent {
        ctx.set_silent();
    }

    let project = cli.project;
    match cli.command {
        Commands::Schemes => commands::list::schemes(&ctx, project),
        Commands::Configurations => commands::list::configurations(&ctx, project),
        Commands::Targets => commands::list::targets(&ctx, project),
        Commands::AppName => commands::app_name::execute(&ctx, project),
        Commands::Platform => commands::platform::execute(&ctx, project),
        Commands::Setting(args) => commands::setting::execute(&ctx, project, args),
        Commands::Settings(args) => commands::setting::execute_all(&ctx, project, args),
        Commands::Info(args) => commands::info::execute(&ctx, project, args),
        Commands::Doctor => commands::doctor::execute(&ctx),
        Commands::Completions(args) => commands::completions::execute(args),
    }
}
