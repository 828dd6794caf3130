//! `xcmeta info` command

use anyhow::{Context, Result};

use super::open_project;
use crate::cli::{InfoArgs, ProjectArgs};
use xcmeta::ops::{describe, format_summary};
use xcmeta::GlobalContext;

pub fn execute(ctx: &GlobalContext, project: ProjectArgs, args: InfoArgs) -> Result<()> {
    let project = open_project(ctx, project)?;
    let summary = describe(&project)?;

    if args.json {
        let json = serde_json::to_string_pretty(&summary)
            .context("failed to serialize project summary")?;
        println!("{}", json);
    } else {
        print!("{}", format_summary(&summary));
    }

    Ok(())
}
