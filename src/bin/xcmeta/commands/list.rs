//! `xcmeta schemes`, `xcmeta configurations` and `xcmeta targets`

use anyhow::Result;

use super::open_project;
use crate::cli::ProjectArgs;
use xcmeta::GlobalContext;

pub fn schemes(ctx: &GlobalContext, args: ProjectArgs) -> Result<()> {
    print_names(&open_project(ctx, args)?.schemes()?);
    Ok(())
}

pub fn configurations(ctx: &GlobalContext, args: ProjectArgs) -> Result<()> {
    print_names(&open_project(ctx, args)?.configurations()?);
    Ok(())
}

pub fn targets(ctx: &GlobalContext, args: ProjectArgs) -> Result<()> {
    print_names(&open_project(ctx, args)?.targets()?);
    Ok(())
}

fn print_names(names: &[String]) {
    for name in names {
        println!("{}", name);
    }
}
