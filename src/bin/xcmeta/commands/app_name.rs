//! `xcmeta app-name` command

use anyhow::Result;

use super::open_project;
use crate::cli::ProjectArgs;
use xcmeta::GlobalContext;

pub fn execute(ctx: &GlobalContext, args: ProjectArgs) -> Result<()> {
    println!("{}", open_project(ctx, args)?.app_name()?);
    Ok(())
}
