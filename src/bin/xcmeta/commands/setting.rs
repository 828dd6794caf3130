//! `xcmeta setting` and `xcmeta settings` commands

use anyhow::Result;

use super::open_project;
use crate::cli::{ProjectArgs, SettingArgs, SettingsArgs};
use xcmeta::GlobalContext;

/// Print one setting. Exits with status 1 if it isn't set.
pub fn execute(ctx: &GlobalContext, project: ProjectArgs, args: SettingArgs) -> Result<()> {
    let project = open_project(ctx, project)?;

    match project.build_setting(&args.key, !args.required)? {
        Some(value) => {
            println!("{}", value);
            Ok(())
        }
        None => std::process::exit(1),
    }
}

pub fn execute_all(ctx: &GlobalContext, project: ProjectArgs, args: SettingsArgs) -> Result<()> {
    let project = open_project(ctx, project)?;

    if args.raw {
        print!("{}", project.raw_build_settings()?);
        return Ok(());
    }

    for (key, value) in project.build_settings()?.iter() {
        println!("{} = {}", key, value);
    }

    Ok(())
}
