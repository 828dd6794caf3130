//! Command implementations

pub mod app_name;
pub mod completions;
pub mod doctor;
pub mod info;
pub mod list;
pub mod platform;
pub mod setting;

use anyhow::Result;

use crate::cli::ProjectArgs;
use xcmeta::{GlobalContext, Project};

/// Open the project selected on the command line (or found in cwd).
pub fn open_project(ctx: &GlobalContext, args: ProjectArgs) -> Result<Project> {
    let options = ctx.discover_options(args.into())?;
    Project::new(options, ctx.config())
}
