//! Everything xcmeta knows about a project, in one value.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;

use crate::core::project::{Platform, Project};

/// Summary of a project, as printed by `xcmeta info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectSummary {
    pub path: PathBuf,
    pub workspace: bool,
    pub schemes: Vec<String>,
    pub configurations: Vec<String>,
    pub targets: Vec<String>,
    pub app_name: String,
    pub platform: Platform,
}

/// Collect the summary. Runs `xcodebuild` at most twice.
pub fn describe(project: &Project) -> Result<ProjectSummary> {
    Ok(ProjectSummary {
        path: project.path().to_path_buf(),
        workspace: project.is_workspace(),
        schemes: project.schemes()?,
        configurations: project.configurations()?,
        targets: project.targets()?,
        app_name: project.app_name()?,
        platform: project.platform()?,
    })
}

/// Render the summary for people.
pub fn format_summary(summary: &ProjectSummary) -> String {
    use std::fmt::Write;

    let mut out = String::new();
    let kind = if summary.workspace { "Workspace" } else { "Project" };

    let _ = writeln!(out, "{}: {}", kind, summary.path.display());
    let _ = writeln!(out, "App name: {}", summary.app_name);
    let _ = writeln!(out, "Platform: {}", summary.platform);

    for (title, names) in [
        ("Schemes", &summary.schemes),
        ("Configurations", &summary.configurations),
        ("Targets", &summary.targets),
    ] {
        if names.is_empty() {
            let _ = writeln!(out, "{}: (none)", title);
            continue;
        }
        let _ = writeln!(out, "{}:", title);
        for name in names {
            let _ = writeln!(out, "  {}", name);
        }
    }

    out
}
