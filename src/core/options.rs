//! Project selection options and the `xcodebuild` arguments they imply.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Which project or workspace to inspect, and for which scheme.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectOptions {
    /// Path to an `.xcworkspace`; wins over `project` when both are set
    pub workspace: Option<PathBuf>,

    /// Path to an `.xcodeproj`
    pub project: Option<PathBuf>,

    /// Scheme used for `-showBuildSettings`
    pub scheme: Option<String>,

    /// Build configuration used for `-showBuildSettings`
    pub configuration: Option<String>,
}

impl ProjectOptions {
    /// Options selecting a workspace.
    pub fn workspace(path: impl Into<PathBuf>) -> Self {
        ProjectOptions {
            workspace: Some(path.into()),
            ..Default::default()
        }
    }

    /// Options selecting a project.
    pub fn project(path: impl Into<PathBuf>) -> Self {
        ProjectOptions {
            project: Some(path.into()),
            ..Default::default()
        }
    }

    /// Set the scheme.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Set the build configuration.
    pub fn with_configuration(mut self, configuration: impl Into<String>) -> Self {
        self.configuration = Some(configuration.into());
        self
    }

    /// The workspace path, ignoring empty values.
    pub fn workspace_path(&self) -> Option<&Path> {
        non_empty(self.workspace.as_deref())
    }

    /// The project path, ignoring empty values.
    pub fn project_path(&self) -> Option<&Path> {
        non_empty(self.project.as_deref())
    }

    /// True if neither a workspace nor a project was given.
    pub fn is_unset(&self) -> bool {
        self.workspace_path().is_none() && self.project_path().is_none()
    }

    /// Arguments selecting the project for an `xcodebuild` call.
    ///
    /// Tokens come out as `-workspace`, `-scheme`, `-project`,
    /// `-configuration`, each followed by its value and each only when set.
    pub fn project_path_args(&self) -> Vec<String> {
        let mut args = Vec::new();

        if let Some(workspace) = self.workspace_path() {
            args.push("-workspace".to_string());
            args.push(workspace.display().to_string());
        }
        if let Some(scheme) = self.scheme.as_deref().filter(|s| !s.is_empty()) {
            args.push("-scheme".to_string());
            args.push(scheme.to_string());
        }
        if let Some(project) = self.project_path() {
            args.push("-project".to_string());
            args.push(project.display().to_string());
        }
        if let Some(configuration) = self.configuration.as_deref().filter(|c| !c.is_empty()) {
            args.push("-configuration".to_string());
            args.push(configuration.to_string());
        }

        args
    }

    /// Arguments for `xcodebuild -list`, which must not name a scheme.
    pub fn listing_args(&self) -> Vec<String> {
        strip_scheme(self.project_path_args())
    }
}

fn non_empty(path: Option<&Path>) -> Option<&Path> {
    path.filter(|p| !p.as_os_str().is_empty())
}

/// Remove every `-scheme <name>` pair from an argument array.
pub fn strip_scheme(args: Vec<String>) -> Vec<String> {
    let mut out = Vec::with_capacity(args.len());
    let mut iter = args.into_iter();

    while let Some(arg) = iter.next() {
        if arg == "-scheme" {
            iter.next();
            continue;
        }
        out.push(arg);
    }

    out
}
