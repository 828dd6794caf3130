//! Errors raised while inspecting an Xcode project.

use std::path::PathBuf;

use thiserror::Error;

/// Error while describing an Xcode project or workspace.
///
/// `Clone` so a [`Project`](super::project::Project) can keep a failed run
/// and hand the same error back on every later call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProjectError {
    /// The workspace/project path is empty or not a directory.
    #[error("could not find project at path '{}'", path.display())]
    Configuration { path: PathBuf },

    /// `xcodebuild` could not be started or waited on.
    #[error("failed to run `{command}`: {message}")]
    Process { command: String, message: String },

    /// `xcodebuild -list` printed nothing.
    #[error("error parsing project file using `{command}`")]
    ToolInvocation { command: String },

    /// A build setting was not present in `-showBuildSettings` output.
    ///
    /// Lookups never return this; it is only logged for required keys.
    #[error("could not fetch `{key}` from project file")]
    KeyLookup { key: String },
}

impl ProjectError {
    /// A hint for the user on how to fix this error, if there is one.
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            ProjectError::Configuration { .. } => {
                Some("help: Pass --workspace or --project with a path to an existing .xcworkspace or .xcodeproj")
            }
            ProjectError::Process { .. } | ProjectError::ToolInvocation { .. } => {
                Some("help: Run `xcmeta doctor` to check that Xcode command line tools are installed")
            }
            ProjectError::KeyLookup { .. } => None,
        }
    }
}
