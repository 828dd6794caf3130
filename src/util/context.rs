//! Global context for xcmeta operations.
//!
//! Provides centralized access to configuration, paths, and environment.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::config::{global_config_path, load_config, project_config_path, Config};
use crate::core::options::ProjectOptions;

const WORKSPACE_EXTENSION: &str = "xcworkspace";
const PROJECT_EXTENSION: &str = "xcodeproj";

/// Global context containing configuration and paths.
#[derive(Debug, Clone)]
pub struct GlobalContext {
    /// Current working directory
    cwd: PathBuf,

    /// Merged configuration
    config: Config,

    /// Whether to use verbose output
    verbose: bool,
}

impl GlobalContext {
    /// Create a GlobalContext for the process working directory, loading
    /// global and project configuration.
    pub fn new() -> Result<Self> {
        let cwd = std::env::current_dir().context("failed to get current directory")?;
        Ok(Self::with_cwd(cwd))
    }

    /// Create a GlobalContext with a specific working directory.
    pub fn with_cwd(cwd: PathBuf) -> Self {
        let global = global_config_path();
        let config = load_config(global.as_deref(), &project_config_path(&cwd));

        GlobalContext {
            cwd,
            config,
            verbose: false,
        }
    }

    /// Replace the loaded configuration.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set verbose mode.
    pub fn set_verbose(&mut self, verbose: bool) {
        self.verbose = verbose;
    }

    /// Force silent mode on, regardless of configuration.
    pub fn set_silent(&mut self) {
        self.config.output.silent = true;
    }

    /// Get the current working directory.
    pub fn cwd(&self) -> &Path {
        &self.cwd
    }

    /// Get the merged configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Check if verbose mode is enabled.
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }

    /// Fill in a workspace or project when `options` names neither.
    ///
    /// Looks in the working directory for exactly one `.xcworkspace`, then
    /// exactly one `.xcodeproj`. Relative paths are left for
    /// [`Project`](crate::core::project::Project) to resolve.
    pub fn discover_options(&self, options: ProjectOptions) -> Result<ProjectOptions> {
        if !options.is_unset() {
            return Ok(options);
        }

        let workspaces = self.find_bundles(WORKSPACE_EXTENSION)?;
        let projects = self.find_bundles(PROJECT_EXTENSION)?;

        match (workspaces.as_slice(), projects.as_slice()) {
            ([workspace], _) => {
                tracing::debug!("using workspace {}", workspace.display());
                Ok(ProjectOptions {
                    workspace: Some(workspace.clone()),
                    ..options
                })
            }
            ([], [project]) => {
                tracing::debug!("using project {}", project.display());
                Ok(ProjectOptions {
                    project: Some(project.clone()),
                    ..options
                })
            }
            ([], []) => bail!(
                "no .xcworkspace or .xcodeproj found in {}\n\
                 help: Pass --workspace or --project",
                self.cwd.display()
            ),
            _ => bail!(
                "found several workspaces or projects in {}\n\
                 help: Pass --workspace or --project to pick one",
                self.cwd.display()
            ),
        }
    }

    /// Directories in cwd with the given extension, sorted by name.
    fn find_bundles(&self, extension: &str) -> Result<Vec<PathBuf>> {
        let mut found = Vec::new();

        for entry in std::fs::read_dir(&self.cwd)
            .with_context(|| format!("failed to read directory: {}", self.cwd.display()))?
        {
            let path = entry?.path();
            if path.is_dir() && path.extension().is_some_and(|ext| ext == extension) {
                found.push(path);
            }
        }

        found.sort();
        Ok(found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn context(tmp: &TempDir) -> GlobalContext {
        GlobalContext::with_cwd(tmp.path().to_path_buf()).with_config(Config::default())
    }

    #[test]
    fn test_context_paths() {
        let ctx = GlobalContext::new().unwrap();
        assert!(ctx.cwd().is_absolute());
        assert!(!ctx.is_verbose());
    }

    #[test]
    fn test_project_config_is_loaded() {
        let tmp = TempDir::new().unwrap();
        let path = project_config_path(tmp.path());
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "[xcodebuild]\nuse_xcrun = false\n").unwrap();

        let ctx = GlobalContext::with_cwd(tmp.path().to_path_buf());
        assert!(!ctx.config().xcodebuild.use_xcrun);
    }

    #[test]
    fn test_set_silent() {
        let tmp = TempDir::new().unwrap();
        let mut ctx = context(&tmp);
        ctx.set_silent();
        assert!(ctx.config().output.silent);
    }

    #[test]
    fn test_explicit_options_are_kept() {
        let tmp = TempDir::new().unwrap();
        let ctx = context(&tmp);

        let options = ProjectOptions::project("Elsewhere.xcodeproj");
        assert_eq!(ctx.discover_options(options.clone()).unwrap(), options);
    }

    #[test]
    fn test_discover_prefers_workspace() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("Example.xcworkspace")).unwrap();
        std::fs::create_dir(tmp.path().join("Example.xcodeproj")).unwrap();

        let options = context(&tmp)
            .discover_options(ProjectOptions::default().with_scheme("Example"))
            .unwrap();

        assert_eq!(options.workspace, Some(tmp.path().join("Example.xcworkspace")));
        assert_eq!(options.project, None);
        assert_eq!(options.scheme.as_deref(), Some("Example"));
    }

    #[test]
    fn test_discover_single_project() {
        let tmp = TempDir::new().unwrap();
        std::fs::create_dir(tmp.path().join("Example.xcodeproj")).unwrap();
        // A file with the right extension isn't a bundle
        std::fs::write(tmp.path().join("Stray.xcworkspace"), "").unwrap();

        let options = context(&tmp).discover_options(ProjectOptions::default()).unwrap();
        assert_eq!(options.project, Some(tmp.path().join("Example.xcodeproj")));
    }

    #[test]
    fn test_discover_nothing_or_ambiguous() {
        let tmp = TempDir::new().unwrap();
        let err = context(&tmp).discover_options(ProjectOptions::default()).unwrap_err();
        assert!(err.to_string().contains("no .xcworkspace or .xcodeproj"));

        std::fs::create_dir(tmp.path().join("A.xcodeproj")).unwrap();
        std::fs::create_dir(tmp.path().join("B.xcodeproj")).unwrap();
        let err = context(&tmp).discover_options(ProjectOptions::default()).unwrap_err();
        assert!(err.to_string().contains("several"));
    }
}
