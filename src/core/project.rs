//! The Xcode project or workspace being inspected.
//!
//! A [`Project`] runs `xcodebuild -list` and `xcodebuild -showBuildSettings`
//! at most once each, on first use, and answers every later question from
//! the cached outcome. A failed run is cached too: the same error comes back
//! without running the tool again. The project on disk is assumed not to
//! change while a `Project` is alive.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use anyhow::{Context, Result};
use serde::Serialize;

use super::build_settings::BuildSettings;
use super::errors::ProjectError;
use super::listing;
use super::options::ProjectOptions;
use super::xcodebuild::Xcodebuild;
use crate::util::config::Config;
use crate::util::process::{capture_stdout, CommandRunner, ProcessBuilder, SystemRunner};

/// Returned by [`Project::app_name`] when `WRAPPER_NAME` is not set.
pub const DEFAULT_APP_NAME: &str = "App";

/// Platform a project builds for.
///
/// Anything that isn't macOS counts as iOS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    MacOs,
    Ios,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Platform::MacOs => write!(f, "macos"),
            Platform::Ios => write!(f, "ios"),
        }
    }
}

struct SettingsCache {
    raw: String,
    parsed: BuildSettings,
}

/// An Xcode project or workspace on disk.
pub struct Project {
    path: PathBuf,
    is_workspace: bool,
    options: ProjectOptions,
    xcodebuild: Xcodebuild,
    runner: Arc<dyn CommandRunner>,
    raw_listing: OnceLock<Result<String, ProjectError>>,
    build_settings: OnceLock<Result<SettingsCache, ProjectError>>,
}

impl Project {
    /// Open the workspace or project named in `options`, running real
    /// `xcodebuild` processes.
    ///
    /// # Errors
    ///
    /// Fails with [`ProjectError::Configuration`] if the path is empty or
    /// is not a directory. A leading `~` is expanded to the home directory.
    pub fn new(options: ProjectOptions, config: &Config) -> Result<Self> {
        Self::with_runner(options, Xcodebuild::from_config(config), Arc::new(SystemRunner))
    }

    /// Open a project, running commands through `runner`.
    ///
    /// When both a workspace and a project are given, the workspace is used
    /// and the project is dropped from every command line.
    pub fn with_runner(
        options: ProjectOptions,
        xcodebuild: Xcodebuild,
        runner: Arc<dyn CommandRunner>,
    ) -> Result<Self> {
        let is_workspace = options.workspace_path().is_some();
        let selected = options
            .workspace_path()
            .or_else(|| options.project_path())
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let path = resolve_project_path(&selected)?;

        let mut options = options;
        // xcodebuild refuses -workspace and -project together
        if is_workspace {
            options.workspace = Some(path.clone());
            options.project = None;
        } else {
            options.project = Some(path.clone());
            options.workspace = None;
        }

        tracing::debug!(
            "opened {} at {}",
            if is_workspace { "workspace" } else { "project" },
            path.display()
        );

        Ok(Project {
            path,
            is_workspace,
            options,
            xcodebuild,
            runner,
            raw_listing: OnceLock::new(),
            build_settings: OnceLock::new(),
        })
    }

    /// Absolute path to the `.xcworkspace` or `.xcodeproj`.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// True if a workspace (rather than a project) was selected.
    pub fn is_workspace(&self) -> bool {
        self.is_workspace
    }

    /// Options with the selected path made absolute.
    pub fn options(&self) -> &ProjectOptions {
        &self.options
    }

    /// All schemes, in the order `xcodebuild -list` prints them.
    pub fn schemes(&self) -> Result<Vec<String>> {
        Ok(listing::parse_schemes(self.raw_listing()?))
    }

    /// All build configurations, in listing order.
    ///
    /// Empty when the listing has no single "Configurations:" section,
    /// which is the case for CocoaPods workspaces.
    pub fn configurations(&self) -> Result<Vec<String>> {
        Ok(listing::parse_configurations(self.raw_listing()?))
    }

    /// All targets, in listing order. Workspaces don't list targets.
    pub fn targets(&self) -> Result<Vec<String>> {
        Ok(listing::parse_targets(self.raw_listing()?))
    }

    /// The product name without its wrapper extension, e.g. `Example` for
    /// `Example.app`.
    pub fn app_name(&self) -> Result<String> {
        let Some(name) = self.build_setting("WRAPPER_NAME", true)? else {
            return Ok(DEFAULT_APP_NAME.to_string());
        };

        match self.build_setting("WRAPPER_SUFFIX", true)? {
            Some(suffix) if !suffix.is_empty() => Ok(name.replace(suffix, "")),
            _ => Ok(name.to_string()),
        }
    }

    /// True if the project builds for macOS.
    pub fn is_mac(&self) -> Result<bool> {
        // Xcode versions disagree on which of these they fill in
        if self.build_setting("PLATFORM_NAME", true)? == Some("macosx") {
            return Ok(true);
        }
        Ok(self.build_setting("PLATFORM_DISPLAY_NAME", true)? == Some("OS X"))
    }

    /// True if the project doesn't build for macOS.
    pub fn is_ios(&self) -> Result<bool> {
        Ok(!self.is_mac()?)
    }

    /// The platform, as a value.
    pub fn platform(&self) -> Result<Platform> {
        if self.is_mac()? {
            Ok(Platform::MacOs)
        } else {
            Ok(Platform::Ios)
        }
    }

    /// Look up a single build setting.
    ///
    /// A missing key is never an error. If `optional` is false it is logged
    /// at error level, and `None` is still returned. Errors only come from
    /// failing to run `xcodebuild`.
    pub fn build_setting(&self, key: &str, optional: bool) -> Result<Option<&str>> {
        let value = self.build_settings()?.get(key);

        if value.is_none() && !optional {
            tracing::error!(
                "{}",
                ProjectError::KeyLookup {
                    key: key.to_string()
                }
            );
        }

        Ok(value)
    }

    /// Every build setting for the selected scheme.
    pub fn build_settings(&self) -> Result<&BuildSettings> {
        Ok(&self.settings_cache()?.parsed)
    }

    /// Output of `xcodebuild -showBuildSettings`, as printed.
    pub fn raw_build_settings(&self) -> Result<&str> {
        Ok(&self.settings_cache()?.raw)
    }

    /// Output of `xcodebuild -list`, as printed.
    ///
    /// # Errors
    ///
    /// Fails with [`ProjectError::ToolInvocation`] if the command printed
    /// nothing, or [`ProjectError::Process`] if it could not run. Either
    /// error is kept and returned again by later calls.
    pub fn raw_listing(&self) -> Result<&str> {
        let listing = self.raw_listing.get_or_init(|| {
            // CocoaPods workspaces list every pod's scheme too; that's expected.
            let cmd = self.xcodebuild.command("-list", self.options.listing_args());
            let raw = self.capture(&cmd)?;

            if raw.trim().is_empty() {
                return Err(ProjectError::ToolInvocation {
                    command: cmd.display_command(),
                });
            }
            Ok(raw)
        });

        match listing {
            Ok(raw) => Ok(raw),
            Err(e) => Err(e.clone().into()),
        }
    }

    fn settings_cache(&self) -> Result<&SettingsCache> {
        let cache = self.build_settings.get_or_init(|| {
            let cmd = self
                .xcodebuild
                .command("-showBuildSettings", self.options.project_path_args());
            let raw = self.capture(&cmd)?;
            let parsed = BuildSettings::parse(&raw);

            Ok(SettingsCache { raw, parsed })
        });

        match cache {
            Ok(cache) => Ok(cache),
            Err(e) => Err(e.clone().into()),
        }
    }

    fn capture(&self, cmd: &ProcessBuilder) -> Result<String, ProjectError> {
        self.xcodebuild.announce(cmd);
        capture_stdout(self.runner.as_ref(), cmd).map_err(|e| ProjectError::Process {
            command: cmd.display_command(),
            message: format!("{:#}", e),
        })
    }
}

impl fmt::Debug for Project {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Project")
            .field("path", &self.path)
            .field("is_workspace", &self.is_workspace)
            .field("options", &self.options)
            .field("xcodebuild", &self.xcodebuild)
            .field("listing_ran", &self.raw_listing.get().is_some())
            .field("build_settings_ran", &self.build_settings.get().is_some())
            .finish()
    }
}

/// Make `path` absolute and check that it is a directory.
fn resolve_project_path(path: &Path) -> Result<PathBuf> {
    if path.as_os_str().is_empty() {
        return Err(ProjectError::Configuration {
            path: path.to_path_buf(),
        }
        .into());
    }

    let base_dirs = directories::BaseDirs::new();
    let expanded = expand_home(path, base_dirs.as_ref().map(|b| b.home_dir()));

    let absolute = std::path::absolute(&expanded).with_context(|| {
        format!("failed to resolve project path: {}", path.display())
    })?;

    if !absolute.is_dir() {
        return Err(ProjectError::Configuration { path: absolute }.into());
    }

    Ok(absolute)
}

/// Replace a leading `~` component with `home`. `~user` is left alone.
fn expand_home(path: &Path, home: Option<&Path>) -> PathBuf {
    match (home, path.strip_prefix("~")) {
        (Some(home), Ok(rest)) if rest.as_os_str().is_empty() => home.to_path_buf(),
        (Some(home), Ok(rest)) => home.join(rest),
        _ => path.to_path_buf(),
    }
}
