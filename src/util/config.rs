//! Configuration file support for xcmeta.
//!
//! xcmeta supports two configuration file locations:
//! - Global: `~/.xcmeta/config.toml` - User-wide defaults
//! - Project: `.xcmeta/config.toml` - Project-specific overrides
//!
//! Project config takes precedence over global config. Environment
//! variables (`XCMETA_SILENT`, `DEVELOPER_DIR`) override both.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

/// Environment variable that forces silent mode.
pub const SILENT_ENV: &str = "XCMETA_SILENT";

/// Environment variable consulted by `xcrun` to pick an Xcode installation.
pub const DEVELOPER_DIR_ENV: &str = "DEVELOPER_DIR";

/// xcmeta configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    /// Output settings
    pub output: OutputConfig,

    /// How `xcodebuild` is invoked
    pub xcodebuild: XcodebuildConfig,
}

/// Output-related configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutputConfig {
    /// Don't log the commands that are about to run
    pub silent: bool,
}

/// Settings for locating and running `xcodebuild`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XcodebuildConfig {
    /// Run `xcrun xcodebuild` instead of `xcodebuild` directly
    pub use_xcrun: bool,

    /// Xcode developer directory exported as `DEVELOPER_DIR`
    pub developer_dir: Option<PathBuf>,
}

impl Default for XcodebuildConfig {
    fn default() -> Self {
        XcodebuildConfig {
            use_xcrun: true,
            developer_dir: None,
        }
    }
}

/// Partial config as written in a file; unset keys don't override.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct ConfigFile {
    output: OutputFile,
    xcodebuild: XcodebuildFile,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct OutputFile {
    silent: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
struct XcodebuildFile {
    use_xcrun: Option<bool>,
    developer_dir: Option<PathBuf>,
}

impl Config {
    /// Merge the keys set in `path` on top of this config.
    fn merge_file(&mut self, path: &Path) -> Result<()> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {}", path.display()))?;

        let file: ConfigFile = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config: {}", path.display()))?;

        if let Some(silent) = file.output.silent {
            self.output.silent = silent;
        }
        if let Some(use_xcrun) = file.xcodebuild.use_xcrun {
            self.xcodebuild.use_xcrun = use_xcrun;
        }
        if file.xcodebuild.developer_dir.is_some() {
            self.xcodebuild.developer_dir = file.xcodebuild.developer_dir;
        }

        Ok(())
    }

    /// Merge a file if it exists, warning instead of failing on bad content.
    fn merge_file_or_warn(&mut self, path: &Path) {
        if !path.exists() {
            return;
        }

        if let Err(e) = self.merge_file(path) {
            tracing::warn!("Failed to load config from {}: {:#}", path.display(), e);
        }
    }

    /// Apply environment overrides.
    pub fn apply_env(&mut self) {
        self.apply_env_from(|key| std::env::var(key).ok());
    }

    fn apply_env_from(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(value) = lookup(SILENT_ENV) {
            self.output.silent = parse_bool_flag(&value);
        }
        if let Some(dir) = lookup(DEVELOPER_DIR_ENV).filter(|d| !d.is_empty()) {
            self.xcodebuild.developer_dir = Some(PathBuf::from(dir));
        }
    }
}

fn parse_bool_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Load merged configuration from global and project locations.
///
/// Order of precedence (highest to lowest):
/// 1. Environment variables
/// 2. Project config (.xcmeta/config.toml)
/// 3. Global config (~/.xcmeta/config.toml)
/// 4. Defaults
pub fn load_config(global_path: Option<&Path>, project_path: &Path) -> Config {
    let mut config = Config::default();

    if let Some(global) = global_path {
        config.merge_file_or_warn(global);
    }

    config.merge_file_or_warn(project_path);
    config.apply_env();

    config
}

/// Get the global xcmeta config directory (~/.xcmeta).
pub fn global_config_dir() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|b| b.home_dir().join(".xcmeta"))
}

/// Get the global config path (~/.xcmeta/config.toml).
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("config.toml"))
}

/// Get the project config path (.xcmeta/config.toml).
pub fn project_config_path(project_root: &Path) -> PathBuf {
    project_root.join(".xcmeta").join("config.toml")
}
