//! How `xcodebuild` is launched.

use std::path::PathBuf;

use crate::util::config::{Config, DEVELOPER_DIR_ENV};
use crate::util::process::ProcessBuilder;

/// Launch settings for `xcodebuild`, resolved from [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xcodebuild {
    use_xcrun: bool,
    developer_dir: Option<PathBuf>,
    silent: bool,
}

impl Xcodebuild {
    /// Settings from the loaded configuration.
    pub fn from_config(config: &Config) -> Self {
        Xcodebuild {
            use_xcrun: config.xcodebuild.use_xcrun,
            developer_dir: config.xcodebuild.developer_dir.clone(),
            silent: config.output.silent,
        }
    }

    /// Build an `xcodebuild <action> <args...>` command.
    pub fn command<I, S>(&self, action: &str, args: I) -> ProcessBuilder
    where
        I: IntoIterator<Item = S>,
        S: AsRef<std::ffi::OsStr>,
    {
        let mut cmd = if self.use_xcrun {
            ProcessBuilder::new("xcrun").arg("xcodebuild")
        } else {
            ProcessBuilder::new("xcodebuild")
        };
        cmd = cmd.arg(action).args(args);

        if let Some(ref dir) = self.developer_dir {
            cmd = cmd.env(DEVELOPER_DIR_ENV, dir.to_string_lossy());
        }

        cmd
    }

    /// Log the command about to run, unless silenced.
    pub fn announce(&self, cmd: &ProcessBuilder) {
        if !self.silent {
            tracing::info!("{}", cmd.display_command());
        }
    }
}

impl Default for Xcodebuild {
    fn default() -> Self {
        Xcodebuild::from_config(&Config::default())
    }
}
