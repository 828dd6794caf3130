//! xcmeta - read metadata from Xcode projects and workspaces
//!
//! This crate wraps `xcodebuild -list` and `xcodebuild -showBuildSettings`
//! and turns their text reports into schemes, build configurations, the
//! app name and the target platform.

pub mod core;
pub mod ops;
pub mod util;

/// Test utilities and mocks for xcmeta unit tests.
///
/// This module is only available when compiling with `--cfg test`. It
/// provides a recording mock for process execution and canned
/// `xcodebuild` output.
#[cfg(test)]
pub mod test_support;

pub use crate::core::{
    build_settings::BuildSettings,
    errors::ProjectError,
    options::ProjectOptions,
    project::{Platform, Project},
    xcodebuild::Xcodebuild,
};

pub use util::context::GlobalContext;
