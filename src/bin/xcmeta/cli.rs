//! CLI definitions using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;

use xcmeta::ProjectOptions;

/// xcmeta - Read schemes, configurations and build settings from Xcode projects
#[derive(Parser)]
#[command(name = "xcmeta")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Don't log the xcodebuild commands being run
    #[arg(long, global = true)]
    pub silent: bool,

    #[command(flatten)]
    pub project: ProjectArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Which workspace or project to inspect.
///
/// When neither --workspace nor --project is given, the single
/// .xcworkspace or .xcodeproj in the current directory is used.
#[derive(Args, Debug, Clone, Default)]
pub struct ProjectArgs {
    /// Path to an .xcworkspace
    #[arg(short, long, global = true)]
    pub workspace: Option<PathBuf>,

    /// Path to an .xcodeproj
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Scheme to read build settings for
    #[arg(short, long, global = true)]
    pub scheme: Option<String>,

    /// Build configuration to read build settings for
    #[arg(short, long, global = true)]
    pub configuration: Option<String>,
}

impl From<ProjectArgs> for ProjectOptions {
    fn from(args: ProjectArgs) -> Self {
        ProjectOptions {
            workspace: args.workspace,
            project: args.project,
            scheme: args.scheme,
            configuration: args.configuration,
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// List schemes
    Schemes,

    /// List build configurations
    Configurations,

    /// List targets (projects only)
    Targets,

    /// Print the app name (WRAPPER_NAME without its suffix)
    AppName,

    /// Print the platform: macos or ios
    Platform,

    /// Print a single build setting
    Setting(SettingArgs),

    /// Print all build settings
    Settings(SettingsArgs),

    /// Summarize the project
    Info(InfoArgs),

    /// Check that the Xcode command line tools are usable
    Doctor,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Args)]
pub struct SettingArgs {
    /// Build setting name, e.g. PRODUCT_BUNDLE_IDENTIFIER
    pub key: String,

    /// Log an error if the setting is missing
    #[arg(long)]
    pub required: bool,
}

#[derive(Args)]
pub struct SettingsArgs {
    /// Print the report exactly as xcodebuild printed it
    #[arg(long)]
    pub raw: bool,
}

#[derive(Args)]
pub struct InfoArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    pub shell: Shell,
}
