//! Environment health checks.
//!
//! The `doctor` command verifies that the Xcode command line tools xcmeta
//! shells out to are present and answer.
//!
//! ## Checks Performed
//!
//! - `xcrun` on PATH (required unless `use_xcrun = false`)
//! - `xcodebuild -version` runs and reports a version
//! - Configured `developer_dir` exists (optional)
//! - Active developer directory from `xcode-select -p` (optional)

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use crate::core::xcodebuild::Xcodebuild;
use crate::util::config::Config;
use crate::util::process::{capture_stdout, find_executable, CommandRunner, ProcessBuilder};

/// Result of a single health check.
#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Name of the check
    pub name: String,

    /// Whether the check passed
    pub passed: bool,

    /// Human-readable status message
    pub message: String,

    /// Path to the tool (if applicable)
    pub path: Option<PathBuf>,

    /// Version string (if applicable)
    pub version: Option<String>,

    /// How long the check took
    pub duration: Duration,

    /// Whether this check is required or optional
    pub required: bool,
}

impl CheckResult {
    /// Create a passing check result.
    pub fn pass(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            name: name.into(),
            passed: true,
            message: message.into(),
            path: None,
            version: None,
            duration: Duration::ZERO,
            required: true,
        }
    }

    /// Create a failing check result.
    pub fn fail(name: impl Into<String>, message: impl Into<String>) -> Self {
        CheckResult {
            passed: false,
            ..CheckResult::pass(name, message)
        }
    }

    /// Mark this check as optional.
    pub fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Set the tool path.
    pub fn with_path(mut self, path: PathBuf) -> Self {
        self.path = Some(path);
        self
    }

    /// Set the version.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the duration.
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }
}

/// Summary of all health checks.
#[derive(Debug, Clone, Default)]
pub struct DoctorReport {
    /// Individual check results
    pub checks: Vec<CheckResult>,

    /// Total time taken
    pub total_duration: Duration,

    /// Environment information
    pub environment: BTreeMap<String, String>,
}

impl DoctorReport {
    /// Create a new empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a check result.
    pub fn add(&mut self, check: CheckResult) {
        self.checks.push(check);
    }

    /// Check if all required checks passed.
    pub fn all_required_passed(&self) -> bool {
        self.checks.iter().filter(|c| c.required).all(|c| c.passed)
    }

    /// Get the count of passed checks.
    pub fn passed_count(&self) -> usize {
        self.checks.iter().filter(|c| c.passed).count()
    }

    /// Get the count of failed checks.
    pub fn failed_count(&self) -> usize {
        self.checks.iter().filter(|c| !c.passed).count()
    }
}

/// Run all checks against the real environment.
pub fn doctor(config: &Config, runner: &dyn CommandRunner) -> DoctorReport {
    let start = Instant::now();
    let mut report = DoctorReport::new();

    report
        .environment
        .insert("os".to_string(), std::env::consts::OS.to_string());
    report
        .environment
        .insert("arch".to_string(), std::env::consts::ARCH.to_string());

    if config.xcodebuild.use_xcrun {
        report.add(check_tool("xcrun", true));
    }
    report.add(check_xcodebuild(config, runner));

    if let Some(ref dir) = config.xcodebuild.developer_dir {
        report.add(check_developer_dir(dir));
    }
    report.add(check_xcode_select(runner));

    report.total_duration = start.elapsed();
    report
}

fn check_tool(name: &str, required: bool) -> CheckResult {
    let start = Instant::now();

    let result = match find_executable(name) {
        Some(path) => CheckResult::pass(name, format!("Found {}", name)).with_path(path),
        None => CheckResult::fail(name, format!("{} not found on PATH", name)),
    };

    let result = result.with_duration(start.elapsed());
    if required {
        result
    } else {
        result.optional()
    }
}

fn check_xcodebuild(config: &Config, runner: &dyn CommandRunner) -> CheckResult {
    let start = Instant::now();
    let cmd = Xcodebuild::from_config(config).command("-version", Vec::<String>::new());

    let result = match capture_stdout(runner, &cmd) {
        Ok(text) => match parse_xcode_version(&text) {
            Some(version) => CheckResult::pass("xcodebuild", "xcodebuild is available")
                .with_version(version),
            None => CheckResult::fail(
                "xcodebuild",
                format!("`{}` printed no version", cmd.display_command()),
            ),
        },
        Err(e) => CheckResult::fail("xcodebuild", format!("{:#}", e)),
    };

    let result = match find_executable("xcodebuild") {
        Some(path) => result.with_path(path),
        None => result,
    };

    result.with_duration(start.elapsed())
}

fn check_developer_dir(dir: &std::path::Path) -> CheckResult {
    let start = Instant::now();

    let result = if dir.is_dir() {
        CheckResult::pass("Developer dir", "Configured developer_dir exists")
    } else {
        CheckResult::fail(
            "Developer dir",
            format!("Configured developer_dir does not exist: {}", dir.display()),
        )
    };

    result
        .with_path(dir.to_path_buf())
        .with_duration(start.elapsed())
        .optional()
}

fn check_xcode_select(runner: &dyn CommandRunner) -> CheckResult {
    let start = Instant::now();
    let cmd = ProcessBuilder::new("xcode-select").arg("-p");

    let result = match capture_stdout(runner, &cmd) {
        Ok(text) if !text.trim().is_empty() => {
            CheckResult::pass("Active developer dir", "xcode-select reports a developer dir")
                .with_path(PathBuf::from(text.trim()))
        }
        Ok(_) => CheckResult::fail("Active developer dir", "xcode-select printed nothing"),
        Err(e) => CheckResult::fail("Active developer dir", format!("{:#}", e)),
    };

    result.with_duration(start.elapsed()).optional()
}

/// Turn `xcodebuild -version` output into e.g. `Xcode 15.4 (15F31d)`.
fn parse_xcode_version(text: &str) -> Option<String> {
    let mut version = None;
    let mut build = None;

    for line in text.lines().map(str::trim) {
        if let Some(v) = line.strip_prefix("Xcode ") {
            version = Some(v.trim());
        } else if let Some(b) = line.strip_prefix("Build version ") {
            build = Some(b.trim());
        }
    }

    match (version?, build) {
        (v, Some(b)) => Some(format!("Xcode {} ({})", v, b)),
        (v, None) => Some(format!("Xcode {}", v)),
    }
}

/// Format the doctor report for display.
pub fn format_report(report: &DoctorReport, verbose: bool) -> String {
    use std::fmt::Write;

    let mut output = String::new();

    let _ = writeln!(output, "xcmeta doctor");
    let _ = writeln!(output, "=============\n");

    if verbose {
        let unknown = "unknown".to_string();
        let _ = writeln!(output, "Environment:");
        let _ = writeln!(
            output,
            "  OS: {} ({})",
            report.environment.get("os").unwrap_or(&unknown),
            report.environment.get("arch").unwrap_or(&unknown)
        );
        let _ = writeln!(output);
    }

    let _ = writeln!(output, "Checks:");
    for check in &report.checks {
        let status = if check.passed { "[OK]" } else { "[!!]" };
        let required = if check.required { "" } else { " (optional)" };

        let _ = writeln!(output, "  {} {}{}", status, check.name, required);

        if let Some(version) = &check.version {
            let _ = writeln!(output, "      {}", version);
        }
        if verbose || !check.passed {
            let _ = writeln!(output, "      {}", check.message);
        }
        if verbose {
            if let Some(path) = &check.path {
                let _ = writeln!(output, "      Path: {}", path.display());
            }
        }
    }

    let _ = writeln!(
        output,
        "\n{} passed, {} failed ({:.2}s)",
        report.passed_count(),
        report.failed_count(),
        report.total_duration.as_secs_f64()
    );

    output
}
