//! Parsing of `xcodebuild -list` output.
//!
//! The report is plain English text, indented by section:
//!
//! ```text
//! Information about project "Example":
//!     Targets:
//!         Example
//!         ExampleUITests
//!
//!     Build Configurations:
//!         Debug
//!         Release
//!
//!     If no build configuration is specified and -scheme is not passed then "Release" is used.
//!
//!     Schemes:
//!         Example
//!         ExampleUITests
//! ```
//!
//! Workspaces only list schemes. None of this is validated: if the format
//! changes, these functions quietly return fewer (or no) names.

/// Printed for a workspace without schemes.
pub const NO_SCHEMES_IN_WORKSPACE: &str = "There are no schemes in workspace";

/// Printed for a project without schemes.
pub const NO_SCHEMES_IN_PROJECT: &str = "This project contains no schemes";

const SCHEMES_MARKER: &str = "Schemes:";
const CONFIGURATIONS_MARKER: &str = "Configurations:";
const TARGETS_MARKER: &str = "Targets:";

/// Scheme names, in listing order.
pub fn parse_schemes(raw: &str) -> Vec<String> {
    if raw.contains(NO_SCHEMES_IN_WORKSPACE) || raw.contains(NO_SCHEMES_IN_PROJECT) {
        return Vec::new();
    }

    let Some((_, after)) = raw.rsplit_once(SCHEMES_MARKER) else {
        tracing::debug!("no `{}` section in xcodebuild listing", SCHEMES_MARKER);
        return Vec::new();
    };

    up_to_colon(after)
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build configuration names, in listing order.
///
/// Returns nothing unless "Configurations:" appears exactly once; CocoaPods
/// workspaces can repeat the section for every nested project.
pub fn parse_configurations(raw: &str) -> Vec<String> {
    parse_block(raw, CONFIGURATIONS_MARKER)
}

/// Target names, in listing order. Workspace listings have none.
pub fn parse_targets(raw: &str) -> Vec<String> {
    parse_block(raw, TARGETS_MARKER)
}

/// Names in a blank-line terminated section that must occur exactly once.
fn parse_block(raw: &str, marker: &str) -> Vec<String> {
    let mut parts = raw.split(marker);
    let (Some(_), Some(after), None) = (parts.next(), parts.next(), parts.next()) else {
        tracing::debug!(
            "expected exactly one `{}` section in xcodebuild listing",
            marker
        );
        return Vec::new();
    };

    let mut results = Vec::new();
    for line in up_to_colon(after).lines().map(str::trim) {
        if line.is_empty() {
            // Blank lines before the first entry are the tail of the
            // marker line; after an entry they end the section.
            if results.is_empty() {
                continue;
            }
            break;
        }
        results.push(line.to_string());
    }

    results
}

fn up_to_colon(text: &str) -> &str {
    text.split(':').next().unwrap_or_default()
}
