//! Parsing of `xcodebuild -showBuildSettings` output.
//!
//! ```text
//! Build settings for action build and target Example:
//!     ACTION = build
//!     PLATFORM_NAME = iphoneos
//!     WRAPPER_NAME = Example.app
//! ```
//!
//! Keys are matched exactly. When several targets are printed the first
//! value seen for a key wins.

use std::collections::btree_map::{self, BTreeMap};

use serde::Serialize;

/// Key/value pairs printed by `xcodebuild -showBuildSettings`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BuildSettings {
    values: BTreeMap<String, String>,
}

impl BuildSettings {
    /// Parse the raw report. Lines that are not `KEY = value` are skipped.
    pub fn parse(raw: &str) -> Self {
        let mut values = BTreeMap::new();

        for line in raw.lines() {
            if let Some((key, value)) = parse_line(line) {
                values
                    .entry(key.to_string())
                    .or_insert_with(|| value.to_string());
            }
        }

        BuildSettings { values }
    }

    /// Value of `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Check whether `key` was printed.
    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// True if the report had no settings at all.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// All settings, sorted by key.
    pub fn iter(&self) -> btree_map::Iter<'_, String, String> {
        self.values.iter()
    }
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    let line = line.trim();
    let (key, value) = match line.split_once(" = ") {
        Some(pair) => pair,
        // `FOO = ` loses its trailing space to trim()
        None => (line.strip_suffix(" =")?, ""),
    };

    let key = key.trim();
    if key.is_empty() || key.contains(char::is_whitespace) {
        return None;
    }

    Some((key, value.trim()))
}
