//! Core types: the project descriptor and the parsers behind it.

pub mod build_settings;
pub mod errors;
pub mod listing;
pub mod options;
pub mod project;
pub mod xcodebuild;
