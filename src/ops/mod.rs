//! High-level operations.
//!
//! This module contains the implementation of xcmeta commands that go
//! beyond a single accessor.

pub mod describe;
pub mod doctor;

pub use describe::{describe, format_summary, ProjectSummary};
pub use doctor::{doctor, format_report, CheckResult, DoctorReport};
