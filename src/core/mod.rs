//! Core module: the grading engine and everything derived from it

pub mod achievements;
pub mod analytics;
pub mod error;
pub mod gpa;
pub mod grading;
pub mod issues;
pub mod models;
pub mod report;
pub mod simulation;

pub use error::GradeError;

/// Returns the current version of the `gpa-analytics` crate
#[must_use]
pub const fn get_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
