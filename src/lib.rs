//! Shared library for `gpa-analytics`
//! Contains the grading engine used by the CLI, plus configuration and logging setup.

pub mod config;
pub mod core;
pub mod logging;

pub use crate::core::get_version;
