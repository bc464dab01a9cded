//! CLI command handlers for `gpa`.
//!
//! Each command is implemented in its own submodule; shared loading helpers live
//! here.

pub mod config;
pub mod convert;
pub mod report;
pub mod scale;
pub mod simulate;
pub mod summary;

use gpa_analytics::config::Config;
use gpa_analytics::core::grading::{GradingSystem, ScaleManager};
use gpa_analytics::core::models::{build_semesters, load_records, Semester, SemesterRecord};
use gpa_analytics::core::GradeError;
use std::path::Path;
use tracing::{debug, error};

/// Scale manager holding the configured grading system
///
/// A configured scale file that fails to load or validate is reported and the
/// built-in five-point scale stays active.
pub fn load_scale(config: &Config) -> ScaleManager {
    let manager = ScaleManager::new();
    let scale_file = config.grading.scale_file.trim();
    if scale_file.is_empty() {
        return manager;
    }

    match manager.activate_file(scale_file) {
        Ok(()) => debug!("Using grading system from {scale_file}"),
        Err(e) => {
            let _ = report_error(&format!("Could not use grading system {scale_file}"), &e);
            eprintln!("  Falling back to the default five-point scale");
        }
    }
    manager
}

/// Records and the validated semesters built from them
pub struct Transcript {
    /// Records as read from disk
    pub records: Vec<SemesterRecord>,
    /// Graded courses per semester
    pub semesters: Vec<Semester>,
}

/// Read a records file and validate it under `system`
///
/// # Errors
/// Returns an error if the file cannot be read or a graded course is invalid
pub fn load_transcript(path: &Path, system: &GradingSystem) -> Result<Transcript, GradeError> {
    let records = load_records(path)?;
    let semesters = build_semesters(&records, system)?;
    debug!(
        "Loaded {} semester(s) from {}",
        semesters.len(),
        path.display()
    );
    Ok(Transcript { records, semesters })
}

/// Marker for a command that failed after telling the user why
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Failed;

/// Result of running a command; `main` maps `Err` to exit status 1
pub type Outcome = Result<(), Failed>;

/// Log an error and print it for the user
pub fn report_error(context: &str, err: &GradeError) -> Failed {
    error!("{context}: {err}");
    eprintln!("✗ {context}: {err}");
    Failed
}
