//! Semester records as exported by the hosted backend
//!
//! The backend returns the user's semesters oldest first, each embedding its
//! courses. Records are plain data: they are only checked when turned into
//! [`Semester`]s against a grading system.

use super::course::Course;
use super::semester::Semester;
use crate::core::error::Result;
use crate::core::grading::GradingSystem;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// A course row as stored by the backend
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Record identifier
    pub id: String,
    /// Course name
    pub name: String,
    /// Credit units (unchecked)
    pub credits: i64,
    /// Letter grade; missing or blank while the course is in progress
    #[serde(default)]
    pub grade: Option<String>,
}

impl CourseRecord {
    /// The grade, if one has been entered
    #[must_use]
    pub fn entered_grade(&self) -> Option<&str> {
        self.grade.as_deref().map(str::trim).filter(|g| !g.is_empty())
    }
}

/// A semester row with its embedded courses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemesterRecord {
    /// Record identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Courses in insertion order
    #[serde(default)]
    pub courses: Vec<CourseRecord>,
}

impl SemesterRecord {
    /// Build a validated semester under `system`
    ///
    /// In-progress courses (no grade yet) are left out; they count toward no
    /// aggregate until graded.
    ///
    /// # Errors
    /// Returns an error for credits outside `1..=6` or a grade the system does not
    /// define
    pub fn to_semester(&self, system: &GradingSystem) -> Result<Semester> {
        let mut semester = Semester::new(&self.id, &self.name);
        for record in &self.courses {
            let Some(grade) = record.entered_grade() else {
                debug!(
                    "Skipping in-progress course '{}' in {}",
                    record.name, self.name
                );
                continue;
            };
            semester.add_course(Course::new(
                &record.id,
                &record.name,
                record.credits,
                grade,
                system,
            )?);
        }
        Ok(semester)
    }
}

/// Parse semester records from a JSON string
///
/// # Errors
/// Returns an error if the JSON does not match the record shape
pub fn parse_records(json: &str) -> Result<Vec<SemesterRecord>> {
    Ok(serde_json::from_str(json)?)
}

/// Read semester records from a JSON export
///
/// # Errors
/// Returns an error if the file cannot be read or parsed
pub fn load_records<P: AsRef<Path>>(path: P) -> Result<Vec<SemesterRecord>> {
    let content = fs::read_to_string(path)?;
    parse_records(&content)
}

/// Validate every record under `system`
///
/// # Errors
/// Returns the first validation error encountered
pub fn build_semesters(records: &[SemesterRecord], system: &GradingSystem) -> Result<Vec<Semester>> {
    records.iter().map(|r| r.to_semester(system)).collect()
}
