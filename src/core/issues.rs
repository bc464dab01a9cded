//! Academic issue detection
//!
//! Flags courses a student should discuss with an advisor. Detection runs on the raw
//! semester records so that courses without a usable grade are reported too.

use crate::core::grading::{GradeSymbol, GradingSystem};
use crate::core::models::SemesterRecord;
use serde::Serialize;
use std::fmt;

/// Passing grade used when none is configured
pub const DEFAULT_PASSING_GRADE: &str = "D";

/// Why a course was flagged
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    /// No grade yet, or a grade the scale does not define
    Incomplete,
    /// Failed outright (zero grade points); the course must be retaken
    Carryover,
    /// Passed, but below the passing grade
    LowGrade,
}

impl fmt::Display for IssueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Incomplete => write!(f, "incomplete"),
            Self::Carryover => write!(f, "carryover"),
            Self::LowGrade => write!(f, "low grade"),
        }
    }
}

/// A flagged course
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseIssue {
    /// Course record identifier
    pub course_id: String,
    /// Course name
    pub course_name: String,
    /// Name of the semester the course belongs to
    pub semester: String,
    /// Grade as entered, or "N/A"
    pub grade: String,
    /// Classification
    pub kind: IssueKind,
}

/// Detect issues across all semesters, in semester then course order
///
/// A course is flagged when its grade is missing or unknown to `system`
/// ([`IssueKind::Incomplete`]), worth zero points ([`IssueKind::Carryover`]), or worth
/// fewer points than `passing_grade` ([`IssueKind::LowGrade`]). If `passing_grade`
/// itself is not defined by `system`, only the first two checks apply.
#[must_use]
pub fn detect_issues(
    records: &[SemesterRecord],
    system: &GradingSystem,
    passing_grade: &str,
) -> Vec<CourseIssue> {
    let passing_points = system.point_of(&GradeSymbol::new(passing_grade));
    let mut issues = Vec::new();

    for semester in records {
        for course in &semester.courses {
            let entered = course.entered_grade();
            let points = entered.and_then(|g| system.point_of(&GradeSymbol::new(g)));

            let kind = match points {
                None => Some(IssueKind::Incomplete),
                Some(p) if p <= 0.0 => Some(IssueKind::Carryover),
                Some(p) if passing_points.is_some_and(|pass| p < pass) => {
                    Some(IssueKind::LowGrade)
                }
                Some(_) => None,
            };

            if let Some(kind) = kind {
                issues.push(CourseIssue {
                    course_id: course.id.clone(),
                    course_name: course.name.clone(),
                    semester: semester.name.clone(),
                    grade: entered.unwrap_or("N/A").to_string(),
                    kind,
                });
            }
        }
    }

    issues
}
