//! Report generation for a student's transcript
//!
//! A report gathers everything the engine derives from one snapshot of semester
//! records (per-semester GPA, CGPA, trend, category breakdown, achievements and
//! issues) and renders it as Markdown or JSON.

pub mod formats;

use crate::core::achievements::{derive_achievements, previous_cgpa, Achievement};
use crate::core::analytics::{category_performance, semester_trend, CategoryPerformance, TrendPoint};
use crate::core::error::Result;
use crate::core::gpa::{calculate_cgpa, calculate_gpa};
use crate::core::grading::GradingSystem;
use crate::core::issues::{detect_issues, CourseIssue};
use crate::core::models::{all_courses, Semester, SemesterRecord};
use crate::core::simulation::TargetCgpa;
use serde::Serialize;
use std::fs;
use std::path::Path;

pub use formats::{JsonReporter, MarkdownReporter, ReportFormat};

/// Data context for report generation
///
/// Borrowed views of one records snapshot and the scale it is read under.
#[derive(Debug, Clone)]
pub struct ReportContext<'a> {
    /// Raw records, used for issue detection
    pub records: &'a [SemesterRecord],
    /// Validated semesters built from `records`
    pub semesters: &'a [Semester],
    /// Grading system in effect
    pub system: &'a GradingSystem,
    /// Passing grade for issue detection
    pub passing_grade: &'a str,
    /// Target CGPA, if one is set
    pub target: Option<TargetCgpa>,
}

impl<'a> ReportContext<'a> {
    /// Create a new report context
    #[must_use]
    pub const fn new(
        records: &'a [SemesterRecord],
        semesters: &'a [Semester],
        system: &'a GradingSystem,
        passing_grade: &'a str,
        target: Option<TargetCgpa>,
    ) -> Self {
        Self {
            records,
            semesters,
            system,
            passing_grade,
            target,
        }
    }

    /// Compute every figure the report shows
    #[must_use]
    pub fn summary(&self) -> TranscriptSummary {
        let cgpa = calculate_cgpa(self.semesters, self.system);
        let previous = previous_cgpa(self.semesters, self.system);

        TranscriptSummary {
            grading_system: self.system.name.clone(),
            max_gpa: self.system.max_gpa,
            semesters: self
                .semesters
                .iter()
                .map(|s| SemesterSummary {
                    name: s.name.clone(),
                    courses: s.courses.len(),
                    credits: s.total_credits(),
                    gpa: calculate_gpa(&s.courses, self.system),
                })
                .collect(),
            cgpa,
            previous_cgpa: previous,
            target_cgpa: self.target.map(TargetCgpa::value),
            trend: semester_trend(self.semesters, self.system),
            categories: category_performance(all_courses(self.semesters), self.system),
            achievements: derive_achievements(cgpa, previous),
            issues: detect_issues(self.records, self.system, self.passing_grade),
        }
    }
}

/// One semester's line in the summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SemesterSummary {
    /// Semester name
    pub name: String,
    /// Number of graded courses
    pub courses: usize,
    /// Total credit units
    pub credits: u32,
    /// Semester GPA
    pub gpa: f64,
}

/// Everything derived from one snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TranscriptSummary {
    /// Name of the grading system used
    pub grading_system: String,
    /// Maximum GPA of that system
    pub max_gpa: f64,
    /// Per-semester figures
    pub semesters: Vec<SemesterSummary>,
    /// Cumulative GPA
    pub cgpa: f64,
    /// GPA of the penultimate semester
    pub previous_cgpa: Option<f64>,
    /// Target CGPA on the display scale
    pub target_cgpa: Option<f64>,
    /// GPA trend
    pub trend: Vec<TrendPoint>,
    /// Performance by course category
    pub categories: Vec<CategoryPerformance>,
    /// Derived achievements
    pub achievements: Vec<Achievement>,
    /// Flagged courses
    pub issues: Vec<CourseIssue>,
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Generate report content as a string
    ///
    /// # Errors
    /// Returns an error if rendering fails
    fn render(&self, ctx: &ReportContext) -> Result<String>;

    /// Generate a report to a file
    ///
    /// # Errors
    /// Returns an error if rendering or writing the file fails
    fn generate(&self, ctx: &ReportContext, output_path: &Path) -> Result<()> {
        let content = self.render(ctx)?;
        fs::write(output_path, content)?;
        Ok(())
    }
}

/// Render `ctx` in the requested format
///
/// # Errors
/// Returns an error if rendering fails
pub fn render(format: ReportFormat, ctx: &ReportContext) -> Result<String> {
    match format {
        ReportFormat::Markdown => MarkdownReporter::new().render(ctx),
        ReportFormat::Json => JsonReporter::new().render(ctx),
    }
}
