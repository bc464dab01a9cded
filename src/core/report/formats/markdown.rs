//! Markdown report generator
//!
//! Generates transcript reports in Markdown with an embedded Mermaid chart of the
//! GPA trend. These reports render well in GitHub, GitLab, and VS Code.

use crate::core::analytics::chart_bounds;
use crate::core::error::Result;
use crate::core::report::{ReportContext, ReportGenerator, TranscriptSummary};
use std::fmt::Write;

/// Embedded Markdown report template
const MARKDOWN_TEMPLATE: &str = include_str!("../templates/report.md");

/// Markdown report generator
#[derive(Debug, Default)]
pub struct MarkdownReporter;

impl MarkdownReporter {
    /// Create a new Markdown reporter
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Render the report using template substitution
    fn render_template(summary: &TranscriptSummary) -> String {
        let mut output = MARKDOWN_TEMPLATE.to_string();

        output = output.replace("{{system_name}}", &summary.grading_system);
        output = output.replace("{{max_gpa}}", &format!("{:.1}", summary.max_gpa));
        output = output.replace("{{cgpa}}", &format!("{:.2}", summary.cgpa));
        output = output.replace(
            "{{target}}",
            &summary
                .target_cgpa
                .map_or_else(|| "not set".to_string(), |t| format!("{t:.2}")),
        );
        let credits: u32 = summary.semesters.iter().map(|s| s.credits).sum();
        output = output.replace("{{total_credits}}", &credits.to_string());

        output = output.replace("{{semester_table}}", &Self::semester_table(summary));
        output = output.replace("{{trend_table}}", &Self::trend_table(summary));
        output = output.replace("{{trend_chart}}", &Self::trend_chart(summary));
        output = output.replace("{{category_table}}", &Self::category_table(summary));
        output = output.replace("{{achievements}}", &Self::achievement_list(summary));
        output = output.replace("{{issues}}", &Self::issue_table(summary));

        output
    }

    fn semester_table(summary: &TranscriptSummary) -> String {
        if summary.semesters.is_empty() {
            return "_No semesters recorded._".to_string();
        }
        let mut table = String::from("| Semester | Courses | Credits | GPA |\n");
        table.push_str("|----------|---------|---------|-----|\n");
        for s in &summary.semesters {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {:.2} |",
                s.name, s.courses, s.credits, s.gpa
            );
        }
        table
    }

    fn trend_table(summary: &TranscriptSummary) -> String {
        if summary.trend.is_empty() {
            return "_No trend available._".to_string();
        }
        let mut table = String::from("| Semester | GPA | CGPA |\n");
        table.push_str("|----------|-----|------|\n");
        for point in &summary.trend {
            let _ = writeln!(
                table,
                "| {} | {:.2} | {:.2} |",
                point.semester, point.gpa, point.cgpa
            );
        }
        table
    }

    /// Mermaid line chart of semester GPAs, with the target as a flat second line
    fn trend_chart(summary: &TranscriptSummary) -> String {
        let bounds = chart_bounds(&summary.trend, summary.target_cgpa, summary.max_gpa);
        let Some((lo, hi)) = bounds else {
            return String::new();
        };

        let labels: Vec<String> = summary
            .trend
            .iter()
            .map(|p| format!("\"{}\"", p.semester.replace('"', "'")))
            .collect();
        let values: Vec<String> = summary.trend.iter().map(|p| format!("{:.2}", p.gpa)).collect();

        let mut chart = String::from("```mermaid\nxychart-beta\n");
        chart.push_str("    title \"GPA by semester\"\n");
        let _ = writeln!(chart, "    x-axis [{}]", labels.join(", "));
        let _ = writeln!(chart, "    y-axis \"GPA\" {lo:.1} --> {hi:.1}");
        let _ = writeln!(chart, "    line [{}]", values.join(", "));
        if let Some(target) = summary.target_cgpa {
            let flat = vec![format!("{target:.2}"); values.len()];
            let _ = writeln!(chart, "    line [{}]", flat.join(", "));
        }
        chart.push_str("```");
        chart
    }

    fn category_table(summary: &TranscriptSummary) -> String {
        if summary.categories.is_empty() {
            return "_No graded courses._".to_string();
        }
        let mut table = String::from("| Category | Courses | GPA |\n");
        table.push_str("|----------|---------|-----|\n");
        for c in &summary.categories {
            let _ = writeln!(table, "| {} | {} | {:.2} |", c.category, c.courses, c.gpa);
        }
        table
    }

    fn achievement_list(summary: &TranscriptSummary) -> String {
        let mut list = String::new();
        for a in &summary.achievements {
            let mark = if a.is_unlocked { "x" } else { " " };
            let _ = writeln!(
                list,
                "- [{mark}] **{}** ({:?}): {} ({:.0}%)",
                a.name, a.tier, a.description, a.progress
            );
        }
        list
    }

    fn issue_table(summary: &TranscriptSummary) -> String {
        if summary.issues.is_empty() {
            return "_No issues detected._".to_string();
        }
        let mut table = String::from("| Semester | Course | Grade | Issue |\n");
        table.push_str("|----------|--------|-------|-------|\n");
        for issue in &summary.issues {
            let _ = writeln!(
                table,
                "| {} | {} | {} | {} |",
                issue.semester, issue.course_name, issue.grade, issue.kind
            );
        }
        table
    }
}

impl ReportGenerator for MarkdownReporter {
    fn render(&self, ctx: &ReportContext) -> Result<String> {
        Ok(Self::render_template(&ctx.summary()))
    }
}
