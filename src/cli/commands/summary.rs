//! Summary command handler
//!
//! Prints per-semester GPA, the CGPA, achievements and flagged courses.

use super::{load_scale, load_transcript, report_error, Outcome};
use gpa_analytics::config::Config;
use gpa_analytics::core::report::ReportContext;
use std::path::Path;
use tracing::info;

/// Run the summary command
pub fn run(records_file: &Path, config: &Config, verbose: bool) -> Outcome {
    let manager = load_scale(config);
    let system = manager.active();

    let transcript = load_transcript(records_file, &system).map_err(|e| {
        report_error(
            &format!("Failed to load records from {}", records_file.display()),
            &e,
        )
    })?;

    let target = config.target().ok();
    let ctx = ReportContext::new(
        &transcript.records,
        &transcript.semesters,
        &system,
        config.passing_grade(),
        target,
    );
    let summary = ctx.summary();
    info!(
        "Summarized {} semester(s), CGPA {:.2}",
        summary.semesters.len(),
        summary.cgpa
    );

    println!("\n=== {} ===\n", system.name);
    for semester in &summary.semesters {
        println!(
            "  {:<24} {:>2} course(s) {:>3} credit(s)  GPA {:.2}",
            semester.name, semester.courses, semester.credits, semester.gpa
        );
    }
    println!("\n  CGPA: {:.2} / {:.1}", summary.cgpa, summary.max_gpa);

    if verbose {
        if let Some(previous) = summary.previous_cgpa {
            println!("  Previous semester GPA: {previous:.2}");
        }
        println!("\n  By category:");
        for category in &summary.categories {
            println!(
                "    {:<8} {:>2} course(s)  GPA {:.2}",
                category.category, category.courses, category.gpa
            );
        }
    }

    let unlocked: Vec<&str> = summary
        .achievements
        .iter()
        .filter(|a| a.is_unlocked)
        .map(|a| a.name)
        .collect();
    if !unlocked.is_empty() {
        println!("\n✓ Achievements: {}", unlocked.join(", "));
    }

    if summary.issues.is_empty() {
        println!("\n✓ No academic issues");
    } else {
        println!("\n✗ {} course(s) need attention:", summary.issues.len());
        for issue in &summary.issues {
            println!(
                "    [{}] {} ({}): {}",
                issue.semester, issue.course_name, issue.grade, issue.kind
            );
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::Failed;

    #[test]
    fn test_missing_records_file_fails() {
        let config = Config::from_defaults();
        assert_eq!(
            run(Path::new("no/such/records.json"), &config, false),
            Err(Failed)
        );
    }

    #[test]
    fn test_sample_records_succeed() {
        let config = Config::from_defaults();
        let records = Path::new(env!("CARGO_MANIFEST_DIR")).join("samples/records/transcript.json");
        assert_eq!(run(&records, &config, true), Ok(()));
    }
}
