//! Simulate command handler
//!
//! Projects the CGPA with hypothetical courses given as `NAME:CREDITS:GRADE`.

use super::{load_scale, load_transcript, report_error, Outcome};
use gpa_analytics::config::Config;
use gpa_analytics::core::grading::GradingSystem;
use gpa_analytics::core::models::Course;
use gpa_analytics::core::simulation::{simulate, simulate_rescaled, TargetCgpa};
use gpa_analytics::core::GradeError;
use std::path::Path;

/// Parse a hypothetical course argument
///
/// Splits from the right, so course names may themselves contain `:`.
///
/// # Errors
/// Returns an error for malformed input, credits outside the accepted range, or a
/// grade the system does not define
pub fn parse_course(arg: &str, index: usize, system: &GradingSystem) -> Result<Course, GradeError> {
    let mut parts = arg.rsplitn(3, ':');
    let (Some(grade), Some(credits), Some(name)) = (parts.next(), parts.next(), parts.next())
    else {
        return Err(GradeError::Parse(format!(
            "Expected NAME:CREDITS:GRADE, got '{arg}'"
        )));
    };
    let credits = credits
        .trim()
        .parse::<i64>()
        .map_err(|_| GradeError::Parse(format!("Invalid credits in '{arg}'")))?;

    Course::new(
        &format!("sim-{}", index + 1),
        name.trim(),
        credits,
        grade.trim(),
        system,
    )
}

/// Run the simulate command
pub fn run(
    records_file: &Path,
    target: Option<f64>,
    course_args: &[String],
    rescale_target: bool,
    config: &Config,
) -> Outcome {
    let manager = load_scale(config);
    let system = manager.active();

    let target = target
        .map_or_else(|| config.target(), TargetCgpa::new)
        .map_err(|e| report_error("Invalid target CGPA", &e))?;

    let transcript = load_transcript(records_file, &system).map_err(|e| {
        report_error(
            &format!("Failed to load records from {}", records_file.display()),
            &e,
        )
    })?;

    let hypothetical = course_args
        .iter()
        .enumerate()
        .map(|(i, arg)| parse_course(arg, i, &system))
        .collect::<Result<Vec<Course>, GradeError>>()
        .map_err(|e| report_error("Invalid hypothetical course", &e))?;

    let result = if rescale_target {
        simulate_rescaled(&transcript.semesters, &hypothetical, target, &system)
    } else {
        simulate(&transcript.semesters, &hypothetical, target, &system)
    };

    println!("\n=== What-if ({}) ===\n", system.name);
    for course in &hypothetical {
        println!(
            "  + {:<24} {} credit(s)  {}",
            course.name,
            course.credits(),
            course.grade()
        );
    }
    println!("\n  Current CGPA:   {:.2}", result.current_cgpa);
    println!("  Projected CGPA: {:.2}", result.projected_cgpa);
    println!(
        "  Target CGPA:    {:.2} ({:.0}% reached)",
        result.target_cgpa, result.progress
    );

    if result.achievable {
        println!("\n✓ Target is achievable with these grades");
    } else {
        println!("\n✗ Target is not reached with these grades");
    }
    Ok(())
}
