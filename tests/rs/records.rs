//! Loading semester records from disk

use gpa_analytics::core::gpa::{calculate_cgpa, calculate_gpa};
use gpa_analytics::core::grading::GradingSystem;
use gpa_analytics::core::issues::{detect_issues, IssueKind, DEFAULT_PASSING_GRADE};
use gpa_analytics::core::models::{build_semesters, load_records};
use gpa_analytics::core::GradeError;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples")
        .join(name)
}

#[test]
fn sample_transcript_aggregates() {
    let system = GradingSystem::standard_five_point();
    let records = load_records(sample("records/transcript.json")).unwrap();
    let semesters = build_semesters(&records, &system).unwrap();

    assert_eq!(semesters.len(), 2);
    // The in-progress laboratory course is left out
    assert_eq!(semesters[1].courses.len(), 3);
    assert_eq!(semesters[1].total_credits(), 10);

    // 15 + 16 + 6 over 9 credits
    assert!((calculate_gpa(&semesters[0].courses, &system) - 4.11).abs() < f64::EPSILON);
    // 12 + 4 + 0 over 10 credits
    assert!((calculate_gpa(&semesters[1].courses, &system) - 1.6).abs() < f64::EPSILON);
    // 53 over 19 credits
    assert!((calculate_cgpa(&semesters, &system) - 2.79).abs() < f64::EPSILON);
}

#[test]
fn sample_transcript_issues() {
    let system = GradingSystem::standard_five_point();
    let records = load_records(sample("records/transcript.json")).unwrap();
    let issues = detect_issues(&records, &system, DEFAULT_PASSING_GRADE);

    let flagged: Vec<(&str, IssueKind)> = issues
        .iter()
        .map(|i| (i.course_id.as_str(), i.kind))
        .collect();
    assert_eq!(
        flagged,
        vec![
            ("c-202", IssueKind::LowGrade),
            ("c-203", IssueKind::Carryover),
            ("c-204", IssueKind::Incomplete),
        ]
    );
}

#[test]
fn grade_outside_scale_is_rejected() {
    let system = GradingSystem::from_file(sample("scales/four_point.toml")).unwrap();
    let records = load_records(sample("records/transcript.json")).unwrap();
    // The four-point scale has no E
    assert!(matches!(
        build_semesters(&records, &system),
        Err(GradeError::UnknownGrade { .. })
    ));
}

#[test]
fn credits_out_of_range_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("records.json");
    fs::write(
        &path,
        r#"[{"id":"s","name":"S","courses":[{"id":"c","name":"X","credits":7,"grade":"A"}]}]"#,
    )
    .unwrap();

    let records = load_records(&path).unwrap();
    assert!(matches!(
        build_semesters(&records, &GradingSystem::standard_five_point()),
        Err(GradeError::CreditsOutOfRange { value: 7, .. })
    ));
}

#[test]
fn malformed_json_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    fs::write(&path, "[{").unwrap();
    assert!(matches!(load_records(&path), Err(GradeError::Json(_))));
    assert!(matches!(
        load_records(dir.path().join("missing.json")),
        Err(GradeError::Io(_))
    ));
}
