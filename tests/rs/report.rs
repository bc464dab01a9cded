//! Report rendering over the sample transcript

use gpa_analytics::core::grading::GradingSystem;
use gpa_analytics::core::models::{build_semesters, load_records};
use gpa_analytics::core::report::{
    render, MarkdownReporter, ReportContext, ReportFormat, ReportGenerator,
};
use gpa_analytics::core::simulation::TargetCgpa;
use pretty_assertions::assert_eq;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn transcript() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("samples/records/transcript.json")
}

#[test]
fn json_report_carries_every_section() {
    let system = GradingSystem::standard_five_point();
    let records = load_records(transcript()).unwrap();
    let semesters = build_semesters(&records, &system).unwrap();
    let ctx = ReportContext::new(
        &records,
        &semesters,
        &system,
        "D",
        Some(TargetCgpa::new(3.5).unwrap()),
    );

    let json = render(ReportFormat::Json, &ctx).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["cgpa"], serde_json::json!(2.79));
    assert_eq!(value["previous_cgpa"], serde_json::json!(4.11));
    assert_eq!(value["target_cgpa"], serde_json::json!(3.5));
    assert_eq!(value["semesters"].as_array().unwrap().len(), 2);
    assert_eq!(value["trend"][1]["cgpa"], serde_json::json!(2.79));
    assert_eq!(value["issues"].as_array().unwrap().len(), 3);
    assert_eq!(value["issues"][0]["kind"], serde_json::json!("low_grade"));
    assert_eq!(value["achievements"][0]["id"], serde_json::json!("deans-list"));

    let categories: Vec<&str> = value["categories"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|c| c["category"].as_str())
        .collect();
    assert_eq!(categories, vec!["MTH", "PHY", "GST", "CHM", "CSC"]);
}

#[test]
fn markdown_report_written_to_disk() {
    let system = GradingSystem::standard_five_point();
    let records = load_records(transcript()).unwrap();
    let semesters = build_semesters(&records, &system).unwrap();
    let ctx = ReportContext::new(&records, &semesters, &system, "D", None);

    let dir = TempDir::new().unwrap();
    let path = dir.path().join("transcript_report.md");
    MarkdownReporter::new().generate(&ctx, &path).unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert!(content.starts_with("# Academic Report"));
    assert!(content.contains("**CGPA:** 2.79"));
    assert!(content.contains("**Target CGPA:** not set"));
    assert!(content.contains("| Year 1 Rain | 3 | 10 | 1.60 |"));
    assert!(content.contains("Computer Laboratory | N/A | incomplete |"));
}

#[test]
fn format_names() {
    assert_eq!("markdown".parse::<ReportFormat>().unwrap(), ReportFormat::Markdown);
    assert_eq!(ReportFormat::Json.to_string(), "json");
}
