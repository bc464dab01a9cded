//! Grading systems loaded from files and swapped through the scale manager

use gpa_analytics::core::gpa::calculate_gpa;
use gpa_analytics::core::grading::{
    convert_grade, validate_grading_system, GradeFormat, GradeSymbol, GradeValue, GradingSystem,
    ScaleManager,
};
use gpa_analytics::core::models::Course;
use gpa_analytics::core::GradeError;
use pretty_assertions::assert_eq;
use std::path::PathBuf;

fn sample(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("samples/scales")
        .join(name)
}

#[test]
fn four_point_file_is_valid_and_activates() {
    let system = GradingSystem::from_file(sample("four_point.toml")).unwrap();
    assert!(validate_grading_system(&system).is_empty());
    assert_eq!(system.letters().len(), 5);

    let manager = ScaleManager::new();
    manager.activate(system).unwrap();
    let active = manager.active();
    assert_eq!(active.id, "four-point");
    assert!((active.max_gpa - 4.0).abs() < f64::EPSILON);
}

#[test]
fn gapped_file_is_refused() {
    let manager = ScaleManager::new();
    let err = manager.activate_file(sample("gapped.toml")).unwrap_err();

    match err {
        GradeError::InvalidScale(errors) => {
            assert_eq!(
                errors,
                vec!["Gap detected between grade ranges A and B".to_string()]
            );
        }
        other => panic!("unexpected error: {other}"),
    }
    // Default stays active
    assert_eq!(manager.active().id, "default");
}

#[test]
fn snapshot_survives_activation() {
    let manager = ScaleManager::new();
    let before = manager.active();
    manager.activate_file(sample("four_point.toml")).unwrap();

    assert_eq!(before.id, "default");
    assert_eq!(manager.active().id, "four-point");

    manager.reset();
    assert_eq!(manager.active().id, "default");
}

#[test]
fn gpa_follows_active_scale() {
    let manager = ScaleManager::new();
    manager.activate_file(sample("four_point.toml")).unwrap();
    let system = manager.active();

    let courses = vec![
        Course::new("a", "MTH 101", 3, "A", &system).unwrap(),
        Course::new("b", "PHY 101", 4, "B", &system).unwrap(),
    ];
    // (12 + 12) / 7
    assert!((calculate_gpa(&courses, &system) - 3.43).abs() < f64::EPSILON);
}

#[test]
fn shared_boundary_converts_to_higher_grade() {
    let system = GradingSystem::from_file(sample("four_point.toml")).unwrap();
    assert_eq!(
        convert_grade(&GradeValue::Percentage(70.0), GradeFormat::Letter, &system),
        GradeValue::Letter(GradeSymbol::new("A"))
    );
    assert_eq!(
        convert_grade(&GradeValue::Percentage(69.5), GradeFormat::Points, &system),
        GradeValue::Points(3.0)
    );
}

#[test]
fn weights_are_read() {
    let system = GradingSystem::from_file(sample("four_point.toml")).unwrap();
    let weights = system.weights.unwrap();
    assert!((weights["exam"] - 0.7).abs() < f64::EPSILON);
    assert!((weights["coursework"] - 0.3).abs() < f64::EPSILON);
}
