//! Integration smoke tests for `gpa_analytics`

use gpa_analytics::core::gpa::calculate_gpa;
use gpa_analytics::core::grading::GradingSystem;
use gpa_analytics::core::models::Course;
use gpa_analytics::get_version;

#[test]
fn version_is_not_empty() {
    let v = get_version();
    assert!(!v.trim().is_empty());
}

#[test]
fn default_scale_computes_gpa() {
    let system = GradingSystem::default();
    let courses = vec![
        Course::new("a", "MTH 101", 3, "A", &system).unwrap(),
        Course::new("b", "PHY 101", 4, "B", &system).unwrap(),
    ];
    assert!((calculate_gpa(&courses, &system) - 4.43).abs() < f64::EPSILON);
}
