//! GPA and CGPA aggregation
//!
//! GPA is total quality points over total credit units, rounded half-up to two
//! decimals. CGPA is computed the same way over every course of every semester;
//! it is never an average of per-semester GPAs, so heavy semesters weigh more.

use crate::core::grading::GradingSystem;
use crate::core::models::{all_courses, Course, Semester};
use tracing::warn;

/// Quality points for one course: credits × grade point
#[must_use]
pub fn course_points(course: &Course, system: &GradingSystem) -> f64 {
    let points = system.point_of(course.grade()).unwrap_or_else(|| {
        warn!(
            "Grade '{}' of course '{}' is not defined by '{}'; counting 0 points",
            course.grade(),
            course.name,
            system.name
        );
        0.0
    });
    f64::from(course.credits()) * points
}

/// Sum of quality points over `courses`
pub fn total_grade_points<'a, I>(courses: I, system: &GradingSystem) -> f64
where
    I: IntoIterator<Item = &'a Course>,
{
    courses.into_iter().map(|c| course_points(c, system)).sum()
}

/// Sum of credit units over `courses`
pub fn total_units<'a, I>(courses: I) -> u32
where
    I: IntoIterator<Item = &'a Course>,
{
    courses.into_iter().map(|c| u32::from(c.credits())).sum()
}

/// Round half-up to two decimal places
#[must_use]
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn average<'a, I>(courses: I, system: &GradingSystem) -> f64
where
    I: IntoIterator<Item = &'a Course> + Clone,
{
    let units = total_units(courses.clone());
    if units == 0 {
        return 0.0;
    }
    round2(total_grade_points(courses, system) / f64::from(units))
}

/// GPA of a list of courses; 0 for an empty list
#[must_use]
pub fn calculate_gpa(courses: &[Course], system: &GradingSystem) -> f64 {
    average(courses, system)
}

/// CGPA over every course of every semester; 0 when there are no credits
#[must_use]
pub fn calculate_cgpa(semesters: &[Semester], system: &GradingSystem) -> f64 {
    average(all_courses(semesters), system)
}
