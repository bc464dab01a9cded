//! Grading system validation
//!
//! Checks a candidate scale for internal consistency before it is activated:
//! - no two ranges overlap
//! - sorted by descending `min`, each range starts exactly where the next one ends
//!
//! Coverage of `[0, 100]` is NOT checked. A scale whose ranges are consistent with
//! each other but stop at, say, 40% passes validation; scores outside every range
//! fall back to the converter's defaults.

use super::scale::{GradeRange, GradingSystem};

/// Validate a grading system, returning one message per problem found.
///
/// An empty list means the system may be activated. Scales with zero or one range
/// always pass.
///
/// Two ranges overlap when their closed intervals intersect in more than a single
/// point. Sharing a boundary value (`A.min == B.max`) is how contiguous ranges are
/// expressed, so it is not reported as an overlap.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn validate_grading_system(system: &GradingSystem) -> Vec<String> {
    let mut errors = Vec::new();
    let grades = &system.grades;

    for (i, a) in grades.iter().enumerate() {
        for b in grades.iter().skip(i + 1) {
            if overlaps(a, b) {
                errors.push(format!(
                    "Overlapping grade ranges detected between {} and {}",
                    a.letter, b.letter
                ));
            }
        }
    }

    let mut sorted: Vec<&GradeRange> = grades.iter().collect();
    sorted.sort_by(|a, b| b.min.total_cmp(&a.min));
    for pair in sorted.windows(2) {
        let (upper, lower) = (pair[0], pair[1]);
        if upper.min != lower.max {
            errors.push(format!(
                "Gap detected between grade ranges {} and {}",
                upper.letter, lower.letter
            ));
        }
    }

    errors
}

#[allow(clippy::float_cmp)]
fn overlaps(a: &GradeRange, b: &GradeRange) -> bool {
    let intersects = a.min <= b.max && a.max >= b.min;
    let touches = a.min == b.max || b.min == a.max;
    intersects && !(touches && a.min != a.max && b.min != b.max)
}
