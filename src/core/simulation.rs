//! What-if CGPA simulation
//!
//! Projects the CGPA a student would reach if a set of hypothetical future courses
//! were graded as given, and checks it against a target.
//!
//! Targets are entered on the 4.0 display scale and bounded to `[0, 4.0]`. They are
//! compared with the projected CGPA as-is; a caller who wants the target expressed
//! on a different scale converts it explicitly with [`TargetCgpa::rescaled`].

use crate::core::error::{GradeError, Result};
use crate::core::gpa::{calculate_cgpa, calculate_gpa};
use crate::core::grading::{GradingSystem, DISPLAY_MAX_GPA};
use crate::core::models::{all_courses, Course, Semester};
use serde::Serialize;
use tracing::debug;

/// A target CGPA accepted at the input boundary
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize)]
#[serde(transparent)]
pub struct TargetCgpa(f64);

impl TargetCgpa {
    /// Accept a target in `[0, 4.0]`
    ///
    /// # Errors
    /// Returns [`GradeError::TargetOutOfRange`] for values outside the display
    /// scale, including NaN
    pub fn new(value: f64) -> Result<Self> {
        if (0.0..=DISPLAY_MAX_GPA).contains(&value) {
            Ok(Self(value))
        } else {
            Err(GradeError::TargetOutOfRange {
                value,
                max: DISPLAY_MAX_GPA,
            })
        }
    }

    /// The target on the display scale
    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }

    /// The target converted linearly onto a scale topping out at `max_gpa`
    #[must_use]
    pub fn rescaled(self, max_gpa: f64) -> f64 {
        self.0 * max_gpa / DISPLAY_MAX_GPA
    }
}

/// Holds the accepted target, keeping the previous one when a new value is rejected
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetSetting {
    current: TargetCgpa,
}

impl TargetSetting {
    /// Start from an already accepted target
    #[must_use]
    pub const fn new(initial: TargetCgpa) -> Self {
        Self { current: initial }
    }

    /// Currently accepted target
    #[must_use]
    pub const fn current(&self) -> TargetCgpa {
        self.current
    }

    /// Try to replace the target
    ///
    /// # Errors
    /// Returns [`GradeError::TargetOutOfRange`]; the prior target is retained
    pub fn submit(&mut self, value: f64) -> Result<TargetCgpa> {
        self.current = TargetCgpa::new(value)?;
        Ok(self.current)
    }
}

/// Outcome of a simulation run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationResult {
    /// CGPA over actual courses only
    pub current_cgpa: f64,
    /// CGPA over actual plus hypothetical courses
    pub projected_cgpa: f64,
    /// Target the projection was compared with
    pub target_cgpa: f64,
    /// Whether the projection meets the target
    pub achievable: bool,
    /// Projection as a percentage of the target
    pub progress: f64,
}

/// Project the CGPA over actual semesters plus hypothetical courses
///
/// Hypothetical courses are ordinary [`Course`] values (credits `1..=6`, grade from
/// `system`) and are never stored anywhere.
#[must_use]
pub fn simulate(
    actual: &[Semester],
    hypothetical: &[Course],
    target: TargetCgpa,
    system: &GradingSystem,
) -> SimulationResult {
    simulate_against(actual, hypothetical, target.value(), system)
}

/// Same as [`simulate`], comparing against the target rescaled to the system's
/// maximum GPA
#[must_use]
pub fn simulate_rescaled(
    actual: &[Semester],
    hypothetical: &[Course],
    target: TargetCgpa,
    system: &GradingSystem,
) -> SimulationResult {
    simulate_against(actual, hypothetical, target.rescaled(system.max_gpa), system)
}

fn simulate_against(
    actual: &[Semester],
    hypothetical: &[Course],
    target: f64,
    system: &GradingSystem,
) -> SimulationResult {
    let combined: Vec<Course> = all_courses(actual).chain(hypothetical).cloned().collect();
    let projected_cgpa = calculate_gpa(&combined, system);
    let current_cgpa = calculate_cgpa(actual, system);

    debug!(
        "Simulated {} hypothetical course(s): {current_cgpa:.2} -> {projected_cgpa:.2} (target {target:.2})",
        hypothetical.len()
    );

    SimulationResult {
        current_cgpa,
        projected_cgpa,
        target_cgpa: target,
        achievable: projected_cgpa >= target,
        progress: if target > 0.0 {
            projected_cgpa / target * 100.0
        } else {
            0.0
        },
    }
}
