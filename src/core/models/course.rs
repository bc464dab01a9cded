//! Course model

use crate::core::error::{GradeError, Result};
use crate::core::grading::{GradeSymbol, GradingSystem};
use serde::Serialize;

/// Smallest credit load a course may carry
pub const MIN_CREDITS: u8 = 1;

/// Largest credit load a course may carry
pub const MAX_CREDITS: u8 = 6;

/// A graded course taken in one semester
///
/// Credits and grade are checked on construction and on every edit, so a `Course`
/// always carries a credit load in `1..=6` and a grade from the grading system it
/// was built against.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Course {
    /// Record identifier
    pub id: String,

    /// Course name (e.g., "MTH 101 Elementary Mathematics")
    pub name: String,

    credits: u8,

    grade: GradeSymbol,
}

impl Course {
    /// Create a new course, validating it against `system`
    ///
    /// # Arguments
    /// * `id` - Record identifier
    /// * `name` - Full course name
    /// * `credits` - Credit units, must lie in `1..=6`
    /// * `grade` - Letter grade, must belong to `system`
    /// * `system` - Grading system the grade is interpreted under
    ///
    /// # Errors
    /// Returns [`GradeError::CreditsOutOfRange`] or [`GradeError::UnknownGrade`]
    pub fn new(
        id: &str,
        name: &str,
        credits: i64,
        grade: &str,
        system: &GradingSystem,
    ) -> Result<Self> {
        Ok(Self {
            id: id.to_string(),
            name: name.to_string(),
            credits: check_credits(credits)?,
            grade: check_grade(grade, system)?,
        })
    }

    /// Credit units
    #[must_use]
    pub const fn credits(&self) -> u8 {
        self.credits
    }

    /// Letter grade
    #[must_use]
    pub const fn grade(&self) -> &GradeSymbol {
        &self.grade
    }

    /// Change the credit load
    ///
    /// # Errors
    /// Returns [`GradeError::CreditsOutOfRange`] and leaves the course untouched
    pub fn set_credits(&mut self, credits: i64) -> Result<()> {
        self.credits = check_credits(credits)?;
        Ok(())
    }

    /// Change the grade
    ///
    /// # Errors
    /// Returns [`GradeError::UnknownGrade`] and leaves the course untouched
    pub fn set_grade(&mut self, grade: &str, system: &GradingSystem) -> Result<()> {
        self.grade = check_grade(grade, system)?;
        Ok(())
    }

    /// Category used for performance breakdowns: the first word of the name
    ///
    /// # Returns
    /// `"MTH"` for "MTH 101 Elementary Mathematics", `"Other"` for a blank name
    #[must_use]
    pub fn category(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or("Other")
    }
}

fn check_credits(credits: i64) -> Result<u8> {
    u8::try_from(credits)
        .ok()
        .filter(|c| (MIN_CREDITS..=MAX_CREDITS).contains(c))
        .ok_or(GradeError::CreditsOutOfRange {
            value: credits,
            min: MIN_CREDITS,
            max: MAX_CREDITS,
        })
}

fn check_grade(grade: &str, system: &GradingSystem) -> Result<GradeSymbol> {
    let symbol = GradeSymbol::new(grade);
    if system.defines(&symbol) {
        Ok(symbol)
    } else {
        Err(GradeError::UnknownGrade {
            grade: symbol.to_string(),
            system: system.name.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn system() -> GradingSystem {
        GradingSystem::standard_five_point()
    }

    #[test]
    fn test_course_creation() {
        let course = Course::new("c1", "CSC 201 Data Structures", 3, "B", &system()).unwrap();

        assert_eq!(course.id, "c1");
        assert_eq!(course.name, "CSC 201 Data Structures");
        assert_eq!(course.credits(), 3);
        assert_eq!(course.grade().as_str(), "B");
    }

    #[test]
    fn test_credits_bounds() {
        assert!(Course::new("c", "X", 1, "A", &system()).is_ok());
        assert!(Course::new("c", "X", 6, "A", &system()).is_ok());
        assert!(matches!(
            Course::new("c", "X", 0, "A", &system()),
            Err(GradeError::CreditsOutOfRange { value: 0, .. })
        ));
        assert!(Course::new("c", "X", 7, "A", &system()).is_err());
        assert!(Course::new("c", "X", -3, "A", &system()).is_err());
    }

    #[test]
    fn test_unknown_grade_rejected() {
        let err = Course::new("c", "X", 3, "A+", &system()).unwrap_err();
        assert!(matches!(err, GradeError::UnknownGrade { ref grade, .. } if grade == "A+"));
    }

    #[test]
    fn test_edits_are_validated() {
        let mut course = Course::new("c", "X", 3, "B", &system()).unwrap();

        assert!(course.set_credits(9).is_err());
        assert_eq!(course.credits(), 3);

        assert!(course.set_grade("Z", &system()).is_err());
        assert_eq!(course.grade().as_str(), "B");

        course.set_grade("A", &system()).unwrap();
        course.set_credits(4).unwrap();
        assert_eq!(course.grade().as_str(), "A");
        assert_eq!(course.credits(), 4);
    }

    #[test]
    fn test_category() {
        let course = Course::new("c", "PHY 101 General Physics", 3, "C", &system()).unwrap();
        assert_eq!(course.category(), "PHY");

        let blank = Course::new("c", "   ", 3, "C", &system()).unwrap();
        assert_eq!(blank.category(), "Other");
    }
}
