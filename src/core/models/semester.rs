//! Semester model

use super::course::Course;
use serde::Serialize;

/// One semester's courses, in insertion order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Semester {
    /// Record identifier
    pub id: String,

    /// Display name (e.g., "Year 1 Harmattan")
    pub name: String,

    /// Courses in the order they were added
    pub courses: Vec<Course>,
}

impl Semester {
    /// Create an empty semester
    #[must_use]
    pub fn new(id: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            courses: Vec::new(),
        }
    }

    /// Builder-style helper to append a course
    #[must_use]
    pub fn with_course(mut self, course: Course) -> Self {
        self.courses.push(course);
        self
    }

    /// Append a course
    pub fn add_course(&mut self, course: Course) {
        self.courses.push(course);
    }

    /// Remove a course by id, returning it if present
    pub fn remove_course(&mut self, course_id: &str) -> Option<Course> {
        let idx = self.courses.iter().position(|c| c.id == course_id)?;
        Some(self.courses.remove(idx))
    }

    /// Look up a course by id
    #[must_use]
    pub fn get_course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Mutable lookup by id, for editing name, credits or grade
    pub fn get_course_mut(&mut self, course_id: &str) -> Option<&mut Course> {
        self.courses.iter_mut().find(|c| c.id == course_id)
    }

    /// Total credit units
    #[must_use]
    pub fn total_credits(&self) -> u32 {
        self.courses.iter().map(|c| u32::from(c.credits())).sum()
    }
}

/// Every course of every semester, in semester then insertion order
pub fn all_courses(semesters: &[Semester]) -> impl Iterator<Item = &Course> + Clone {
    semesters.iter().flat_map(|s| s.courses.iter())
}
