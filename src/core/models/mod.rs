//! Data models for `gpa-analytics`

pub mod course;
pub mod records;
pub mod semester;

pub use course::{Course, MAX_CREDITS, MIN_CREDITS};
pub use records::{build_semesters, load_records, parse_records, CourseRecord, SemesterRecord};
pub use semester::{all_courses, Semester};
