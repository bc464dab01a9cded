//! Grading scales: the scale model, its validator, format conversion and the
//! manager that owns the active scale.

pub mod converter;
pub mod manager;
pub mod scale;
pub mod validator;

pub use converter::{convert_grade, GradeFormat, GradeValue};
pub use manager::ScaleManager;
pub use scale::{GradeRange, GradeSymbol, GradingSystem, DISPLAY_MAX_GPA};
pub use validator::validate_grading_system;
