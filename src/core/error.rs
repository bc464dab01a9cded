//! Error types for the grading engine

use thiserror::Error;

/// Errors raised at the input boundary of the grading engine.
///
/// Degenerate inputs (no courses, zero credits) and conversion lookup misses are
/// not errors; they resolve to documented defaults instead.
#[derive(Debug, Error)]
pub enum GradeError {
    /// A grading system failed validation and was not activated.
    #[error("invalid grading system:\n{}", .0.join("\n"))]
    InvalidScale(Vec<String>),

    /// Course credits outside the accepted range.
    #[error("credits must be between {min} and {max}, got {value}")]
    CreditsOutOfRange {
        /// Offending value
        value: i64,
        /// Smallest accepted value
        min: u8,
        /// Largest accepted value
        max: u8,
    },

    /// Target CGPA outside the display scale.
    #[error("target CGPA must be between 0.0 and {max:.1}, got {value}")]
    TargetOutOfRange {
        /// Offending value
        value: f64,
        /// Upper bound of the display scale
        max: f64,
    },

    /// Grade symbol not present in the active grading system.
    #[error("grade '{grade}' is not defined by grading system '{system}'")]
    UnknownGrade {
        /// Offending symbol
        grade: String,
        /// Name of the grading system consulted
        system: String,
    },

    /// A user-supplied value could not be parsed.
    #[error("{0}")]
    Parse(String),

    /// A configuration key that does not exist.
    #[error("Unknown config key: '{0}'")]
    ConfigKey(String),

    /// Reading or writing a file failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Semester records were not valid JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// A grading system file was not valid TOML.
    #[error(transparent)]
    Toml(#[from] toml::de::Error),

    /// Configuration could not be written as TOML.
    #[error(transparent)]
    TomlSer(#[from] toml::ser::Error),
}

/// Result alias used throughout the engine.
pub type Result<T, E = GradeError> = std::result::Result<T, E>;
