//! Grading system model
//!
//! A grading system maps percentage ranges to a letter and a grade-point value.
//! The built-in default is the 5-point scale; custom systems are loaded from TOML
//! and must pass [`validate_grading_system`](super::validate_grading_system)
//! before they can be activated.

use crate::core::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::fs;
use std::path::Path;

/// Upper bound of the display scale used when entering target CGPAs.
pub const DISPLAY_MAX_GPA: f64 = 4.0;

/// A grade letter such as `"A"` or `"B+"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GradeSymbol(String);

impl GradeSymbol {
    /// Create a symbol from its letter, trimming surrounding whitespace
    #[must_use]
    pub fn new(letter: &str) -> Self {
        Self(letter.trim().to_string())
    }

    /// The letter as a string slice
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GradeSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GradeSymbol {
    fn from(letter: &str) -> Self {
        Self::new(letter)
    }
}

/// A closed percentage interval `[min, max]` mapped to one letter/point pair
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRange {
    /// Lowest percentage in the range
    pub min: f64,
    /// Highest percentage in the range
    pub max: f64,
    /// Letter awarded for scores in the range
    pub letter: GradeSymbol,
    /// Grade points awarded for scores in the range
    pub points: f64,
}

impl GradeRange {
    /// Create a new grade range
    #[must_use]
    pub fn new(min: f64, max: f64, letter: &str, points: f64) -> Self {
        Self {
            min,
            max,
            letter: GradeSymbol::new(letter),
            points,
        }
    }

    /// Whether `percentage` falls inside the range (both ends inclusive)
    #[must_use]
    pub fn contains(&self, percentage: f64) -> bool {
        percentage >= self.min && percentage <= self.max
    }

    /// Representative percentage for the range
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// A named grading scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradingSystem {
    /// Stable identifier
    pub id: String,
    /// Display name (e.g., "Standard 5.0 Scale")
    pub name: String,
    /// Highest attainable GPA under this system
    #[serde(alias = "maxGPA")]
    pub max_gpa: f64,
    /// Percentage ranges, in the order they were defined
    #[serde(default)]
    pub grades: Vec<GradeRange>,
    /// Optional assessment category weights (e.g., exam vs coursework)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<BTreeMap<String, f64>>,
}

impl Default for GradingSystem {
    fn default() -> Self {
        Self::standard_five_point()
    }
}

impl GradingSystem {
    /// Create an empty grading system
    #[must_use]
    pub fn new(id: &str, name: &str, max_gpa: f64) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            max_gpa,
            grades: Vec::new(),
            weights: None,
        }
    }

    /// Builder-style helper to append a range
    #[must_use]
    pub fn with_range(mut self, range: GradeRange) -> Self {
        self.grades.push(range);
        self
    }

    /// The built-in 5-point scale
    ///
    /// | Letter | Percentage    | Points |
    /// |--------|---------------|--------|
    /// | A      | 70 – 100      | 5.0    |
    /// | B      | 60 – 69.99    | 4.0    |
    /// | C      | 50 – 59.99    | 3.0    |
    /// | D      | 45 – 49.99    | 2.0    |
    /// | E      | 40 – 44.99    | 1.0    |
    /// | F      | 0 – 39.99     | 0.0    |
    #[must_use]
    pub fn standard_five_point() -> Self {
        Self::new("default", "Standard 5.0 Scale", 5.0)
            .with_range(GradeRange::new(70.0, 100.0, "A", 5.0))
            .with_range(GradeRange::new(60.0, 69.99, "B", 4.0))
            .with_range(GradeRange::new(50.0, 59.99, "C", 3.0))
            .with_range(GradeRange::new(45.0, 49.99, "D", 2.0))
            .with_range(GradeRange::new(40.0, 44.99, "E", 1.0))
            .with_range(GradeRange::new(0.0, 39.99, "F", 0.0))
    }

    /// Parse a grading system from TOML
    ///
    /// The result is not validated; hand it to
    /// [`ScaleManager::activate`](super::ScaleManager::activate) to check it.
    ///
    /// # Errors
    /// Returns an error if the TOML cannot be parsed
    pub fn from_toml(toml_str: &str) -> Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Read a grading system from a TOML file
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Find the range defining `letter`
    #[must_use]
    pub fn range_for(&self, letter: &GradeSymbol) -> Option<&GradeRange> {
        self.grades.iter().find(|g| &g.letter == letter)
    }

    /// Point value of `letter`, if the system defines it
    #[must_use]
    pub fn point_of(&self, letter: &GradeSymbol) -> Option<f64> {
        self.range_for(letter).map(|g| g.points)
    }

    /// Whether `letter` belongs to this system's alphabet
    #[must_use]
    pub fn defines(&self, letter: &GradeSymbol) -> bool {
        self.range_for(letter).is_some()
    }

    /// First range (in definition order) containing `percentage`
    #[must_use]
    pub fn range_containing(&self, percentage: f64) -> Option<&GradeRange> {
        self.grades.iter().find(|g| g.contains(percentage))
    }

    /// The range with the lowest lower bound
    #[must_use]
    pub fn lowest(&self) -> Option<&GradeRange> {
        self.grades.iter().min_by(|a, b| a.min.total_cmp(&b.min))
    }

    /// Letters of the alphabet in definition order
    #[must_use]
    pub fn letters(&self) -> Vec<&GradeSymbol> {
        self.grades.iter().map(|g| &g.letter).collect()
    }
}

impl fmt::Display for GradingSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} [{}] (Max GPA: {:.1})", self.name, self.id, self.max_gpa)?;
        for g in &self.grades {
            writeln!(
                f,
                "  {:<3} {:>6.2} - {:>6.2}  => {:.1}",
                g.letter, g.min, g.max, g.points
            )?;
        }
        if let Some(weights) = &self.weights {
            writeln!(f, "  weights:")?;
            for (category, weight) in weights {
                writeln!(f, "    {category} = {weight}")?;
            }
        }
        Ok(())
    }
}
