//! Grade format conversion
//!
//! Conversion goes through a percentage: the input is normalized to a percentage
//! (letters and points use their range midpoint), then projected onto the target
//! format. Letters discard precision, so round trips through a letter are lossy.

use super::scale::{GradeSymbol, GradingSystem};
use crate::core::error::{GradeError, Result};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Representation of a single grade
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeFormat {
    /// Letter such as "A"
    Letter,
    /// Percentage score in `[0, 100]`
    Percentage,
    /// Grade-point value such as 4.0
    Points,
}

impl FromStr for GradeFormat {
    type Err = GradeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "letter" | "l" => Ok(Self::Letter),
            "percentage" | "percent" | "%" | "p" => Ok(Self::Percentage),
            "points" | "point" | "gp" => Ok(Self::Points),
            _ => Err(GradeError::Parse(format!("Unknown grade format: {s}"))),
        }
    }
}

impl fmt::Display for GradeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter => write!(f, "letter"),
            Self::Percentage => write!(f, "percentage"),
            Self::Points => write!(f, "points"),
        }
    }
}

/// A grade value tagged with its format
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum GradeValue {
    /// Letter grade
    Letter(GradeSymbol),
    /// Percentage score
    Percentage(f64),
    /// Grade points
    Points(f64),
}

impl GradeValue {
    /// Parse raw user input as a value of the given format
    ///
    /// # Errors
    /// Returns an error if a percentage or points value is not a number
    pub fn parse(raw: &str, format: GradeFormat) -> Result<Self> {
        let number = || {
            raw.trim()
                .parse::<f64>()
                .map_err(|_| GradeError::Parse(format!("Invalid {format} value: '{raw}'")))
        };
        Ok(match format {
            GradeFormat::Letter => Self::Letter(GradeSymbol::new(raw)),
            GradeFormat::Percentage => Self::Percentage(number()?),
            GradeFormat::Points => Self::Points(number()?),
        })
    }

    /// The format this value is expressed in
    #[must_use]
    pub const fn format(&self) -> GradeFormat {
        match self {
            Self::Letter(_) => GradeFormat::Letter,
            Self::Percentage(_) => GradeFormat::Percentage,
            Self::Points(_) => GradeFormat::Points,
        }
    }
}

impl fmt::Display for GradeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Letter(letter) => write!(f, "{letter}"),
            Self::Percentage(p) => write!(f, "{p:.2}%"),
            Self::Points(p) => write!(f, "{p:.2}"),
        }
    }
}

/// Normalize a value to a percentage under `system`.
///
/// Unknown letters and point values fall back to 0%.
#[must_use]
pub fn to_percentage(value: &GradeValue, system: &GradingSystem) -> f64 {
    match value {
        GradeValue::Percentage(p) => *p,
        GradeValue::Letter(letter) => system.range_for(letter).map_or(0.0, |g| g.midpoint()),
        GradeValue::Points(points) => system
            .grades
            .iter()
            .find(|g| (g.points - points).abs() < f64::EPSILON)
            .map_or(0.0, |g| g.midpoint()),
    }
}

/// Convert `value` to the `to` format under `system`.
///
/// Percentages not covered by any range project to the lowest letter of the
/// system, or to 0 points.
#[must_use]
pub fn convert_grade(value: &GradeValue, to: GradeFormat, system: &GradingSystem) -> GradeValue {
    let percentage = to_percentage(value, system);
    match to {
        GradeFormat::Percentage => GradeValue::Percentage(percentage),
        GradeFormat::Letter => {
            let letter = system
                .range_containing(percentage)
                .or_else(|| system.lowest())
                .map_or_else(|| GradeSymbol::new(""), |g| g.letter.clone());
            GradeValue::Letter(letter)
        }
        GradeFormat::Points => {
            GradeValue::Points(system.range_containing(percentage).map_or(0.0, |g| g.points))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letter(l: &str) -> GradeValue {
        GradeValue::Letter(GradeSymbol::new(l))
    }

    #[test]
    fn test_percentage_to_letter_and_points() {
        let system = GradingSystem::standard_five_point();
        let pct = GradeValue::Percentage(65.0);
        assert_eq!(convert_grade(&pct, GradeFormat::Letter, &system), letter("B"));
        assert_eq!(
            convert_grade(&pct, GradeFormat::Points, &system),
            GradeValue::Points(4.0)
        );
    }

    #[test]
    fn test_letter_uses_range_midpoint() {
        let system = GradingSystem::standard_five_point();
        assert_eq!(
            convert_grade(&letter("A"), GradeFormat::Percentage, &system),
            GradeValue::Percentage(85.0)
        );
    }

    #[test]
    fn test_points_to_letter() {
        let system = GradingSystem::standard_five_point();
        assert_eq!(
            convert_grade(&GradeValue::Points(3.0), GradeFormat::Letter, &system),
            letter("C")
        );
    }

    #[test]
    fn test_lookup_misses_fall_back() {
        let system = GradingSystem::standard_five_point();
        assert_eq!(
            convert_grade(&letter("Q"), GradeFormat::Percentage, &system),
            GradeValue::Percentage(0.0)
        );
        assert_eq!(
            convert_grade(&GradeValue::Points(4.5), GradeFormat::Letter, &system),
            letter("F")
        );
        assert_eq!(
            convert_grade(&GradeValue::Percentage(120.0), GradeFormat::Letter, &system),
            letter("F")
        );
        assert_eq!(
            convert_grade(&GradeValue::Percentage(120.0), GradeFormat::Points, &system),
            GradeValue::Points(0.0)
        );
    }

    #[test]
    fn test_round_trip_is_lossy_but_stays_in_letter() {
        let system = GradingSystem::standard_five_point();
        let original = GradeValue::Percentage(62.0);
        let as_letter = convert_grade(&original, GradeFormat::Letter, &system);
        let back = convert_grade(&as_letter, GradeFormat::Percentage, &system);
        assert_ne!(back, original);
        assert_eq!(convert_grade(&back, GradeFormat::Letter, &system), as_letter);
    }

    #[test]
    fn test_parse_and_format() {
        assert_eq!("Points".parse::<GradeFormat>().unwrap(), GradeFormat::Points);
        assert!("grade".parse::<GradeFormat>().is_err());
        assert_eq!(
            GradeValue::parse("72.5", GradeFormat::Percentage).unwrap(),
            GradeValue::Percentage(72.5)
        );
        assert!(GradeValue::parse("high", GradeFormat::Points).is_err());
        assert_eq!(letter("A").format(), GradeFormat::Letter);
    }
}
