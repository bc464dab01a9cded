//! Achievement badges derived from CGPA
//!
//! Achievements are a pure projection of the current and previous CGPA. Nothing is
//! stored; they are recomputed every time they are requested.

use crate::core::gpa::calculate_gpa;
use crate::core::grading::GradingSystem;
use crate::core::models::Semester;
use serde::Serialize;

/// Badge tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// Entry tier
    Bronze,
    /// Middle tier
    Silver,
    /// Top tier
    Gold,
}

/// What an achievement measures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AchievementKind {
    /// Reaching a CGPA threshold
    Gpa,
    /// Improving on the previous semester
    Improvement,
}

/// One derived achievement
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Achievement {
    /// Stable identifier
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Human-readable unlock condition
    pub description: &'static str,
    /// What is measured
    pub kind: AchievementKind,
    /// Badge tier
    pub tier: Tier,
    /// Value to reach
    pub threshold: f64,
    /// Whether the badge is earned
    pub is_unlocked: bool,
    /// Percent progress toward the threshold, within `[0, 100]`
    pub progress: f64,
}

const DEANS_LIST_CGPA: f64 = 4.5;
const PERFECT_CGPA: f64 = 5.0;
/// CGPA gain that counts as full progress toward "Rising Star"
const IMPROVEMENT_STEP: f64 = 0.5;

fn percent(value: f64) -> f64 {
    (value * 100.0).clamp(0.0, 100.0)
}

/// Derive every achievement from the current and previous CGPA
#[must_use]
pub fn derive_achievements(cgpa: f64, previous_cgpa: Option<f64>) -> Vec<Achievement> {
    let previous = previous_cgpa.filter(|p| *p > 0.0);

    vec![
        Achievement {
            id: "deans-list",
            name: "Dean's List",
            description: "Maintain a GPA of 4.5 or higher",
            kind: AchievementKind::Gpa,
            tier: Tier::Gold,
            threshold: DEANS_LIST_CGPA,
            is_unlocked: cgpa >= DEANS_LIST_CGPA,
            progress: percent(cgpa / DEANS_LIST_CGPA),
        },
        Achievement {
            id: "improvement",
            name: "Rising Star",
            description: "Show improvement from previous semester",
            kind: AchievementKind::Improvement,
            tier: Tier::Silver,
            threshold: previous.unwrap_or(0.0),
            is_unlocked: previous.is_some_and(|p| cgpa > p),
            progress: previous.map_or(0.0, |p| percent((cgpa - p) / IMPROVEMENT_STEP)),
        },
        Achievement {
            id: "excellence",
            name: "Academic Excellence",
            description: "Achieve a perfect 5.0 GPA",
            kind: AchievementKind::Gpa,
            tier: Tier::Gold,
            threshold: PERFECT_CGPA,
            is_unlocked: cgpa >= PERFECT_CGPA,
            progress: percent(cgpa / PERFECT_CGPA),
        },
    ]
}

/// The comparison point for "Rising Star": GPA of the second-to-last semester
#[must_use]
pub fn previous_cgpa(semesters: &[Semester], system: &GradingSystem) -> Option<f64> {
    let idx = semesters.len().checked_sub(2)?;
    Some(calculate_gpa(&semesters[idx].courses, system))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::Course;

    fn find<'a>(list: &'a [Achievement], id: &str) -> &'a Achievement {
        list.iter().find(|a| a.id == id).unwrap()
    }

    #[test]
    fn test_deans_list_threshold() {
        let list = derive_achievements(4.5, None);
        assert!(find(&list, "deans-list").is_unlocked);
        assert!((find(&list, "deans-list").progress - 100.0).abs() < f64::EPSILON);

        let list = derive_achievements(2.25, None);
        assert!(!find(&list, "deans-list").is_unlocked);
        assert!((find(&list, "deans-list").progress - 50.0).abs() < 1e-9);
    }

    #[test]
    fn test_rising_star() {
        let list = derive_achievements(3.5, Some(3.25));
        let star = find(&list, "improvement");
        assert!(star.is_unlocked);
        assert!((star.progress - 50.0).abs() < 1e-9);
        assert!((star.threshold - 3.25).abs() < f64::EPSILON);

        let list = derive_achievements(3.0, Some(3.5));
        let star = find(&list, "improvement");
        assert!(!star.is_unlocked);
        assert!(star.progress.abs() < f64::EPSILON);

        let list = derive_achievements(3.0, None);
        assert!(!find(&list, "improvement").is_unlocked);
    }

    #[test]
    fn test_excellence_requires_perfect() {
        assert!(find(&derive_achievements(5.0, None), "excellence").is_unlocked);
        assert!(!find(&derive_achievements(4.99, None), "excellence").is_unlocked);
    }

    #[test]
    fn test_previous_cgpa_uses_penultimate_semester() {
        let system = GradingSystem::standard_five_point();
        let c = |g: &str| Course::new("c", "X", 3, g, &system).unwrap();
        let semesters = vec![
            Semester::new("s1", "One").with_course(c("A")),
            Semester::new("s2", "Two").with_course(c("C")),
            Semester::new("s3", "Three").with_course(c("B")),
        ];
        assert_eq!(previous_cgpa(&semesters, &system), Some(3.0));
        assert_eq!(previous_cgpa(&semesters[..1], &system), None);
    }
}
