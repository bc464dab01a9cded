//! Derived analytics: GPA trend across semesters and performance by course category

use crate::core::gpa::{calculate_cgpa, calculate_gpa};
use crate::core::grading::GradingSystem;
use crate::core::models::{Course, Semester};
use serde::Serialize;

/// Padding added around the plotted GPA values
const CHART_MARGIN: f64 = 0.5;

/// One semester's point on the trend line
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    /// Semester name
    pub semester: String,
    /// GPA of that semester alone
    pub gpa: f64,
    /// CGPA over that semester and every earlier one
    pub cgpa: f64,
}

/// GPA of each semester plus the running CGPA, in semester order
#[must_use]
pub fn semester_trend(semesters: &[Semester], system: &GradingSystem) -> Vec<TrendPoint> {
    semesters
        .iter()
        .enumerate()
        .map(|(idx, semester)| TrendPoint {
            semester: semester.name.clone(),
            gpa: calculate_gpa(&semester.courses, system),
            cgpa: calculate_cgpa(&semesters[..=idx], system),
        })
        .collect()
}

/// Vertical axis bounds for plotting a trend against an optional target
///
/// Spans the semester GPAs and the target with half a point of padding, clipped to
/// `[0, max_gpa]` of the active scale. The lower bound never exceeds the upper one.
/// Returns `None` when there is nothing to plot.
#[must_use]
pub fn chart_bounds(
    trend: &[TrendPoint],
    target: Option<f64>,
    max_gpa: f64,
) -> Option<(f64, f64)> {
    let values = trend.iter().map(|p| p.gpa).chain(target);
    let (min, max) = values.fold(None, |acc: Option<(f64, f64)>, v| {
        Some(acc.map_or((v, v), |(lo, hi)| (lo.min(v), hi.max(v))))
    })?;
    let hi = (max + CHART_MARGIN).clamp(0.0, max_gpa.max(0.0));
    let lo = (min - CHART_MARGIN).max(0.0).min(hi);
    Some((lo, hi))
}

/// GPA of the courses sharing one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryPerformance {
    /// Category label (first word of the course name)
    pub category: String,
    /// GPA over the category's courses
    pub gpa: f64,
    /// Number of courses in the category
    pub courses: usize,
}

/// Group courses by [`Course::category`] and compute each group's GPA
///
/// Categories appear in the order they are first seen.
#[must_use]
pub fn category_performance<'a, I>(courses: I, system: &GradingSystem) -> Vec<CategoryPerformance>
where
    I: IntoIterator<Item = &'a Course>,
{
    let mut groups: Vec<(&str, Vec<Course>)> = Vec::new();
    for course in courses {
        let category = course.category();
        match groups.iter_mut().find(|(name, _)| *name == category) {
            Some((_, members)) => members.push(course.clone()),
            None => groups.push((category, vec![course.clone()])),
        }
    }

    groups
        .into_iter()
        .map(|(category, members)| CategoryPerformance {
            category: category.to_string(),
            gpa: calculate_gpa(&members, system),
            courses: members.len(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::all_courses;

    fn course(name: &str, credits: i64, grade: &str) -> Course {
        Course::new(name, name, credits, grade, &GradingSystem::standard_five_point()).unwrap()
    }

    fn semesters() -> Vec<Semester> {
        vec![
            Semester::new("s1", "First")
                .with_course(course("MTH 101", 3, "A"))
                .with_course(course("PHY 101", 3, "C")),
            Semester::new("s2", "Second")
                .with_course(course("MTH 102", 2, "B"))
                .with_course(course("CSC 102", 4, "F")),
        ]
    }

    #[test]
    fn test_trend_running_cgpa() {
        let system = GradingSystem::standard_five_point();
        let trend = semester_trend(&semesters(), &system);

        assert_eq!(trend.len(), 2);
        assert!((trend[0].gpa - 4.0).abs() < f64::EPSILON);
        assert!((trend[0].cgpa - 4.0).abs() < f64::EPSILON);
        // 2×4 + 4×0 over 6 credits
        assert!((trend[1].gpa - 1.33).abs() < f64::EPSILON);
        // (15 + 9 + 8) / 12
        assert!((trend[1].cgpa - 2.67).abs() < f64::EPSILON);
    }

    #[test]
    fn test_chart_bounds() {
        let trend = vec![
            TrendPoint {
                semester: "a".into(),
                gpa: 3.2,
                cgpa: 3.2,
            },
            TrendPoint {
                semester: "b".into(),
                gpa: 2.1,
                cgpa: 2.6,
            },
        ];
        let (lo, hi) = chart_bounds(&trend, Some(3.8), 4.0).unwrap();
        assert!((lo - 1.6).abs() < 1e-9);
        assert!((hi - 4.0).abs() < 1e-9);

        let (lo, _) = chart_bounds(&trend, Some(0.2), 4.0).unwrap();
        assert!(lo.abs() < f64::EPSILON);

        assert!(chart_bounds(&[], None, 5.0).is_none());
        assert_eq!(chart_bounds(&[], Some(3.0), 5.0), Some((2.5, 3.5)));
    }

    #[test]
    fn test_chart_bounds_follow_active_scale_maximum() {
        let system = GradingSystem::standard_five_point();
        let all_a = vec![
            Semester::new("s1", "First").with_course(course("MTH 101", 3, "A")),
            Semester::new("s2", "Second").with_course(course("MTH 102", 3, "A")),
        ];
        let trend = semester_trend(&all_a, &system);

        let (lo, hi) = chart_bounds(&trend, None, system.max_gpa).unwrap();
        assert!((lo - 4.5).abs() < 1e-9);
        assert!((hi - 5.0).abs() < 1e-9);
        assert!(trend.iter().all(|p| (lo..=hi).contains(&p.gpa)));

        let (lo, hi) = chart_bounds(&trend, Some(3.5), system.max_gpa).unwrap();
        assert!((lo - 3.0).abs() < 1e-9);
        assert!((hi - 5.0).abs() < 1e-9);

        // Plotting on a narrower axis than the data still yields an ordered range
        let (lo, hi) = chart_bounds(&trend, None, 4.0).unwrap();
        assert!(lo <= hi);
    }

    #[test]
    fn test_category_performance_groups_in_first_seen_order() {
        let system = GradingSystem::standard_five_point();
        let semesters = semesters();
        let categories = category_performance(all_courses(&semesters), &system);

        let names: Vec<&str> = categories.iter().map(|c| c.category.as_str()).collect();
        assert_eq!(names, vec!["MTH", "PHY", "CSC"]);

        let mth = &categories[0];
        assert_eq!(mth.courses, 2);
        // (3×5 + 2×4) / 5
        assert!((mth.gpa - 4.6).abs() < f64::EPSILON);
    }
}
