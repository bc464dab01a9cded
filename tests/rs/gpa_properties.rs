//! Property tests for the aggregation and conversion rules

use gpa_analytics::core::gpa::{calculate_cgpa, calculate_gpa, round2};
use gpa_analytics::core::grading::{
    convert_grade, GradeFormat, GradeSymbol, GradeValue, GradingSystem,
};
use gpa_analytics::core::models::{Course, Semester};
use proptest::prelude::*;

const LETTERS: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

fn course_strategy() -> impl Strategy<Value = (i64, usize)> {
    (1i64..=6, 0usize..LETTERS.len())
}

fn build(specs: &[(i64, usize)], system: &GradingSystem) -> Vec<Course> {
    specs
        .iter()
        .enumerate()
        .map(|(i, (credits, letter))| {
            Course::new(&i.to_string(), "Course", *credits, LETTERS[*letter], system).unwrap()
        })
        .collect()
}

proptest! {
    #[test]
    fn cgpa_ignores_semester_boundaries(
        specs in prop::collection::vec(course_strategy(), 1..24),
        cut in 0usize..24,
    ) {
        let system = GradingSystem::standard_five_point();
        let courses = build(&specs, &system);
        let cut = cut.min(courses.len());

        let split = vec![
            Semester { id: "a".into(), name: "A".into(), courses: courses[..cut].to_vec() },
            Semester { id: "b".into(), name: "B".into(), courses: courses[cut..].to_vec() },
        ];
        let single = vec![Semester { id: "c".into(), name: "C".into(), courses: courses.clone() }];

        prop_assert_eq!(calculate_cgpa(&split, &system), calculate_cgpa(&single, &system));
        prop_assert_eq!(calculate_cgpa(&single, &system), calculate_gpa(&courses, &system));
    }

    #[test]
    fn gpa_stays_within_scale(specs in prop::collection::vec(course_strategy(), 0..24)) {
        let system = GradingSystem::standard_five_point();
        let gpa = calculate_gpa(&build(&specs, &system), &system);
        prop_assert!((0.0..=system.max_gpa).contains(&gpa));
        prop_assert_eq!(round2(gpa), gpa);
    }

    #[test]
    fn letters_survive_percentage_round_trip(letter in 0usize..LETTERS.len()) {
        let system = GradingSystem::standard_five_point();
        let original = GradeValue::Letter(GradeSymbol::new(LETTERS[letter]));
        let pct = convert_grade(&original, GradeFormat::Percentage, &system);
        prop_assert_eq!(convert_grade(&pct, GradeFormat::Letter, &system), original);
    }

    #[test]
    fn percentage_letter_round_trip_is_stable(pct in 0.0f64..=100.0) {
        let system = GradingSystem::standard_five_point();
        let first = convert_grade(&GradeValue::Percentage(pct), GradeFormat::Letter, &system);
        let back = convert_grade(&first, GradeFormat::Percentage, &system);
        prop_assert_eq!(convert_grade(&back, GradeFormat::Letter, &system), first.clone());

        if let Some(range) = system.range_containing(pct) {
            prop_assert_eq!(first, GradeValue::Letter(range.letter.clone()));
        }
    }
}
