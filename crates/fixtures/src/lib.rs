//! Builtin seed data for the class-desk dashboard.
//!
//! Every view renders from these collections; nothing is loaded at runtime.

use chrono::NaiveDate;
use core_types::{
    ClassOverview, Coursework, Performance, Student, StudentSubmission, SubjectReport,
    TimetableEntry, WorkExcerpt, WorkKind,
};

const fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
    match NaiveDate::from_ymd_opt(year, month, day) {
        Some(date) => date,
        None => panic!("invalid fixture date"),
    }
}

const MATH_HOMEWORK_DUE: NaiveDate = ymd(2024, 3, 20);
const PHYSICS_LAB_DUE: NaiveDate = ymd(2024, 3, 22);
const MID_TERM_DATE: NaiveDate = ymd(2024, 3, 25);
const CHAPTER_TEST_DATE: NaiveDate = ymd(2024, 3, 28);

/// Headline figures for the dashboard overview card.
pub fn class_overview() -> ClassOverview {
    ClassOverview {
        average_score: 85,
        assignments_completed: 92,
        test_participation: 95,
    }
}

/// Today's timetable.
pub fn load_builtin_timetable() -> Vec<TimetableEntry> {
    [
        ("Monday", "9:00 AM", "Mathematics", "10-A"),
        ("Monday", "11:00 AM", "Physics", "11-B"),
        ("Tuesday", "10:00 AM", "Chemistry", "12-A"),
    ]
    .into_iter()
    .map(|(day, time, subject, class_name)| TimetableEntry {
        day: day.into(),
        time: time.into(),
        subject: subject.into(),
        class_name: class_name.into(),
    })
    .collect()
}

/// Recent assignments shown on the dashboard.
pub fn recent_assignments() -> Vec<WorkExcerpt> {
    vec![
        excerpt("Math Homework Ch. 5", "Mathematics", MATH_HOMEWORK_DUE),
        excerpt("Physics Lab Report", "Physics", PHYSICS_LAB_DUE),
    ]
}

/// Recent tests shown on the dashboard.
pub fn recent_tests() -> Vec<WorkExcerpt> {
    vec![
        excerpt("Mid-term Test", "Chemistry", MID_TERM_DATE),
        excerpt("Chapter Test", "Mathematics", CHAPTER_TEST_DATE),
    ]
}

/// Assignments seeded into the Tasks view.
pub fn load_builtin_assignments() -> Vec<Coursework> {
    vec![Coursework {
        id: "1".into(),
        kind: WorkKind::Assignment,
        title: "Math Homework Ch. 5".into(),
        subject: "Mathematics".into(),
        date: MATH_HOMEWORK_DUE,
        is_checked: true,
        submissions: vec![
            StudentSubmission::scored("1", "John Doe", 85),
            StudentSubmission::scored("2", "Jane Smith", 92),
            StudentSubmission::missing("3", "Mike Johnson"),
        ],
    }]
}

/// Tests seeded into the Tasks view.
pub fn load_builtin_tests() -> Vec<Coursework> {
    vec![Coursework {
        id: "1".into(),
        kind: WorkKind::Test,
        title: "Mid-term Test".into(),
        subject: "Chemistry".into(),
        date: MID_TERM_DATE,
        is_checked: false,
        submissions: vec![
            StudentSubmission::scored("1", "John Doe", 88),
            StudentSubmission::scored("2", "Jane Smith", 95),
            StudentSubmission::scored("3", "Mike Johnson", 78),
        ],
    }]
}

/// The class roster used by the Reports view.
pub fn load_builtin_roster() -> Vec<Student> {
    vec![
        student(
            "1",
            "John Doe",
            vec![
                report("Mathematics", 88.0, 15, 16, Performance::Excellent),
                report("Physics", 82.0, 14, 15, Performance::Good),
            ],
        ),
        student(
            "2",
            "Jane Smith",
            vec![
                report("Mathematics", 95.0, 16, 16, Performance::Excellent),
                report("Physics", 90.0, 15, 15, Performance::Excellent),
            ],
        ),
        student(
            "3",
            "Mike Johnson",
            vec![
                report("Mathematics", 75.0, 12, 16, Performance::Average),
                report("Physics", 68.0, 11, 15, Performance::NeedsImprovement),
            ],
        ),
    ]
}

fn excerpt(title: &str, subject: &str, date: NaiveDate) -> WorkExcerpt {
    WorkExcerpt {
        title: title.into(),
        subject: subject.into(),
        date,
    }
}

fn student(id: &str, name: &str, subjects: Vec<SubjectReport>) -> Student {
    Student {
        id: id.into(),
        name: name.into(),
        subjects,
    }
}

fn report(
    subject: &str,
    test_average: f64,
    assignments_completed: u32,
    total_assignments: u32,
    performance: Performance,
) -> SubjectReport {
    SubjectReport {
        subject: subject.into(),
        test_average,
        assignments_completed,
        total_assignments,
        performance,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_load_builtin_roster() {
        let roster = load_builtin_roster();

        assert_eq!(roster.len(), 3);
        for student in &roster {
            assert!(!student.id.is_empty());
            assert!(!student.name.is_empty());
            assert_eq!(student.subjects.len(), 2);
        }

        let averages: Vec<f64> = roster
            .iter()
            .flat_map(|s| s.subjects.iter().map(|r| r.test_average))
            .collect();
        assert_eq!(averages, vec![88.0, 82.0, 95.0, 90.0, 75.0, 68.0]);
    }

    #[test]
    fn test_roster_ids_are_unique() {
        let roster = load_builtin_roster();
        let ids: HashSet<&str> = roster.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids.len(), roster.len());
    }

    #[test]
    fn test_builtin_coursework_kinds() {
        let assignments = load_builtin_assignments();
        let tests = load_builtin_tests();

        assert!(assignments.iter().all(|a| a.kind == WorkKind::Assignment));
        assert!(tests.iter().all(|t| t.kind == WorkKind::Test));

        assert!(assignments[0].is_checked);
        assert!(!tests[0].is_checked);
    }

    #[test]
    fn test_builtin_submissions() {
        let assignment = &load_builtin_assignments()[0];

        assert_eq!(assignment.submissions.len(), 3);
        let missing: Vec<&str> = assignment
            .submissions
            .iter()
            .filter(|s| !s.submitted)
            .map(|s| s.student_name.as_str())
            .collect();
        assert_eq!(missing, vec!["Mike Johnson"]);
    }

    #[test]
    fn test_dashboard_excerpts() {
        assert_eq!(load_builtin_timetable().len(), 3);
        assert_eq!(recent_assignments()[0].date, ymd(2024, 3, 20));
        assert_eq!(recent_tests()[1].title, "Chapter Test");
        assert_eq!(class_overview().test_participation, 95);
    }
}
