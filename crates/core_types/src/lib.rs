//! Core types for the class-desk dashboard.
//!
//! This crate defines the shared data structures used across
//! the fixtures, planner, reports, and frontend components.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Date format produced by `<input type="date">` and used in fixtures.
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Display format for to-do due dates (e.g. "Mar 20, 2024").
pub const DISPLAY_DATE_FORMAT: &str = "%b %-d, %Y";

/// A single to-do item owned by the task list widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Identifier, unique within its list
    pub id: String,
    /// Title as typed by the user
    pub title: String,
    /// Whether the item has been ticked off
    pub completed: bool,
    /// Due date
    pub due_date: NaiveDate,
}

impl Task {
    /// Create a new, not yet completed task.
    pub fn new(id: String, title: String, due_date: NaiveDate) -> Self {
        Self {
            id,
            title,
            completed: false,
            due_date,
        }
    }

    /// Flip the completed flag.
    pub fn toggle(&mut self) {
        self.completed = !self.completed;
    }

    /// Due date rendered for display.
    pub fn due_label(&self) -> String {
        self.due_date.format(DISPLAY_DATE_FORMAT).to_string()
    }
}

/// Kind of graded coursework.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkKind {
    /// Homework with a due date
    Assignment,
    /// Test sat on a date
    Test,
}

impl WorkKind {
    /// Caption shown in front of the item's date.
    pub fn date_caption(self) -> &'static str {
        match self {
            WorkKind::Assignment => "Due",
            WorkKind::Test => "Date",
        }
    }
}

/// A student's hand-in record for one piece of coursework.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StudentSubmission {
    pub student_id: String,
    pub student_name: String,
    pub submitted: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<u32>,
}

impl StudentSubmission {
    /// Create a submission that was handed in and scored.
    pub fn scored(student_id: &str, student_name: &str, score: u32) -> Self {
        Self {
            student_id: student_id.to_string(),
            student_name: student_name.to_string(),
            submitted: true,
            score: Some(score),
        }
    }

    /// Create a record for a student who has not handed in.
    pub fn missing(student_id: &str, student_name: &str) -> Self {
        Self {
            student_id: student_id.to_string(),
            student_name: student_name.to_string(),
            submitted: false,
            score: None,
        }
    }

    /// Human-readable submission status.
    pub fn status_label(&self) -> &'static str {
        if self.submitted {
            "Submitted"
        } else {
            "Not Submitted"
        }
    }

    /// Score to display, if any.
    ///
    /// Only submitted work with a nonzero score shows one.
    pub fn visible_score(&self) -> Option<u32> {
        match self.score {
            Some(score) if self.submitted && score > 0 => Some(score),
            _ => None,
        }
    }
}

/// An assignment or a test, with its per-student submissions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Coursework {
    pub id: String,
    pub kind: WorkKind,
    pub title: String,
    pub subject: String,
    /// Due date for assignments, sitting date for tests
    pub date: NaiveDate,
    /// Manually toggled marker, independent of submissions
    pub is_checked: bool,
    pub submissions: Vec<StudentSubmission>,
}

impl Coursework {
    /// Flip the checked marker.
    pub fn toggle_checked(&mut self) {
        self.is_checked = !self.is_checked;
    }

    /// Subtitle line, e.g. "Mathematics - Due: 2024-03-20".
    pub fn subtitle(&self) -> String {
        format!(
            "{} - {}: {}",
            self.subject,
            self.kind.date_caption(),
            self.date.format(INPUT_DATE_FORMAT)
        )
    }
}

/// Performance category assigned to a subject report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Performance {
    Excellent,
    Good,
    Average,
    #[serde(rename = "Needs Improvement")]
    NeedsImprovement,
}

impl Performance {
    /// All categories in display order.
    pub const ALL: [Performance; 4] = [
        Performance::Excellent,
        Performance::Good,
        Performance::Average,
        Performance::NeedsImprovement,
    ];

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            Performance::Excellent => "Excellent",
            Performance::Good => "Good",
            Performance::Average => "Average",
            Performance::NeedsImprovement => "Needs Improvement",
        }
    }

    /// CSS class carrying the category colour.
    pub fn css_class(self) -> &'static str {
        match self {
            Performance::Excellent => "performance excellent",
            Performance::Good => "performance good",
            Performance::Average => "performance average",
            Performance::NeedsImprovement => "performance needs-improvement",
        }
    }
}

/// Per-subject metrics for one student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectReport {
    pub subject: String,
    /// Mean test score, in percent
    pub test_average: f64,
    pub assignments_completed: u32,
    pub total_assignments: u32,
    pub performance: Performance,
}

impl SubjectReport {
    /// Share of assignments completed, rounded to a whole percent.
    ///
    /// Returns `None` when the subject has no assignments.
    pub fn completion_rate(&self) -> Option<u32> {
        rounded_percent(
            u64::from(self.assignments_completed),
            u64::from(self.total_assignments),
        )
    }
}

/// A student on the class roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    pub id: String,
    pub name: String,
    pub subjects: Vec<SubjectReport>,
}

/// One slot in the weekly timetable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimetableEntry {
    pub day: String,
    pub time: String,
    pub subject: String,
    /// Class group, e.g. "10-A"
    pub class_name: String,
}

impl TimetableEntry {
    /// Secondary line, e.g. "9:00 AM - 10-A".
    pub fn slot_label(&self) -> String {
        format!("{} - {}", self.time, self.class_name)
    }
}

/// A short reference to recent coursework on the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkExcerpt {
    pub title: String,
    pub subject: String,
    pub date: NaiveDate,
}

/// Headline figures for the dashboard overview card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassOverview {
    pub average_score: u32,
    pub assignments_completed: u32,
    pub test_participation: u32,
}

/// `round(100 * part / whole)`, with halves rounding up.
///
/// Returns `None` for an empty whole.
pub fn rounded_percent(part: u64, whole: u64) -> Option<u32> {
    if whole == 0 {
        return None;
    }
    let rounded = (200 * part + whole) / (2 * whole);
    u32::try_from(rounded).ok()
}

/// Parse a `YYYY-MM-DD` date as produced by a date input.
pub fn parse_input_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), INPUT_DATE_FORMAT).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn march(day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, day).unwrap()
    }

    fn create_test_report(completed: u32, total: u32) -> SubjectReport {
        SubjectReport {
            subject: "Mathematics".to_string(),
            test_average: 88.0,
            assignments_completed: completed,
            total_assignments: total,
            performance: Performance::Excellent,
        }
    }

    #[test]
    fn test_task_creation() {
        let task = Task::new("1".to_string(), "Buy pens".to_string(), march(20));

        assert_eq!(task.id, "1");
        assert_eq!(task.title, "Buy pens");
        assert!(!task.completed);
        assert_eq!(task.due_date, march(20));
    }

    #[test]
    fn test_task_toggle() {
        let mut task = Task::new("1".to_string(), "Buy pens".to_string(), march(20));

        task.toggle();
        assert!(task.completed);

        task.toggle();
        assert!(!task.completed);
    }

    #[test]
    fn test_task_due_label() {
        let task = Task::new("1".to_string(), "Mark essays".to_string(), march(5));
        assert_eq!(task.due_label(), "Mar 5, 2024");
    }

    #[test]
    fn test_work_kind_captions() {
        assert_eq!(WorkKind::Assignment.date_caption(), "Due");
        assert_eq!(WorkKind::Test.date_caption(), "Date");
    }

    #[test]
    fn test_coursework_subtitle_and_toggle() {
        let mut work = Coursework {
            id: "1".to_string(),
            kind: WorkKind::Test,
            title: "Mid-term Test".to_string(),
            subject: "Chemistry".to_string(),
            date: march(25),
            is_checked: false,
            submissions: vec![],
        };

        assert_eq!(work.subtitle(), "Chemistry - Date: 2024-03-25");

        work.toggle_checked();
        assert!(work.is_checked);
    }

    #[test]
    fn test_submission_visible_score() {
        assert_eq!(
            StudentSubmission::scored("1", "John Doe", 85).visible_score(),
            Some(85)
        );
        assert_eq!(
            StudentSubmission::missing("3", "Mike Johnson").visible_score(),
            None
        );

        // A zero score is not shown
        assert_eq!(
            StudentSubmission::scored("2", "Jane Smith", 0).visible_score(),
            None
        );

        // Nor is a score on work that was never handed in
        let mut odd = StudentSubmission::missing("4", "Ann Lee");
        odd.score = Some(70);
        assert_eq!(odd.visible_score(), None);
        assert_eq!(odd.status_label(), "Not Submitted");
    }

    #[test]
    fn test_performance_labels_and_order() {
        let labels: Vec<&str> = Performance::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(
            labels,
            vec!["Excellent", "Good", "Average", "Needs Improvement"]
        );
    }

    #[test]
    fn test_performance_serialization() {
        let json = serde_json::to_string(&Performance::NeedsImprovement).unwrap();
        assert_eq!(json, "\"Needs Improvement\"");

        let parsed: Performance = serde_json::from_str("\"Good\"").unwrap();
        assert_eq!(parsed, Performance::Good);
    }

    #[test]
    fn test_subject_completion_rate() {
        assert_eq!(create_test_report(15, 16).completion_rate(), Some(94));
        assert_eq!(create_test_report(12, 16).completion_rate(), Some(75));
        assert_eq!(create_test_report(0, 0).completion_rate(), None);
    }

    #[test]
    fn test_rounded_percent_rounds_half_up() {
        // 1/8 = 12.5%
        assert_eq!(rounded_percent(1, 8), Some(13));
        // 1/3 = 33.33%
        assert_eq!(rounded_percent(1, 3), Some(33));
        assert_eq!(rounded_percent(5, 0), None);
    }

    #[test]
    fn test_parse_input_date() {
        assert_eq!(parse_input_date("2024-03-20"), Some(march(20)));
        assert_eq!(parse_input_date(" 2024-03-20 "), Some(march(20)));
        assert_eq!(parse_input_date("20/03/2024"), None);
        assert_eq!(parse_input_date(""), None);
    }

    #[test]
    fn test_timetable_slot_label() {
        let entry = TimetableEntry {
            day: "Monday".to_string(),
            time: "9:00 AM".to_string(),
            subject: "Mathematics".to_string(),
            class_name: "10-A".to_string(),
        };
        assert_eq!(entry.slot_label(), "9:00 AM - 10-A");
    }
}
