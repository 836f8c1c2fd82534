//! Class report aggregation.
//!
//! This crate provides:
//! - ClassSummary: class-wide averages and the performance histogram
//! - ExpandedStudents: per-student expand/collapse state for the report list

use core_types::{Performance, Student, rounded_percent};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Number of subject reports in one performance category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PerformanceCount {
    pub performance: Performance,
    pub count: u32,
}

/// Aggregated figures over a class roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassSummary {
    /// Mean of all subject test averages, rounded (None without reports)
    pub average_test_score: Option<u32>,
    /// Completed / total assignments in percent, rounded (None without assignments)
    pub assignment_completion_rate: Option<u32>,
    /// Roster length
    pub total_students: u32,
    /// One entry per category, in `Performance::ALL` order
    pub performance_summary: Vec<PerformanceCount>,
}

impl ClassSummary {
    /// Compute the summary from a roster.
    pub fn from_students(students: &[Student]) -> Self {
        let mut total_test_score = 0.0;
        let mut total_completed: u64 = 0;
        let mut total_assignments: u64 = 0;
        let mut total_subjects: u32 = 0;
        let mut counts = [0u32; 4];

        for report in students.iter().flat_map(|s| &s.subjects) {
            total_test_score += report.test_average;
            total_completed += u64::from(report.assignments_completed);
            total_assignments += u64::from(report.total_assignments);
            total_subjects += 1;
            counts[category_index(report.performance)] += 1;
        }

        let average_test_score = if total_subjects > 0 {
            let mean = total_test_score / f64::from(total_subjects);
            Some(mean.round() as u32)
        } else {
            None
        };

        let performance_summary = Performance::ALL
            .iter()
            .zip(counts)
            .map(|(&performance, count)| PerformanceCount { performance, count })
            .collect();

        Self {
            average_test_score,
            assignment_completion_rate: rounded_percent(total_completed, total_assignments),
            total_students: students.len() as u32,
            performance_summary,
        }
    }

    /// Count for a single category.
    pub fn count_for(&self, performance: Performance) -> u32 {
        self.performance_summary
            .iter()
            .find(|c| c.performance == performance)
            .map(|c| c.count)
            .unwrap_or(0)
    }
}

fn category_index(performance: Performance) -> usize {
    match performance {
        Performance::Excellent => 0,
        Performance::Good => 1,
        Performance::Average => 2,
        Performance::NeedsImprovement => 3,
    }
}

/// Which students have their subject detail expanded.
///
/// Every student starts collapsed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpandedStudents {
    expanded: HashSet<String>,
}

impl ExpandedStudents {
    /// Create with every student collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip one student's state. Returns the new expanded flag.
    pub fn toggle(&mut self, student_id: &str) -> bool {
        if self.expanded.remove(student_id) {
            false
        } else {
            self.expanded.insert(student_id.to_string());
            true
        }
    }

    /// Whether the student's detail is shown.
    pub fn is_expanded(&self, student_id: &str) -> bool {
        self.expanded.contains(student_id)
    }
}
