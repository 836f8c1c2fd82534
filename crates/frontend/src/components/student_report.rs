//! Expandable per-student report card.

use core_types::{Student, SubjectReport};
use yew::prelude::*;

use super::stat_card::percent_label;

/// Properties for StudentReportCard component.
#[derive(Properties, PartialEq)]
pub struct StudentReportCardProps {
    pub student: Student,
    pub expanded: bool,
    /// Receives the student id
    pub on_toggle: Callback<String>,
}

/// Student report card component.
#[function_component(StudentReportCard)]
pub fn student_report_card(props: &StudentReportCardProps) -> Html {
    let student = &props.student;
    let onclick = {
        let id = student.id.clone();
        props.on_toggle.reform(move |_: MouseEvent| id.clone())
    };
    let chevron = if props.expanded {
        "chevron open"
    } else {
        "chevron"
    };

    html! {
        <div class="card report-card">
            <button class="report-header" {onclick}>
                <h2 class="card-title">{ &student.name }</h2>
                <span class={chevron}>{"\u{25BE}"}</span>
            </button>

            if props.expanded {
                <div class="subject-grid">
                    { for student.subjects.iter().map(subject_panel) }
                </div>
            }
        </div>
    }
}

fn subject_panel(report: &SubjectReport) -> Html {
    html! {
        <div class="subject-panel">
            <div class="card-header">
                <h3>{ &report.subject }</h3>
                <span class={report.performance.css_class()}>
                    { report.performance.label() }
                </span>
            </div>
            <div class="metric-row">
                <span class="text-secondary">{"Test Average:"}</span>
                <span class="metric-value">{ format!("{}%", report.test_average) }</span>
            </div>
            <div class="metric-row">
                <span class="text-secondary">{"Assignments Completed:"}</span>
                <span class="metric-value">
                    { format!("{}/{}", report.assignments_completed, report.total_assignments) }
                </span>
            </div>
            <div class="metric-row">
                <span class="text-secondary">{"Completion Rate:"}</span>
                <span class="metric-value">{ percent_label(report.completion_rate()) }</span>
            </div>
        </div>
    }
}
