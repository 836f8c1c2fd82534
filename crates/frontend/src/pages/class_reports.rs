//! Class reports page component.

use reports::{ClassSummary, ExpandedStudents};
use yew::prelude::*;

use crate::components::{StatCard, StudentReportCard, percent_label};

/// Reports page component.
#[function_component(ReportsPage)]
pub fn reports_page() -> Html {
    let roster = use_state(fixtures::load_builtin_roster);
    let expanded = use_state(ExpandedStudents::new);

    let summary = use_memo((*roster).clone(), |students| {
        ClassSummary::from_students(students)
    });

    let on_toggle = {
        let expanded = expanded.clone();
        Callback::from(move |student_id: String| {
            let mut next = (*expanded).clone();
            next.toggle(&student_id);
            expanded.set(next);
        })
    };

    html! {
        <div class="page">
            <h1>{"Class Reports"}</h1>

            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{"Overall Class Performance"}</h2>
                </div>
                <div class="stats-grid">
                    <StatCard
                        value={percent_label(summary.average_test_score)}
                        label={"Average Test Score"}
                        tone={"blue"}
                    />
                    <StatCard
                        value={percent_label(summary.assignment_completion_rate)}
                        label={"Assignment Completion"}
                        tone={"green"}
                    />
                    <StatCard
                        value={summary.total_students.to_string()}
                        label={"Total Students"}
                        tone={"purple"}
                    />
                </div>

                <h3>{"Performance Distribution"}</h3>
                <div class="distribution-grid">
                    { for summary.performance_summary.iter().map(|entry| html! {
                        <div class={classes!("distribution-cell", entry.performance.css_class())}>
                            <div class="distribution-label">{ entry.performance.label() }</div>
                            <div class="distribution-count">{ entry.count.to_string() }</div>
                        </div>
                    })}
                </div>
            </div>

            <h2>{"Individual Student Reports"}</h2>
            <div class="report-list">
                { for roster.iter().map(|student| html! {
                    <StudentReportCard
                        key={student.id.clone()}
                        student={student.clone()}
                        expanded={expanded.is_expanded(&student.id)}
                        on_toggle={on_toggle.clone()}
                    />
                })}
            </div>
        </div>
    }
}
