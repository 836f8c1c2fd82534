//! Dashboard page component.

use core_types::{INPUT_DATE_FORMAT, WorkExcerpt};
use yew::prelude::*;

use crate::components::{StatCard, TodoListWidget};
use crate::config::AppConfig;

/// Dashboard page component.
#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let overview = fixtures::class_overview();
    let timetable = fixtures::load_builtin_timetable();

    html! {
        <div class="page">
            <div class="page-header">
                <div>
                    <h1>{ format!("Hi, {}", config.teacher_name) }</h1>
                    <p class="text-secondary">{ &config.welcome_message }</p>
                </div>
                <div class="header-actions">
                    <button class="btn btn-secondary">{"\u{1F514}"}</button>
                    <button class="btn btn-primary">{"Login"}</button>
                </div>
            </div>

            <div class="dashboard-grid">
                <div class="dashboard-main">
                    <div class="card">
                        <div class="card-header">
                            <h2 class="card-title">{"Class Performance Overview"}</h2>
                            <button class="link-button">{"View All"}</button>
                        </div>
                        <div class="stats-grid">
                            <StatCard
                                value={format!("{}%", overview.average_score)}
                                label={"Average Score"}
                                tone={"blue"}
                            />
                            <StatCard
                                value={format!("{}%", overview.assignments_completed)}
                                label={"Assignments Completed"}
                                tone={"blue"}
                            />
                            <StatCard
                                value={format!("{}%", overview.test_participation)}
                                label={"Test Participation"}
                                tone={"blue"}
                            />
                        </div>
                    </div>

                    <div class="two-column">
                        { excerpt_card("Recent Assignments", &fixtures::recent_assignments()) }
                        { excerpt_card("Recent Tests", &fixtures::recent_tests()) }
                    </div>
                </div>

                <div class="dashboard-side">
                    <div class="card">
                        <div class="card-header">
                            <h2 class="card-title">{"Today's Timetable"}</h2>
                        </div>
                        <div class="task-list">
                            { for timetable.iter().map(|entry| html! {
                                <div class="task-item static">
                                    <div class="task-info">
                                        <div class="task-title">{ &entry.subject }</div>
                                        <div class="task-description">{ entry.slot_label() }</div>
                                    </div>
                                </div>
                            })}
                        </div>
                    </div>

                    <TodoListWidget />
                </div>
            </div>
        </div>
    }
}

fn excerpt_card(title: &str, items: &[WorkExcerpt]) -> Html {
    html! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">{ title.to_string() }</h2>
                <button class="link-button">{"Create New"}</button>
            </div>
            <div class="task-list">
                { for items.iter().map(|item| html! {
                    <div class="task-item static">
                        <div class="task-info">
                            <div class="task-title">{ &item.title }</div>
                            <div class="task-description">{ &item.subject }</div>
                        </div>
                        <div class="task-date">
                            { item.date.format(INPUT_DATE_FORMAT).to_string() }
                        </div>
                    </div>
                })}
            </div>
        </div>
    }
}
