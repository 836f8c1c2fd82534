//! Tasks page component.

use core_types::WorkKind;
use planner::TaskBoard;
use yew::prelude::*;

use crate::components::{SubmissionsModal, WorkItem};

/// Tasks page component.
#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
    let board = use_state(|| {
        TaskBoard::new(
            fixtures::load_builtin_assignments(),
            fixtures::load_builtin_tests(),
        )
    });

    let on_toggle = {
        let board = board.clone();
        Callback::from(move |(kind, id): (WorkKind, String)| {
            let mut next = (*board).clone();
            match next.toggle_check(kind, &id) {
                Ok(_) => board.set(next),
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    let on_select = {
        let board = board.clone();
        Callback::from(move |(kind, id): (WorkKind, String)| {
            let mut next = (*board).clone();
            match next.open(kind, &id) {
                Ok(()) => board.set(next),
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    let on_close = {
        let board = board.clone();
        Callback::from(move |()| {
            let mut next = (*board).clone();
            next.close();
            board.set(next);
        })
    };

    let column = |title: &'static str, kind: WorkKind| {
        html! {
            <div class="card">
                <div class="card-header">
                    <h2 class="card-title">{ title }</h2>
                </div>
                <div class="task-list">
                    { for board.items(kind).iter().map(|work| html! {
                        <WorkItem
                            key={work.id.clone()}
                            work={work.clone()}
                            on_toggle={on_toggle.clone()}
                            on_select={on_select.clone()}
                        />
                    })}
                </div>
            </div>
        }
    };

    html! {
        <div class="page">
            <div class="page-header">
                <h1>{"Tasks"}</h1>
                // Placeholders: creating coursework is not wired up
                <div class="header-actions">
                    <button class="btn btn-primary">{"+ Create Assignment"}</button>
                    <button class="btn btn-success">{"+ Create Test"}</button>
                </div>
            </div>

            <div class="two-column">
                { column("Assignments", WorkKind::Assignment) }
                { column("Tests", WorkKind::Test) }
            </div>

            if let Some(work) = board.selected() {
                <SubmissionsModal work={work.clone()} {on_close} />
            }
        </div>
    }
}
