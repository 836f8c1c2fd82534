//! Submissions overlay for one assignment or test.

use core_types::Coursework;
use yew::prelude::*;

/// Properties for SubmissionsModal component.
#[derive(Properties, PartialEq)]
pub struct SubmissionsModalProps {
    pub work: Coursework,
    pub on_close: Callback<()>,
}

/// Submissions overlay component.
#[function_component(SubmissionsModal)]
pub fn submissions_modal(props: &SubmissionsModalProps) -> Html {
    let on_close = props.on_close.reform(|_: MouseEvent| ());

    html! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="card-header">
                    <h2 class="card-title">{ format!("{} - Submissions", props.work.title) }</h2>
                    <button class="btn btn-secondary" onclick={on_close}>{"Close"}</button>
                </div>
                <div class="submission-list">
                    { for props.work.submissions.iter().map(|submission| html! {
                        <div class="submission-row" key={submission.student_id.clone()}>
                            <div>
                                <div class="task-title">{ &submission.student_name }</div>
                                <div class="task-description">{ submission.status_label() }</div>
                            </div>
                            if let Some(score) = submission.visible_score() {
                                <div class="submission-score">{ format!("Score: {score}") }</div>
                            }
                        </div>
                    })}
                </div>
            </div>
        </div>
    }
}
