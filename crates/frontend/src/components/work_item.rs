//! Coursework list item component.

use core_types::{Coursework, WorkKind};
use yew::prelude::*;

/// Properties for WorkItem component.
#[derive(Properties, PartialEq)]
pub struct WorkItemProps {
    pub work: Coursework,
    /// Fired by the check button
    pub on_toggle: Callback<(WorkKind, String)>,
    /// Fired by a click anywhere else on the row
    pub on_select: Callback<(WorkKind, String)>,
}

/// Coursework list item component.
#[function_component(WorkItem)]
pub fn work_item(props: &WorkItemProps) -> Html {
    let work = &props.work;
    let key = (work.kind, work.id.clone());

    let onclick = {
        let on_select = props.on_select.clone();
        let key = key.clone();
        Callback::from(move |_: MouseEvent| on_select.emit(key.clone()))
    };

    let on_check = {
        let on_toggle = props.on_toggle.clone();
        Callback::from(move |e: MouseEvent| {
            // Keep the row's click handler from opening the modal
            e.stop_propagation();
            on_toggle.emit(key.clone());
        })
    };

    let check_class = if work.is_checked {
        "check-toggle checked"
    } else {
        "check-toggle"
    };

    html! {
        <div class="task-item" {onclick}>
            <button class={check_class} onclick={on_check}>
                { if work.is_checked { "\u{2714}" } else { "\u{25CB}" } }
            </button>
            <div class="task-info">
                <div class="task-title">{ &work.title }</div>
                <div class="task-description">{ work.subtitle() }</div>
            </div>
        </div>
    }
}
