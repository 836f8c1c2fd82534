//! Dashboard to-do list widget.

use chrono::{Local, NaiveDate};
use planner::TodoList;
use yew::prelude::*;

use crate::config::AppConfig;

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// To-do list widget component.
#[function_component(TodoListWidget)]
pub fn todo_list_widget() -> Html {
    let config = use_context::<AppConfig>().unwrap_or_default();
    let todos = use_state(TodoList::new);
    let new_title = use_state(String::new);
    let due_date = use_state(String::new);

    let on_title_input = {
        let new_title = new_title.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            new_title.set(input.value());
        })
    };

    let on_date_input = {
        let due_date = due_date.clone();
        Callback::from(move |e: InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            due_date.set(input.value());
        })
    };

    let on_add = {
        let todos = todos.clone();
        let new_title = new_title.clone();
        let due_date = due_date.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*todos).clone();
            let added = next
                .add(new_title.as_str(), Some(due_date.as_str()), today())
                .map(|task| task.id.clone());
            match added {
                Ok(id) => {
                    log::debug!("Added to-do {}", id);
                    todos.set(next);
                    new_title.set(String::new());
                    due_date.set(String::new());
                }
                Err(e) => log::debug!("To-do not added: {}", e),
            }
        })
    };

    let on_toggle = {
        let todos = todos.clone();
        Callback::from(move |id: String| {
            let mut next = (*todos).clone();
            match next.toggle(&id) {
                Ok(_) => todos.set(next),
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    let on_delete = {
        let todos = todos.clone();
        Callback::from(move |id: String| {
            let mut next = (*todos).clone();
            match next.delete(&id) {
                Ok(_) => todos.set(next),
                Err(e) => log::warn!("{}", e),
            }
        })
    };

    html! {
        <div class="card">
            <div class="card-header">
                <h2 class="card-title">{"To-Do List"}</h2>
                <span class="text-secondary">{ &config.todo_calendar_label }</span>
            </div>

            <div class="todo-form">
                <input
                    type="text"
                    class="search-input"
                    placeholder="Add new task"
                    value={(*new_title).clone()}
                    oninput={on_title_input}
                />
                <input
                    type="date"
                    class="search-input"
                    value={(*due_date).clone()}
                    oninput={on_date_input}
                />
                <button class="btn btn-primary" onclick={on_add}>{"+"}</button>
            </div>

            <div class="task-list">
                { for todos.tasks().iter().map(|task| {
                    let id = task.id.clone();
                    let toggle = on_toggle.reform({
                        let id = id.clone();
                        move |_: MouseEvent| id.clone()
                    });
                    let delete = on_delete.reform(move |_: MouseEvent| id.clone());
                    let title_class = if task.completed { "task-title done" } else { "task-title" };

                    html! {
                        <div class="task-item" key={task.id.clone()}>
                            <button
                                class={if task.completed { "check-toggle checked" } else { "check-toggle" }}
                                onclick={toggle}
                            >
                                { if task.completed { "\u{2714}" } else { "\u{25CB}" } }
                            </button>
                            <div class="task-info">
                                <div class={title_class}>{ &task.title }</div>
                                <div class="task-description">{ task.due_label() }</div>
                            </div>
                            <button class="icon-button" onclick={delete}>{"\u{2715}"}</button>
                        </div>
                    }
                })}
            </div>
        </div>
    }
}
