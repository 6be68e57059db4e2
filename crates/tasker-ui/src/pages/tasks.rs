use tasker_shared::{TaskDto, TaskPatch, active_tasks};
use yew::{Callback, Html, function_component, html, use_effect_with, use_state};

use crate::api;
use crate::components::{Alert, AlertKind, TaskForm, TaskRow};

#[function_component(TasksPage)]
pub fn tasks_page() -> Html {
    let tasks = use_state(Vec::<TaskDto>::new);
    let error = use_state(String::new);
    let editing = use_state(|| None::<u64>);
    let refresh_tick = use_state(|| 0_u64);

    {
        let tasks = tasks.clone();
        let error = error.clone();
        use_effect_with(*refresh_tick, move |tick| {
            let tick = *tick;
            wasm_bindgen_futures::spawn_local(async move {
                tracing::info!(tick, "refreshing task list");
                match api::get_json::<Vec<TaskDto>>("/tasks").await {
                    Ok(list) => {
                        tasks.set(active_tasks(&list));
                        error.set(String::new());
                    }
                    Err(message) => {
                        tracing::error!(message = %message, "task list load failed");
                        error.set("Failed to load tasks".to_string());
                    }
                }
            });
            || ()
        });
    }

    let on_created = {
        let refresh_tick = refresh_tick.clone();
        Callback::from(move |()| refresh_tick.set(*refresh_tick + 1))
    };

    let on_begin_edit = {
        let editing = editing.clone();
        Callback::from(move |id: u64| editing.set(Some(id)))
    };

    let on_cancel_edit = {
        let editing = editing.clone();
        Callback::from(move |()| editing.set(None))
    };

    let on_save = {
        let tasks = tasks.clone();
        let editing = editing.clone();
        let error = error.clone();
        Callback::from(move |(id, patch): (u64, TaskPatch)| {
            let tasks = tasks.clone();
            let editing = editing.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::put_unit(&format!("/task/{id}"), &patch).await {
                    Ok(()) => {
                        let merged: Vec<TaskDto> = tasks
                            .iter()
                            .cloned()
                            .map(|mut task| {
                                if task.id == id {
                                    task.apply_patch(&patch);
                                }
                                task
                            })
                            .collect();
                        // A changed due date can move the row; re-sort.
                        tasks.set(active_tasks(&merged));
                        editing.set(None);
                        error.set(String::new());
                    }
                    Err(message) => {
                        // Stay in edit mode so the draft is not lost.
                        tracing::error!(message = %message, id, "task edit failed");
                        error.set("Failed to edit task.".to_string());
                    }
                }
            });
        })
    };

    let on_complete = {
        let tasks = tasks.clone();
        let error = error.clone();
        Callback::from(move |id: u64| {
            let tasks = tasks.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_empty(&format!("/task/{id}/complete")).await {
                    Ok(()) => {
                        let remaining: Vec<TaskDto> =
                            tasks.iter().filter(|t| t.id != id).cloned().collect();
                        tasks.set(remaining);
                        error.set(String::new());
                    }
                    Err(message) => {
                        tracing::error!(message = %message, id, "mark complete failed");
                        error.set("Failed to mark task completed.".to_string());
                    }
                }
            });
        })
    };

    let on_delete = {
        let tasks = tasks.clone();
        let error = error.clone();
        Callback::from(move |id: u64| {
            let tasks = tasks.clone();
            let error = error.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match api::delete(&format!("/task/{id}")).await {
                    Ok(()) => {
                        let remaining: Vec<TaskDto> =
                            tasks.iter().filter(|t| t.id != id).cloned().collect();
                        tasks.set(remaining);
                        error.set(String::new());
                    }
                    Err(message) => {
                        tracing::error!(message = %message, id, "task delete failed");
                        error.set("Failed to delete task.".to_string());
                    }
                }
            });
        })
    };

    html! {
        <div class="page">
            <h2>{ "Your Tasks" }</h2>
            <TaskForm on_saved={on_created} />
            <Alert kind={AlertKind::Error} text={(*error).clone()} />
            <div class="panel list">
                {
                    if tasks.is_empty() {
                        html! { <div class="muted">{ "Nothing scheduled. Add a task above." }</div> }
                    } else {
                        html! {
                            <>
                                {
                                    for tasks.iter().cloned().map(|task| {
                                        let is_editing = *editing == Some(task.id);
                                        html! {
                                            <TaskRow
                                                task={task}
                                                editing={is_editing}
                                                on_begin_edit={on_begin_edit.clone()}
                                                on_cancel_edit={on_cancel_edit.clone()}
                                                on_save={on_save.clone()}
                                                on_complete={on_complete.clone()}
                                                on_delete={on_delete.clone()}
                                            />
                                        }
                                    })
                                }
                            </>
                        }
                    }
                }
            </div>
        </div>
    }
}
