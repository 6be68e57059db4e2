use tasker_shared::{TaskDto, completed_tasks};
use yew::{Html, function_component, html, use_effect_with, use_state};

use crate::api;
use crate::components::{Alert, AlertKind};

#[function_component(CompletedPage)]
pub fn completed_page() -> Html {
    let tasks = use_state(Vec::<TaskDto>::new);
    let error = use_state(String::new);

    {
        let tasks = tasks.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::get_json::<Vec<TaskDto>>("/tasks").await {
                    Ok(list) => tasks.set(completed_tasks(&list)),
                    Err(message) => {
                        tracing::error!(message = %message, "completed list load failed");
                        error.set("Failed to load completed tasks".to_string());
                    }
                }
            });
            || ()
        });
    }

    html! {
        <div class="page">
            <h2>{ "Completed Tasks" }</h2>
            <Alert kind={AlertKind::Error} text={(*error).clone()} />
            <ul class="panel list">
                {
                    if tasks.is_empty() {
                        html! { <li class="muted">{ "No completed tasks!" }</li> }
                    } else {
                        html! {
                            <>
                                {
                                    for tasks.iter().map(|task| html! {
                                        <li>
                                            {
                                                format!(
                                                    "{} | {} {}",
                                                    task.task_name,
                                                    task.date.format("%Y-%m-%d"),
                                                    task.time.format("%H:%M")
                                                )
                                            }
                                        </li>
                                    })
                                }
                            </>
                        }
                    }
                }
            </ul>
        </div>
    }
}
