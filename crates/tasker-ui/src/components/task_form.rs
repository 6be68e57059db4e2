use chrono::{NaiveDate, NaiveTime};
use tasker_shared::{DEFAULT_DURATION_MINUTES, DEFAULT_PRIORITY, TaskCreate};
use yew::{Callback, Html, Properties, SubmitEvent, TargetCast, function_component, html, use_state};

use crate::api;
use crate::components::{Alert, AlertKind};

#[derive(Properties, PartialEq)]
pub struct TaskFormProps {
    pub on_saved: Callback<()>,
    #[prop_or_default]
    pub on_cancel: Option<Callback<()>>,
}

fn parse_time(value: &str) -> Option<NaiveTime> {
    // <input type="time"> yields HH:MM, or HH:MM:SS with seconds enabled.
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .ok()
}

fn build_create(
    task_name: &str,
    date: &str,
    time: &str,
    duration: &str,
    priority: &str,
    notes: &str,
) -> Result<TaskCreate, String> {
    let task_name = task_name.trim();
    if task_name.is_empty() {
        return Err("Task name is required".to_string());
    }
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| "Pick a valid due date".to_string())?;
    let time = parse_time(time).ok_or_else(|| "Pick a valid time".to_string())?;
    let duration: u32 = duration
        .parse()
        .ok()
        .filter(|minutes| *minutes > 0)
        .ok_or_else(|| "Duration must be a positive number of minutes".to_string())?;
    let priority: u8 = priority
        .parse()
        .ok()
        .filter(|value| (1..=5).contains(value))
        .ok_or_else(|| "Priority must be between 1 and 5".to_string())?;

    let mut create = TaskCreate::new(task_name.to_string(), date, time);
    create.duration = duration;
    create.priority = priority;
    create.notes = notes.trim().to_string();
    Ok(create)
}

#[function_component(TaskForm)]
pub fn task_form(props: &TaskFormProps) -> Html {
    let task_name = use_state(String::new);
    let date = use_state(String::new);
    let time = use_state(String::new);
    let duration = use_state(|| DEFAULT_DURATION_MINUTES.to_string());
    let priority = use_state(|| DEFAULT_PRIORITY.to_string());
    let notes = use_state(String::new);
    let error = use_state(String::new);
    let submitting = use_state(|| false);

    let onsubmit = {
        let task_name = task_name.clone();
        let date = date.clone();
        let time = time.clone();
        let duration = duration.clone();
        let priority = priority.clone();
        let notes = notes.clone();
        let error = error.clone();
        let submitting = submitting.clone();
        let on_saved = props.on_saved.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            let create = match build_create(&task_name, &date, &time, &duration, &priority, &notes)
            {
                Ok(create) => create,
                Err(message) => {
                    error.set(message);
                    return;
                }
            };

            let task_name = task_name.clone();
            let date = date.clone();
            let time = time.clone();
            let duration = duration.clone();
            let priority = priority.clone();
            let notes = notes.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let on_saved = on_saved.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_unit("/task", &create).await {
                    Ok(()) => {
                        tracing::info!(task_name = %create.task_name, "task created");
                        task_name.set(String::new());
                        date.set(String::new());
                        time.set(String::new());
                        duration.set(DEFAULT_DURATION_MINUTES.to_string());
                        priority.set(DEFAULT_PRIORITY.to_string());
                        notes.set(String::new());
                        error.set(String::new());
                        on_saved.emit(());
                    }
                    Err(message) => {
                        tracing::error!(message = %message, "task create failed");
                        error.set("Failed to add task".to_string());
                    }
                }
                submitting.set(false);
            });
        })
    };

    let bind_input = |state: &yew::UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: yew::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };
    let bind_notes = {
        let notes = notes.clone();
        Callback::from(move |e: yew::InputEvent| {
            let input: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
            notes.set(input.value());
        })
    };

    let cancel = props.on_cancel.clone().map(|on_cancel| {
        html! {
            <button
                type="button"
                class="btn"
                onclick={move |_| on_cancel.emit(())}
            >
                { "Cancel" }
            </button>
        }
    });

    html! {
        <form class="panel form" {onsubmit}>
            <div class="header">{ "Add New Task" }</div>
            <label>
                { "Task Name" }
                <input value={(*task_name).clone()} oninput={bind_input(&task_name)} required={true} />
            </label>
            <div class="field-row">
                <label>
                    { "Due Date" }
                    <input type="date" value={(*date).clone()} oninput={bind_input(&date)} required={true} />
                </label>
                <label>
                    { "Time" }
                    <input type="time" value={(*time).clone()} oninput={bind_input(&time)} required={true} />
                </label>
            </div>
            <div class="field-row">
                <label>
                    { "Duration (minutes)" }
                    <input type="number" min="1" value={(*duration).clone()} oninput={bind_input(&duration)} required={true} />
                </label>
                <label>
                    { "Priority (1 = highest)" }
                    <input type="number" min="1" max="5" value={(*priority).clone()} oninput={bind_input(&priority)} required={true} />
                </label>
            </div>
            <label>
                { "Notes" }
                <textarea rows="2" value={(*notes).clone()} oninput={bind_notes} />
            </label>
            <div class="actions">
                { cancel }
                <button type="submit" class="btn primary" disabled={*submitting}>
                    { if *submitting { "Adding…" } else { "Add Task" } }
                </button>
            </div>
            <Alert kind={AlertKind::Error} text={(*error).clone()} />
        </form>
    }
}
