use chrono::{NaiveDate, NaiveTime};
use tasker_shared::{TaskDto, TaskPatch};
use yew::{Callback, Html, Properties, SubmitEvent, TargetCast, function_component, html, use_state};

use crate::components::{Alert, AlertKind};

#[derive(Properties, PartialEq)]
pub struct TaskRowProps {
    pub task: TaskDto,
    pub editing: bool,
    pub on_begin_edit: Callback<u64>,
    pub on_cancel_edit: Callback<()>,
    pub on_save: Callback<(u64, TaskPatch)>,
    pub on_complete: Callback<u64>,
    pub on_delete: Callback<u64>,
}

#[function_component(TaskRow)]
pub fn task_row(props: &TaskRowProps) -> Html {
    if props.editing {
        return html! {
            <TaskRowEdit
                task={props.task.clone()}
                on_save={props.on_save.clone()}
                on_cancel={props.on_cancel_edit.clone()}
            />
        };
    }

    let id = props.task.id;
    let on_begin_edit = props.on_begin_edit.clone();
    let on_complete = props.on_complete.clone();
    let on_delete = props.on_delete.clone();

    html! {
        <div class="row task">
            <div class="task-main">
                <div class="task-name">{ &props.task.task_name }</div>
                <div class="task-meta">
                    {
                        format!(
                            "{} at {} | {} min | Priority {}",
                            props.task.date.format("%Y-%m-%d"),
                            props.task.time.format("%H:%M"),
                            props.task.duration,
                            props.task.priority
                        )
                    }
                    {
                        if props.task.reminder_sent {
                            html! { <span class="badge">{ "reminder sent" }</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>
                {
                    if props.task.notes.is_empty() {
                        html! {}
                    } else {
                        html! { <div class="task-notes">{ format!("Notes: {}", props.task.notes) }</div> }
                    }
                }
            </div>
            <div class="actions">
                <button class="btn" onclick={move |_| on_begin_edit.emit(id)}>{ "Edit" }</button>
                <button class="btn ok" onclick={move |_| on_complete.emit(id)}>{ "Complete" }</button>
                <button class="btn danger" onclick={move |_| on_delete.emit(id)}>{ "Delete" }</button>
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct TaskRowEditProps {
    task: TaskDto,
    on_save: Callback<(u64, TaskPatch)>,
    on_cancel: Callback<()>,
}

fn build_patch(
    task: &TaskDto,
    name: &str,
    date: &str,
    time: &str,
    priority: &str,
) -> Result<TaskPatch, String> {
    let name = name.trim();
    if name.is_empty() {
        return Err("Task name is required".to_string());
    }
    let date = NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| "Pick a valid due date".to_string())?;
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|_| "Pick a valid time".to_string())?;
    let priority: u8 = priority
        .parse()
        .ok()
        .filter(|value| (1..=5).contains(value))
        .ok_or_else(|| "Priority must be between 1 and 5".to_string())?;

    // Only the fields that actually changed go over the wire.
    let mut patch = TaskPatch::default();
    if name != task.task_name {
        patch.task_name = Some(name.to_string());
    }
    if date != task.date {
        patch.date = Some(date);
    }
    if time != task.time {
        patch.time = Some(time);
    }
    if priority != task.priority {
        patch.priority = Some(priority);
    }
    Ok(patch)
}

#[function_component(TaskRowEdit)]
fn task_row_edit(props: &TaskRowEditProps) -> Html {
    let name = use_state(|| props.task.task_name.clone());
    let date = use_state(|| props.task.date.format("%Y-%m-%d").to_string());
    let time = use_state(|| props.task.time.format("%H:%M").to_string());
    let priority = use_state(|| props.task.priority.to_string());
    let error = use_state(String::new);

    let onsubmit = {
        let task = props.task.clone();
        let name = name.clone();
        let date = date.clone();
        let time = time.clone();
        let priority = priority.clone();
        let error = error.clone();
        let on_save = props.on_save.clone();
        let on_cancel = props.on_cancel.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            match build_patch(&task, &name, &date, &time, &priority) {
                Ok(patch) if patch.is_empty() => on_cancel.emit(()),
                Ok(patch) => on_save.emit((task.id, patch)),
                Err(message) => error.set(message),
            }
        })
    };

    let bind = |state: &yew::UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: yew::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };
    let on_cancel = props.on_cancel.clone();

    html! {
        <form class="row task editing" {onsubmit}>
            <input value={(*name).clone()} oninput={bind(&name)} required={true} />
            <input type="date" value={(*date).clone()} oninput={bind(&date)} required={true} />
            <input type="time" value={(*time).clone()} oninput={bind(&time)} required={true} />
            <input type="number" min="1" max="5" value={(*priority).clone()} oninput={bind(&priority)} required={true} />
            <div class="actions">
                <button type="submit" class="btn primary">{ "Save" }</button>
                <button type="button" class="btn" onclick={move |_| on_cancel.emit(())}>{ "Cancel" }</button>
            </div>
            <Alert kind={AlertKind::Error} text={(*error).clone()} />
        </form>
    }
}
