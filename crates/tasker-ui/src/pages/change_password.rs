use tasker_shared::ResetPasswordRequest;
use yew::{Callback, Html, SubmitEvent, TargetCast, function_component, html, use_state};

use crate::api;
use crate::components::{Alert, AlertKind};

#[function_component(ChangePasswordPage)]
pub fn change_password_page() -> Html {
    let old_password = use_state(String::new);
    let new_password = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(String::new);
    let submitting = use_state(|| false);

    let onsubmit = {
        let old_password = old_password.clone();
        let new_password = new_password.clone();
        let message = message.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            let body = ResetPasswordRequest {
                old_password: (*old_password).clone(),
                new_password: (*new_password).clone(),
            };
            let old_password = old_password.clone();
            let new_password = new_password.clone();
            let message = message.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            submitting.set(true);
            message.set(String::new());
            error.set(String::new());
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_unit("/reset_password", &body).await {
                    Ok(()) => {
                        message.set("Password successfully changed!".to_string());
                        old_password.set(String::new());
                        new_password.set(String::new());
                    }
                    Err(reason) => {
                        tracing::warn!(reason = %reason, "password change failed");
                        error.set(if reason.is_empty() {
                            "Update failed".to_string()
                        } else {
                            reason
                        });
                    }
                }
                submitting.set(false);
            });
        })
    };

    let bind = |state: &yew::UseStateHandle<String>| {
        let state = state.clone();
        Callback::from(move |e: yew::InputEvent| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            state.set(input.value());
        })
    };

    html! {
        <div class="page narrow">
            <form class="panel form" {onsubmit}>
                <div class="header">{ "Change Password" }</div>
                <p class="muted">{ "Create a new secure password for your account" }</p>
                <label>
                    { "Current Password" }
                    <input
                        type="password"
                        value={(*old_password).clone()}
                        oninput={bind(&old_password)}
                        required={true}
                    />
                </label>
                <label>
                    { "New Password" }
                    <input
                        type="password"
                        value={(*new_password).clone()}
                        oninput={bind(&new_password)}
                        required={true}
                    />
                </label>
                <button type="submit" class="btn primary" disabled={*submitting}>
                    { if *submitting { "Updating…" } else { "Update Password" } }
                </button>
                <Alert kind={AlertKind::Success} text={(*message).clone()} />
                <Alert kind={AlertKind::Error} text={(*error).clone()} />
            </form>
        </div>
    }
}
