use tasker_shared::ForgotPasswordRequest;
use yew::{Callback, Html, SubmitEvent, TargetCast, function_component, html, use_state};

use crate::api;
use crate::components::{Alert, AlertKind};

#[function_component(ForgotPasswordPage)]
pub fn forgot_password_page() -> Html {
    let username = use_state(String::new);
    let email = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(String::new);
    let submitting = use_state(|| false);

    let onsubmit = {
        let username = username.clone();
        let email = email.clone();
        let message = message.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            let body = ForgotPasswordRequest {
                username: (*username).clone(),
                email: (*email).clone(),
            };
            let username = username.clone();
            let email = email.clone();
            let message = message.clone();
            let error = error.clone();
            let submitting = submitting.clone();

            submitting.set(true);
            message.set(String::new());
            error.set(String::new());
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_unit("/forgot_password", &body).await {
                    Ok(()) => {
                        message.set(
                            "Password reset email sent. Please check your inbox!".to_string(),
                        );
                        username.set(String::new());
                        email.set(String::new());
                    }
                    Err(reason) => {
                        tracing::warn!(reason = %reason, "password reset request failed");
                        error.set(if reason.is_empty() {
                            "Failed to send reset email".to_string()
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
                <div class="header">{ "Forgot Password" }</div>
                <p class="muted">
                    { "Enter your username and email to receive a password reset link" }
                </p>
                <label>
                    { "Username" }
                    <input value={(*username).clone()} oninput={bind(&username)} required={true} />
                </label>
                <label>
                    { "Email" }
                    <input type="email" value={(*email).clone()} oninput={bind(&email)} required={true} />
                </label>
                <button type="submit" class="btn primary" disabled={*submitting}>
                    { if *submitting { "Sending…" } else { "Send Reset Link" } }
                </button>
                <Alert kind={AlertKind::Success} text={(*message).clone()} />
                <Alert kind={AlertKind::Error} text={(*error).clone()} />
            </form>
        </div>
    }
}
