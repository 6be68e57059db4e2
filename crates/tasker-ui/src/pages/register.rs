use tasker_shared::{SignupRequest, SignupResponse, validate_registration};
use yew::{Callback, Html, SubmitEvent, TargetCast, function_component, html, use_context, use_state};
use yew_router::prelude::use_navigator;

use crate::api;
use crate::components::{Alert, AlertKind};
use crate::routes::Route;
use crate::session::{SessionAction, SessionHandle};
use crate::storage;

#[function_component(RegisterPage)]
pub fn register_page() -> Html {
    let store = use_context::<SessionHandle>().expect("session context missing");
    let navigator = use_navigator().expect("navigator missing");

    let username = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let confirm = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(String::new);
    let submitting = use_state(|| false);

    let onsubmit = {
        let username = username.clone();
        let email = email.clone();
        let password = password.clone();
        let confirm = confirm.clone();
        let message = message.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            message.set(String::new());
            if let Err(reason) = validate_registration(&password, &confirm) {
                error.set(reason);
                return;
            }
            error.set(String::new());

            let body = SignupRequest {
                username: (*username).clone(),
                password: (*password).clone(),
                email: (*email).clone(),
            };
            let username = username.clone();
            let email = email.clone();
            let password = password.clone();
            let confirm = confirm.clone();
            let message = message.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let store = store.clone();
            let navigator = navigator.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_json::<SignupResponse, _>("/signup", &body).await {
                    Ok(response) => {
                        if let Some(token) = response.token {
                            tracing::info!(username = %body.username, "signup auto-login");
                            storage::save_token(&token);
                            store.dispatch(SessionAction::LoginSucceeded { token });
                            navigator.push(&Route::Tasks);
                        } else {
                            message.set(
                                "Registration successful! You can now log in.".to_string(),
                            );
                            username.set(String::new());
                            email.set(String::new());
                            password.set(String::new());
                            confirm.set(String::new());
                        }
                    }
                    Err(reason) => {
                        error.set(format!("Registration failed: {reason}"));
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
                <div class="header">{ "Sign Up" }</div>
                <label>
                    { "Username" }
                    <input value={(*username).clone()} oninput={bind(&username)} required={true} />
                </label>
                <label>
                    { "Email" }
                    <input type="email" value={(*email).clone()} oninput={bind(&email)} required={true} />
                </label>
                <label>
                    { "Password" }
                    <input type="password" value={(*password).clone()} oninput={bind(&password)} required={true} />
                </label>
                <label>
                    { "Confirm Password" }
                    <input type="password" value={(*confirm).clone()} oninput={bind(&confirm)} required={true} />
                </label>
                <button type="submit" class="btn primary" disabled={*submitting}>
                    { if *submitting { "Registering…" } else { "Register" } }
                </button>
                <Alert kind={AlertKind::Success} text={(*message).clone()} />
                <Alert kind={AlertKind::Error} text={(*error).clone()} />
            </form>
        </div>
    }
}
