use tasker_shared::{LoginRequest, LoginResponse};
use yew::{Callback, Html, SubmitEvent, TargetCast, function_component, html, use_context, use_state};
use yew_router::prelude::use_navigator;

use crate::api;
use crate::components::{Alert, AlertKind};
use crate::routes::Route;
use crate::session::{SessionAction, SessionHandle};
use crate::storage;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let store = use_context::<SessionHandle>().expect("session context missing");
    let navigator = use_navigator().expect("navigator missing");

    let username = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(String::new);
    let submitting = use_state(|| false);

    let onsubmit = {
        let username = username.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            if *submitting {
                return;
            }

            let body = LoginRequest {
                username: (*username).clone(),
                password: (*password).clone(),
            };
            let error = error.clone();
            let submitting = submitting.clone();
            let store = store.clone();
            let navigator = navigator.clone();

            submitting.set(true);
            wasm_bindgen_futures::spawn_local(async move {
                match api::post_json::<LoginResponse, _>("/login", &body).await {
                    Ok(response) => {
                        tracing::info!(username = %body.username, "login succeeded");
                        storage::save_token(&response.token);
                        store.dispatch(SessionAction::LoginSucceeded {
                            token: response.token,
                        });
                        navigator.push(&Route::Tasks);
                    }
                    Err(message) => {
                        error.set(format!("Login failed: {message}"));
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
                <div class="header">{ "Login" }</div>
                <label>
                    { "Username" }
                    <input value={(*username).clone()} oninput={bind(&username)} required={true} />
                </label>
                <label>
                    { "Password" }
                    <input type="password" value={(*password).clone()} oninput={bind(&password)} required={true} />
                </label>
                <button type="submit" class="btn primary" disabled={*submitting}>
                    { if *submitting { "Logging in…" } else { "Login" } }
                </button>
                <Alert kind={AlertKind::Error} text={(*error).clone()} />
            </form>
        </div>
    }
}
