use tasker_shared::Session;
use yew::{Callback, Html, function_component, html, use_context};
use yew_router::prelude::{Link, use_navigator};

use crate::api;
use crate::routes::Route;
use crate::session::{SessionAction, SessionHandle};
use crate::storage;

#[function_component(Header)]
pub fn header() -> Html {
    let store = use_context::<SessionHandle>().expect("session context missing");
    let navigator = use_navigator().expect("navigator missing");

    let onlogout = {
        let store = store.clone();
        Callback::from(move |_| {
            let store = store.clone();
            let navigator = navigator.clone();
            wasm_bindgen_futures::spawn_local(async move {
                // The local session is dropped even if the server never hears it.
                if let Err(error) = api::post_empty("/logout").await {
                    tracing::warn!(error = %error, "logout call failed; clearing session anyway");
                }
                storage::clear_token();
                store.dispatch(SessionAction::LoggedOut);
                navigator.push(&Route::Login);
            });
        })
    };

    let nav = match &store.session {
        Session::Authenticated { .. } => html! {
            <nav>
                <Link<Route> to={Route::Tasks}>{ "Tasks" }</Link<Route>>
                <Link<Route> to={Route::AddTask}>{ "Add Task" }</Link<Route>>
                <Link<Route> to={Route::Completed}>{ "Completed" }</Link<Route>>
                <Link<Route> to={Route::Profile}>{ "Profile" }</Link<Route>>
                <Link<Route> to={Route::ChangePassword}>{ "Change Password" }</Link<Route>>
                <button class="btn" onclick={onlogout}>{ "Logout" }</button>
            </nav>
        },
        Session::Anonymous => html! {
            <nav>
                <Link<Route> to={Route::Login}>{ "Login" }</Link<Route>>
                <Link<Route> to={Route::Register}>{ "Sign Up" }</Link<Route>>
                <Link<Route> to={Route::ForgotPassword}>{ "Forgot Password?" }</Link<Route>>
            </nav>
        },
        Session::Restoring { .. } => html! { <nav /> },
    };

    html! {
        <header class="topbar">
            <Link<Route> to={Route::Tasks} classes="brand">{ "SmartTasker" }</Link<Route>>
            { nav }
        </header>
    }
}
