use tasker_shared::Session;
use yew::{Html, Properties, function_component, html, use_context};
use yew_router::prelude::{Redirect, Routable};

use crate::pages::{
    AddTaskPage, ChangePasswordPage, CompletedPage, ForgotPasswordPage, LoginPage, ProfilePage,
    RegisterPage, TasksPage,
};
use crate::session::SessionHandle;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Tasks,
    #[at("/add")]
    AddTask,
    #[at("/completed")]
    Completed,
    #[at("/profile")]
    Profile,
    #[at("/change-password")]
    ChangePassword,
    #[at("/login")]
    Login,
    #[at("/register")]
    Register,
    #[at("/forgot-password")]
    ForgotPassword,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[derive(Properties, PartialEq)]
pub struct GuardProps {
    pub children: Html,
}

#[function_component(Protected)]
pub fn protected(props: &GuardProps) -> Html {
    let store = use_context::<SessionHandle>().expect("session context missing");

    match &store.session {
        Session::Authenticated { .. } => props.children.clone(),
        Session::Restoring { .. } => html! {
            <div class="panel muted">{ "Checking your session…" }</div>
        },
        Session::Anonymous => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

#[function_component(PublicOnly)]
pub fn public_only(props: &GuardProps) -> Html {
    let store = use_context::<SessionHandle>().expect("session context missing");

    if store.session.is_authenticated() {
        html! { <Redirect<Route> to={Route::Tasks} /> }
    } else {
        props.children.clone()
    }
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Tasks => html! { <Protected><TasksPage /></Protected> },
        Route::AddTask => html! { <Protected><AddTaskPage /></Protected> },
        Route::Completed => html! { <Protected><CompletedPage /></Protected> },
        Route::Profile => html! { <Protected><ProfilePage /></Protected> },
        Route::ChangePassword => html! { <Protected><ChangePasswordPage /></Protected> },
        Route::Login => html! { <PublicOnly><LoginPage /></PublicOnly> },
        Route::Register => html! { <PublicOnly><RegisterPage /></PublicOnly> },
        Route::ForgotPassword => html! { <PublicOnly><ForgotPasswordPage /></PublicOnly> },
        Route::NotFound => html! {
            <div class="panel muted">{ "Nothing here. Try the task list." }</div>
        },
    }
}
