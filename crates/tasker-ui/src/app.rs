use tasker_shared::{ProfileDto, Session};
use yew::context::ContextProvider;
use yew::{Html, function_component, html, use_effect_with, use_reducer};
use yew_router::prelude::{BrowserRouter, Switch};

use crate::api;
use crate::components::Header;
use crate::routes::{Route, switch};
use crate::session::{SessionAction, SessionHandle, SessionStore};
use crate::storage;

#[function_component(App)]
pub fn app() -> Html {
    let store = use_reducer(|| SessionStore {
        session: Session::from_stored_token(storage::load_token()),
    });

    // A stored token is only believed once the server accepts it.
    {
        let store = store.clone();
        use_effect_with((), move |_| {
            if store.session.is_restoring() {
                wasm_bindgen_futures::spawn_local(async move {
                    match api::get_json::<ProfileDto>("/profile").await {
                        Ok(profile) => {
                            tracing::info!(
                                username = %profile.username,
                                "restored session from stored token"
                            );
                            store.dispatch(SessionAction::RestoreConfirmed);
                        }
                        Err(error) => {
                            tracing::warn!(error = %error, "stored token rejected, clearing it");
                            storage::clear_token();
                            store.dispatch(SessionAction::RestoreFailed);
                        }
                    }
                });
            }
            || ()
        });
    }

    html! {
        <BrowserRouter>
            <ContextProvider<SessionHandle> context={store}>
                <Header />
                <main class="content">
                    <Switch<Route> render={switch} />
                </main>
            </ContextProvider<SessionHandle>>
        </BrowserRouter>
    }
}
