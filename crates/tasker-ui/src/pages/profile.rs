use tasker_shared::{ProfileDto, ProfileUpdate};
use yew::{Callback, Html, TargetCast, function_component, html, use_effect_with, use_state};

use crate::api;
use crate::components::{Alert, AlertKind};

#[function_component(ProfilePage)]
pub fn profile_page() -> Html {
    let profile = use_state(|| None::<ProfileDto>);
    let email_alert = use_state(|| false);
    let loading = use_state(|| true);
    let saving = use_state(|| false);
    let message = use_state(String::new);
    let error = use_state(String::new);

    {
        let profile = profile.clone();
        let email_alert = email_alert.clone();
        let loading = loading.clone();
        let error = error.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match api::get_json::<ProfileDto>("/profile").await {
                    Ok(loaded) => {
                        email_alert.set(loaded.email_alert);
                        profile.set(Some(loaded));
                    }
                    Err(reason) => {
                        tracing::error!(reason = %reason, "profile load failed");
                        error.set("Failed to load profile".to_string());
                    }
                }
                loading.set(false);
            });
            || ()
        });
    }

    let on_toggle = {
        let email_alert = email_alert.clone();
        Callback::from(move |e: yew::Event| {
            let input: web_sys::HtmlInputElement = e.target_unchecked_into();
            email_alert.set(input.checked());
        })
    };

    let on_save = {
        let email_alert = email_alert.clone();
        let saving = saving.clone();
        let message = message.clone();
        let error = error.clone();
        Callback::from(move |_| {
            if *saving {
                return;
            }
            let body = ProfileUpdate {
                email_alert: *email_alert,
            };
            let saving = saving.clone();
            let message = message.clone();
            let error = error.clone();

            saving.set(true);
            message.set(String::new());
            error.set(String::new());
            wasm_bindgen_futures::spawn_local(async move {
                match api::put_unit("/profile", &body).await {
                    Ok(()) => message.set("Profile updated!".to_string()),
                    Err(reason) => {
                        tracing::error!(reason = %reason, "profile update failed");
                        error.set("Failed to update profile".to_string());
                    }
                }
                saving.set(false);
            });
        })
    };

    if *loading {
        return html! { <div class="panel muted">{ "Loading profile…" }</div> };
    }

    let identity = match &*profile {
        Some(profile) => html! {
            <div class="profile-identity">
                <h2>{ &profile.username }</h2>
                <div class="muted">{ &profile.email }</div>
            </div>
        },
        None => html! {},
    };

    html! {
        <div class="page">
            { identity }
            {
                if profile.is_some() {
                    html! {
                        <div class="panel form">
                            <div class="header">{ "Notification Settings" }</div>
                            <label class="toggle">
                                <input
                                    type="checkbox"
                                    checked={*email_alert}
                                    onchange={on_toggle}
                                />
                                <span>
                                    { "Email Notifications" }
                                    <span class="muted">
                                        {
                                            if *email_alert {
                                                ": you will receive email reminders"
                                            } else {
                                                ": email reminders are disabled"
                                            }
                                        }
                                    </span>
                                </span>
                            </label>
                            <button class="btn primary" onclick={on_save} disabled={*saving}>
                                { if *saving { "Saving…" } else { "Save Changes" } }
                            </button>
                        </div>
                    }
                } else {
                    html! {}
                }
            }
            <Alert kind={AlertKind::Success} text={(*message).clone()} />
            <Alert kind={AlertKind::Error} text={(*error).clone()} />
        </div>
    }
}
