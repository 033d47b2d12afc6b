use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use shared::dto::SignupRequest;
use shared::normalize::normalize_user;
use shared::role::Role;

use crate::routing::PublicRoute;
use crate::services::api::{auth, use_api_client};
use crate::state::session::use_session_context;

#[component]
pub fn SignupPage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let navigate = use_navigate();

    let full_name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let role = RwSignal::new(Role::Farmer);
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        if password.get_untracked() != confirm.get_untracked() {
            error.set(Some("Passwords do not match".to_string()));
            return;
        }
        let phone = phone.get_untracked().trim().to_string();
        let request = SignupRequest {
            full_name: full_name.get_untracked().trim().to_string(),
            email: email.get_untracked().trim().to_string(),
            phone: (!phone.is_empty()).then_some(phone),
            password: password.get_untracked(),
            role: role.get_untracked(),
        };
        let client = client.clone();
        let navigate = navigate.clone();
        submitting.set(true);
        error.set(None);

        spawn_local(async move {
            match auth::signup(&client, &request).await {
                Ok(response) => {
                    // trust the backend's view of the role over the form
                    let home = normalize_user(&response.user).role.home_path();
                    session.set_session(response.user, response.token);
                    navigate(home, Default::default());
                }
                Err(e) => {
                    log::warn!("[auth] signup failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="card auth-card" on:submit=on_submit>
                <h1 class="card-title">"Create your account"</h1>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                <label>
                    "Full name"
                    <input
                        type="text"
                        autocomplete="name"
                        prop:value=move || full_name.get()
                        on:input=move |ev| full_name.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Email"
                    <input
                        type="email"
                        autocomplete="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Phone (optional)"
                    <input
                        type="tel"
                        autocomplete="tel"
                        prop:value=move || phone.get()
                        on:input=move |ev| phone.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "I am a"
                    <select on:change=move |ev| {
                        if let Some(parsed) = Role::parse(&event_target_value(&ev)) {
                            role.set(parsed);
                        }
                    }>
                        {Role::ALL
                            .into_iter()
                            .map(|r| {
                                view! {
                                    <option value=r.as_str() selected=move || role.get() == r>
                                        {r.label()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <label>
                    "Password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    "Confirm password"
                    <input
                        type="password"
                        autocomplete="new-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| confirm.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn-block" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Creating account..." } else { "Sign up" }}
                </button>
                <div class="auth-links">
                    <span>"Already registered?"</span>
                    <A href=PublicRoute::Login.path()>"Log in"</A>
                </div>
            </form>
        </div>
    }
}
