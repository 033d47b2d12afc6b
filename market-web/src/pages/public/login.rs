//! Login page. After a successful login the user goes to `?next=` when it
//! is a local path, else to the home dashboard of their role.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::{use_navigate, use_query_map};
use shared::dto::LoginRequest;
use shared::normalize::normalize_user;

use crate::routing::{safe_next, PublicRoute};
use crate::services::api::{auth, use_api_client};
use crate::state::session::use_session_context;

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let navigate = use_navigate();
    let query = use_query_map();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let request = LoginRequest {
            email: email.get_untracked().trim().to_string(),
            password: password.get_untracked(),
        };
        let next = safe_next(query.with_untracked(|q| q.get("next")));
        let client = client.clone();
        let navigate = navigate.clone();
        submitting.set(true);
        error.set(None);

        spawn_local(async move {
            match auth::login(&client, &request).await {
                Ok(response) => {
                    let role = normalize_user(&response.user).role;
                    session.set_session(response.user, response.token);
                    let target = next.unwrap_or_else(|| role.home_path().to_string());
                    navigate(&target, Default::default());
                }
                Err(e) => {
                    log::warn!("[auth] login failed: {}", e);
                    error.set(Some(e.user_message()));
                }
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <form class="card auth-card" on:submit=on_submit>
                <h1 class="card-title">"Welcome back"</h1>
                {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
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
                    "Password"
                    <input
                        type="password"
                        autocomplete="current-password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                </label>
                <button class="btn btn-block" type="submit" disabled=move || submitting.get()>
                    {move || if submitting.get() { "Logging in..." } else { "Log in" }}
                </button>
                <div class="auth-links">
                    <A href=PublicRoute::ForgotPassword.path()>"Forgot password?"</A>
                    <A href=PublicRoute::Signup.path()>"Create an account"</A>
                </div>
            </form>
        </div>
    }
}
