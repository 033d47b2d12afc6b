//! Landing page of the emailed reset link, `/ResetPassword?token=...`.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_query_map;
use shared::dto::ResetPasswordRequest;

use crate::routing::PublicRoute;
use crate::services::api::{auth, use_api_client};
use crate::utils::url::get_query_param;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let client = use_api_client();
    let query = use_query_map();

    // Try router's query map first, then fall back to direct URL reading
    let token = move || {
        query
            .with(|params| params.get("token"))
            .or_else(|| get_query_param("token"))
            .filter(|t| !t.is_empty())
    };

    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let done = RwSignal::new(None::<String>);
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
        let request = ResetPasswordRequest {
            token: untrack(token).unwrap_or_default(),
            password: password.get_untracked(),
        };
        let client = client.clone();
        submitting.set(true);
        error.set(None);
        spawn_local(async move {
            match auth::reset_password(&client, &request).await {
                Ok(response) => done.set(Some(response.message)),
                Err(e) => error.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1 class="card-title">"Choose a new password"</h1>
                {move || {
                    if let Some(message) = done.get() {
                        let message = if message.trim().is_empty() {
                            "Your password has been changed.".to_string()
                        } else {
                            message
                        };
                        return view! {
                            <p class="form-success">{message}</p>
                            <A href=PublicRoute::Login.path() attr:class="btn btn-block">"Log in"</A>
                        }
                            .into_any();
                    }
                    if token().is_none() {
                        return view! {
                            <p class="form-error">"This reset link is incomplete. Request a new one."</p>
                            <A href=PublicRoute::ForgotPassword.path() attr:class="btn btn-block">"Request a link"</A>
                        }
                            .into_any();
                    }
                    view! {
                        <form on:submit=on_submit.clone()>
                            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                            <label>
                                "New password"
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
                                "Save password"
                            </button>
                        </form>
                    }
                        .into_any()
                }}
            </div>
        </div>
    }
}
