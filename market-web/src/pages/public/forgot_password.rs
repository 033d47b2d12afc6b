use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;

use crate::routing::PublicRoute;
use crate::services::api::{auth, use_api_client};

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let client = use_api_client();
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(None::<String>);
    let sent = RwSignal::new(None::<String>);
    let submitting = RwSignal::new(false);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let address = email.get_untracked();
        let client = client.clone();
        submitting.set(true);
        error.set(None);
        spawn_local(async move {
            match auth::forgot_password(&client, &address).await {
                Ok(response) => sent.set(Some(response.message)),
                Err(e) => error.set(Some(e.user_message())),
            }
            submitting.set(false);
        });
    };

    view! {
        <div class="auth-page">
            <div class="card auth-card">
                <h1 class="card-title">"Reset your password"</h1>
                {move || match sent.get() {
                    Some(message) => view! {
                        <p class="form-success">
                            {if message.trim().is_empty() {
                                "If that address has an account, a reset link is on its way.".to_string()
                            } else {
                                message
                            }}
                        </p>
                    }
                        .into_any(),
                    None => view! {
                        <form on:submit=on_submit.clone()>
                            {move || error.get().map(|message| view! { <p class="form-error">{message}</p> })}
                            <p>"Enter the email you registered with and we will send you a reset link."</p>
                            <label>
                                "Email"
                                <input
                                    type="email"
                                    autocomplete="email"
                                    prop:value=move || email.get()
                                    on:input=move |ev| email.set(event_target_value(&ev))
                                />
                            </label>
                            <button class="btn btn-block" type="submit" disabled=move || submitting.get()>
                                "Send reset link"
                            </button>
                        </form>
                    }
                        .into_any(),
                }}
                <div class="auth-links">
                    <A href=PublicRoute::Login.path()>"Back to login"</A>
                </div>
            </div>
        </div>
    }
}
