//! Placeholders for data that is still loading or failed to load.

use leptos::prelude::*;

use crate::error::{AppError, Result};
use crate::routing::PublicRoute;
use crate::services::api::report_error;
use crate::state::session::use_session_context;

#[component]
pub fn Loading() -> impl IntoView {
    view! { <div class="loading">"Loading..."</div> }
}

/// Shows a failed call. A rejected token also ends the session.
#[component]
pub fn ErrorNotice(error: AppError) -> impl IntoView {
    let message = error.user_message();
    let expired = error.is_unauthorized();
    if expired {
        let session = use_session_context();
        Effect::new(move || {
            report_error(&error, &session);
        });
    }

    view! {
        <div class="error-notice">
            <p>{message}</p>
            {expired.then(|| view! { <a href=PublicRoute::Login.path()>"Log in again"</a> })}
        </div>
    }
}

/// Render a resource state: loading, the value, or the error.
pub fn loaded<T>(state: Option<Result<T>>, render: impl FnOnce(T) -> AnyView) -> AnyView {
    match state {
        None => view! { <Loading/> }.into_any(),
        Some(Ok(value)) => render(value),
        Some(Err(error)) => view! { <ErrorNotice error=error/> }.into_any(),
    }
}
