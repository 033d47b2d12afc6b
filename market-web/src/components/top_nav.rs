use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::utils::initials;

use super::role_badge::RoleBadge;
use crate::routing::PublicRoute;
use crate::state::session::use_session_context;

#[component]
pub fn TopNav(#[prop(into)] title: String, open: RwSignal<bool>) -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.clear();
        navigate(PublicRoute::Login.path(), Default::default());
    };

    view! {
        <header class="top-nav">
            <button
                class="btn btn-ghost nav-toggle"
                aria-label="Toggle navigation"
                on:click=move |_| open.update(|o| *o = !*o)
            >
                "☰"
            </button>
            <h2 class="top-nav-title">{title}</h2>
            <div class="top-nav-user">
                {move || {
                    session.profile().map(|profile| {
                        view! {
                            <RoleBadge role=profile.role/>
                            <span class="avatar" title=profile.display_name.clone()>
                                {initials(&profile.display_name)}
                            </span>
                        }
                    })
                }}
                <button class="btn btn-ghost btn-small" on:click=on_logout>"Log out"</button>
            </div>
        </header>
    }
}
