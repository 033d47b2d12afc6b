//! Top navigation of the public layout.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routing::PublicRoute;
use crate::state::session::use_session_context;

#[component]
pub fn PublicNavbar() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let on_logout = move |_| {
        session.clear();
        navigate(PublicRoute::Home.path(), Default::default());
    };

    view! {
        <nav class="public-nav">
            <div class="nav-inner">
                <A href=PublicRoute::Home.path() attr:class="nav-brand">
                    <span class="brand-agro">"Agro"</span><span class="brand-market">"Market"</span>
                </A>
                <div class="nav-links">
                    <A href=PublicRoute::Home.path()>"Home"</A>
                    <A href=PublicRoute::Marketplace.path()>"Marketplace"</A>
                    <A href=PublicRoute::About.path()>"About"</A>
                    <A href=PublicRoute::Contact.path()>"Contact"</A>
                </div>
                <div class="nav-session">
                    {move || match session.role() {
                        Some(role) => {
                            let logout = on_logout.clone();
                            view! {
                                <A href=role.home_path() attr:class="btn btn-small">"Dashboard"</A>
                                <button class="btn btn-ghost btn-small" on:click=logout>"Log out"</button>
                            }
                                .into_any()
                        }
                        None => view! {
                            <A href=PublicRoute::Login.path() attr:class="btn btn-ghost btn-small">"Log in"</A>
                            <A href=PublicRoute::Signup.path() attr:class="btn btn-small">"Sign up"</A>
                        }
                            .into_any(),
                    }}
                </div>
            </div>
        </nav>
    }
}
