use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::PublicRoute;
use crate::state::session::use_session_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <div class="home">
            <section class="hero">
                <h1>"Fresh produce, straight from the cooperative"</h1>
                <p>
                    "AgroMarket links smallholder farmers and their cooperatives with buyers. "
                    "List a harvest, manage members, or order in bulk from one place."
                </p>
                <div class="hero-actions">
                    <A href=PublicRoute::Marketplace.path() attr:class="btn">"Browse the marketplace"</A>
                    {move || match session.role() {
                        Some(role) => view! {
                            <A href=role.home_path() attr:class="btn btn-ghost">"Open my dashboard"</A>
                        }
                            .into_any(),
                        None => view! {
                            <A href=PublicRoute::Signup.path() attr:class="btn btn-ghost">"Create an account"</A>
                        }
                            .into_any(),
                    }}
                </div>
            </section>
            <section class="audiences">
                <div class="card">
                    <h3>"Farmers"</h3>
                    <p>"Publish what you harvested and follow every order through delivery."</p>
                </div>
                <div class="card">
                    <h3>"Cooperatives"</h3>
                    <p>"Approve members, schedule collection days and sell pooled produce."</p>
                </div>
                <div class="card">
                    <h3>"Buyers"</h3>
                    <p>"Join a cooperative, order directly and keep track of payments."</p>
                </div>
                <div class="card">
                    <h3>"Organizations"</h3>
                    <p>"Pull market data into your own systems with an API key."</p>
                </div>
            </section>
        </div>
    }
}
