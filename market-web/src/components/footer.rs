use leptos::prelude::*;
use leptos_router::components::A;

use crate::routing::PublicRoute;

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="public-footer">
            <div class="footer-inner">
                <div>
                    <p class="footer-brand">"AgroMarket"</p>
                    <p class="footer-tagline">"Connecting farmers, cooperatives and buyers."</p>
                </div>
                <div class="footer-links">
                    <A href=PublicRoute::Marketplace.path()>"Marketplace"</A>
                    <A href=PublicRoute::About.path()>"About"</A>
                    <A href=PublicRoute::Contact.path()>"Contact"</A>
                </div>
            </div>
        </footer>
    }
}
