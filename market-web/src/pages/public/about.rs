//! About Page

use leptos::prelude::*;

#[component]
pub fn AboutPage() -> impl IntoView {
    view! {
        <div class="page about-page">
            <div class="card">
                <h1 class="card-title">"About AgroMarket"</h1>
                <p>
                    "AgroMarket is a marketplace for agricultural cooperatives. Farmers list their "
                    "produce individually or through their cooperative, and buyers order directly "
                    "from the people who grew it."
                </p>

                <h2>"Features"</h2>
                <ul>
                    <li>"Crop listings with live quantities and prices"</li>
                    <li>"Cooperative membership and appointment management"</li>
                    <li>"Order tracking from placement to delivery"</li>
                    <li>"Direct messaging between members, farmers and buyers"</li>
                    <li>"API access for partner organizations"</li>
                </ul>

                <h2>"Technology"</h2>
                <p>
                    "The web client is written in Rust and compiled to WebAssembly. It talks to "
                    "the AgroMarket REST API and keeps nothing but your session in the browser."
                </p>
            </div>
        </div>
    }
}
