use leptos::prelude::*;
use leptos_router::components::A;

/// Shown for paths a layout does not know. `home` is where the button leads.
#[component]
pub fn NotFound(#[prop(into)] home: String) -> impl IntoView {
    view! {
        <div class="not-found">
            <div class="card">
                <h1>"404 - Page Not Found"</h1>
                <p>"The page you're looking for doesn't exist."</p>
                <A href=home>
                    <span class="btn">"Go back"</span>
                </A>
            </div>
        </div>
    }
}
