//! Organization pages: usage overview and API key management. Flat public
//! paths; the public layout supplies the organization shell.

pub mod api_keys;

pub use api_keys::OrganizationApiKeysPage;

use leptos::prelude::*;
use leptos_router::components::A;

use crate::components::loaded;
use crate::routing::PublicRoute;
use crate::services::api::{organizations, use_api_client};
use crate::utils::format::format_number;

#[component]
pub fn OrganizationDashboardPage() -> impl IntoView {
    let client = use_api_client();

    let usage = LocalResource::new(move || {
        let client = client.clone();
        async move { organizations::usage(&client).await }
    });

    view! {
        <section class="page org-overview">
            <h1>"API usage"</h1>
            {move || {
                loaded(
                    usage.get(),
                    |usage| {
                        let quota = usage
                            .quota
                            .map(|q| format_number(q as f64, 0))
                            .unwrap_or_else(|| "Unlimited".to_string());
                        let percent = usage.percent_used();
                        view! {
                            <div class="card">
                                <p class="muted">{usage.period.clone()}</p>
                                <p class="stat-value">
                                    {format!("{} requests", format_number(usage.requests as f64, 0))}
                                </p>
                                <p>{format!("Quota: {}", quota)}</p>
                                {percent.map(|p| view! {
                                    <div class="meter">
                                        <div class="meter-fill" style=format!("width: {}%;", p)></div>
                                    </div>
                                    <p class="muted">{format!("{}% of quota used", p)}</p>
                                })}
                            </div>
                        }
                            .into_any()
                    },
                )
            }}
            <A href=PublicRoute::OrganizationApiKeys.path() attr:class="btn">"Manage API keys"</A>
        </section>
    }
}
