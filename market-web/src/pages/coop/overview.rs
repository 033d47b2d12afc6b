use leptos::prelude::*;
use leptos_router::components::A;
use shared::dto::{Cooperative, Member, MembershipStatus, Order};
use shared::normalize::membership_count;

use crate::components::loaded;
use crate::error::AppError;
use crate::routing::CoopRoute;
use crate::services::api::{cooperatives, orders, use_api_client};
use crate::utils::format::format_money;

#[derive(Debug, Clone)]
struct Summary {
    cooperative: Cooperative,
    members: Vec<Member>,
    orders: Vec<Order>,
}

#[component]
pub fn CoopOverviewPage() -> impl IntoView {
    let client = use_api_client();

    let summary = LocalResource::new(move || {
        let client = client.clone();
        async move {
            let cooperative = cooperatives::my_cooperative(&client).await?;
            let members = cooperatives::list_members(&client, &cooperative.id).await?;
            let orders = orders::list_orders(&client).await?;
            Ok::<_, AppError>(Summary { cooperative, members, orders })
        }
    });

    view! {
        <section class="page coop-overview">
            {move || {
                loaded(
                    summary.get(),
                    |Summary { cooperative, members, orders }| {
                        let pending = members
                            .iter()
                            .filter(|m| m.status == MembershipStatus::Pending)
                            .count();
                        let open: Vec<&Order> = orders.iter().filter(|o| o.status.is_open()).collect();
                        let open_value: f64 = open.iter().map(|o| o.total_amount).sum();
                        view! {
                            <h1>{cooperative.name.clone()}</h1>
                            {cooperative.location.clone().map(|l| view! { <p class="muted">{l}</p> })}
                            <div class="stat-grid">
                                <div class="card stat">
                                    <span class="stat-value">{membership_count(&cooperative)}</span>
                                    <span class="stat-label">"Members"</span>
                                </div>
                                <div class="card stat">
                                    <span class="stat-value">{pending}</span>
                                    <span class="stat-label">"Awaiting approval"</span>
                                </div>
                                <div class="card stat">
                                    <span class="stat-value">{open.len()}</span>
                                    <span class="stat-label">"Open orders"</span>
                                </div>
                                <div class="card stat">
                                    <span class="stat-value">{format_money(open_value, "KES")}</span>
                                    <span class="stat-label">"Open order value"</span>
                                </div>
                            </div>
                            {cooperative.description.clone().map(|d| view! { <p class="description">{d}</p> })}
                            <div class="quick-links">
                                <A href=CoopRoute::Members.path() attr:class="btn">"Review members"</A>
                                <A href=CoopRoute::Produce.path() attr:class="btn btn-ghost">"List produce"</A>
                            </div>
                        }
                            .into_any()
                    },
                )
            }}
        </section>
    }
}
