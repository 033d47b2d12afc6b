use leptos::prelude::*;
use leptos_router::components::A;
use shared::dto::Order;
use shared::utils::short_reference;

use crate::components::{loaded, StatusPill};
use crate::routing::{MemberRoute, PublicRoute};
use crate::services::api::{orders, use_api_client};
use crate::state::session::use_session_context;
use crate::utils::display::order_tone;
use crate::utils::format::format_money;

const RECENT_ORDERS: usize = 5;

#[component]
pub fn MemberOverviewPage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();

    let recent = LocalResource::new(move || {
        let client = client.clone();
        async move { orders::list_orders(&client).await }
    });

    let greeting = move || {
        session
            .profile()
            .map(|p| format!("Welcome back, {}", p.display_name))
            .unwrap_or_else(|| "Welcome back".to_string())
    };

    view! {
        <section class="page member-overview">
            <h1>{greeting}</h1>
            <div class="quick-links">
                <A href=PublicRoute::Marketplace.path() attr:class="btn">"Shop the marketplace"</A>
                <A href=MemberRoute::Cooperatives.path() attr:class="btn btn-ghost">"Find a cooperative"</A>
            </div>
            {move || {
                loaded(
                    recent.get(),
                    |mut list: Vec<Order>| {
                        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                        let open = list.iter().filter(|o| o.status.is_open()).count();
                        let spent: f64 = list.iter().map(|o| o.total_amount).sum();
                        view! {
                            <div class="stat-grid">
                                <div class="card stat">
                                    <span class="stat-value">{open}</span>
                                    <span class="stat-label">"Open orders"</span>
                                </div>
                                <div class="card stat">
                                    <span class="stat-value">{format_money(spent, "KES")}</span>
                                    <span class="stat-label">"Ordered in total"</span>
                                </div>
                            </div>
                            <h2>"Recent orders"</h2>
                            <ul class="order-list">
                                {list.is_empty().then(|| view! { <li class="empty">"No orders yet"</li> })}
                                {list
                                    .into_iter()
                                    .take(RECENT_ORDERS)
                                    .map(|order| {
                                        let href = MemberRoute::OrderDetail { id: order.id.to_string() }.path();
                                        view! {
                                            <li class="card order-row">
                                                <A href=href>{short_reference(order.id.as_str(), 6, 4)}</A>
                                                <span>{order.crop_name.unwrap_or_default()}</span>
                                                <span>{format_money(order.total_amount, "KES")}</span>
                                                <StatusPill tone=order_tone(order.status) label=order.status.label()/>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        }
                            .into_any()
                    },
                )
            }}
        </section>
    }
}
