//! Farmer pages. They live at flat public paths inside the public layout,
//! which wraps them in the farmer dashboard shell; the public navbar and
//! footer are suppressed for them.

use leptos::prelude::*;
use leptos_router::components::A;
use shared::dto::Order;
use shared::normalize::{normalize_crop, Crop};

use super::listings::MyListings;
use super::orders::SellerOrders;
use crate::components::loaded;
use crate::error::AppError;
use crate::routing::PublicRoute;
use crate::services::api::{crops, orders, use_api_client};
use crate::state::session::use_session_context;
use crate::utils::format::format_money;

#[derive(Debug, Clone)]
struct FarmSummary {
    crops: Vec<Crop>,
    orders: Vec<Order>,
}

#[component]
pub fn FarmerDashboardPage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();

    let summary = LocalResource::new(move || {
        let client = client.clone();
        async move {
            let records = crops::my_crops(&client).await?;
            let orders = orders::list_orders(&client).await?;
            Ok::<_, AppError>(FarmSummary {
                crops: records.iter().map(normalize_crop).collect(),
                orders,
            })
        }
    });

    view! {
        <section class="page farmer-overview">
            <h1>
                {move || session.profile().map(|p| format!("Karibu, {}", p.display_name)).unwrap_or_default()}
            </h1>
            {move || {
                loaded(
                    summary.get(),
                    |FarmSummary { crops, orders }| {
                        let stock_value: f64 = crops.iter().map(Crop::listing_value).sum();
                        let open = orders.iter().filter(|o| o.status.is_open()).count();
                        let earned: f64 = orders
                            .iter()
                            .filter(|o| !o.status.is_open() && o.status != shared::dto::OrderStatus::Cancelled)
                            .map(|o| o.total_amount)
                            .sum();
                        view! {
                            <div class="stat-grid">
                                <div class="card stat">
                                    <span class="stat-value">{crops.len()}</span>
                                    <span class="stat-label">"Active listings"</span>
                                </div>
                                <div class="card stat">
                                    <span class="stat-value">{format_money(stock_value, "KES")}</span>
                                    <span class="stat-label">"Listed stock value"</span>
                                </div>
                                <div class="card stat">
                                    <span class="stat-value">{open}</span>
                                    <span class="stat-label">"Open orders"</span>
                                </div>
                                <div class="card stat">
                                    <span class="stat-value">{format_money(earned, "KES")}</span>
                                    <span class="stat-label">"Delivered sales"</span>
                                </div>
                            </div>
                        }
                            .into_any()
                    },
                )
            }}
            <div class="quick-links">
                <A href=PublicRoute::FarmerCrops.path() attr:class="btn">"Manage crops"</A>
                <A href=PublicRoute::FarmerOrders.path() attr:class="btn btn-ghost">"View orders"</A>
            </div>
        </section>
    }
}

#[component]
pub fn FarmerCropsPage() -> impl IntoView {
    view! { <MyListings title="My crops"/> }
}

#[component]
pub fn FarmerOrdersPage() -> impl IntoView {
    view! { <SellerOrders title="Orders for my crops"/> }
}
