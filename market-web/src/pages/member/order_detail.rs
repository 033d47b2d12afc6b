//! `/PetOwnerDashboard/Orders/:id`

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use shared::dto::{Id, OrderStatus};

use crate::components::{loaded, Flash, Notice, StatusPill};
use crate::routing::MemberRoute;
use crate::services::api::{orders, report_error, use_api_client};
use crate::state::session::use_session_context;
use crate::utils::display::order_tone;
use crate::utils::format::{format_date, format_money, format_quantity};

#[component]
pub fn OrderDetailPage(#[prop(into)] id: String) -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let notice = RwSignal::new(None::<Notice>);
    let id = Id::from(id);

    let order = LocalResource::new({
        let client = client.clone();
        let id = id.clone();
        move || {
            let client = client.clone();
            let id = id.clone();
            async move { orders::get_order(&client, &id).await }
        }
    });

    let cancel = move |_: leptos::ev::MouseEvent| {
        let Some(Ok(current)) = order.get_untracked() else {
            return;
        };
        let client = client.clone();
        spawn_local(async move {
            match orders::update_status(&client, &current, OrderStatus::Cancelled, false).await {
                Ok(_) => {
                    notice.set(Some(Notice::success("Order cancelled")));
                    order.refetch();
                }
                Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
            }
        });
    };

    view! {
        <section class="page order-detail">
            <A href=MemberRoute::Orders.path() attr:class="back-link">"← All orders"</A>
            <h1>{format!("Order {}", id)}</h1>
            <Flash notice=notice/>
            {move || {
                let cancel = cancel.clone();
                loaded(
                    order.get(),
                    move |order| {
                        let unit = order.unit.clone().unwrap_or_else(|| "kg".to_string());
                        view! {
                            <div class="card">
                                <dl class="details">
                                    <dt>"Status"</dt>
                                    <dd><StatusPill tone=order_tone(order.status) label=order.status.label()/></dd>
                                    <dt>"Crop"</dt>
                                    <dd>{order.crop_name.clone().unwrap_or_default()}</dd>
                                    <dt>"Farmer"</dt>
                                    <dd>{order.farmer_name.clone().unwrap_or_default()}</dd>
                                    <dt>"Quantity"</dt>
                                    <dd>{format_quantity(order.quantity, &unit)}</dd>
                                    <dt>"Total"</dt>
                                    <dd>{format_money(order.total_amount, "KES")}</dd>
                                    <dt>"Placed"</dt>
                                    <dd>{order.created_at.as_deref().map(format_date).unwrap_or_default()}</dd>
                                    <dt>"Delivery"</dt>
                                    <dd>{order.delivery_address.clone().unwrap_or_else(|| "Collect from cooperative".to_string())}</dd>
                                </dl>
                                {order.status.buyer_can_cancel().then(move || view! {
                                    <button class="btn btn-ghost" on:click=cancel>"Cancel order"</button>
                                })}
                            </div>
                        }
                            .into_any()
                    },
                )
            }}
        </section>
    }
}
