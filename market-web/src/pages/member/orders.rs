use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use shared::dto::{Order, OrderStatus};
use shared::utils::short_reference;

use crate::components::{loaded, Flash, Notice, StatusPill};
use crate::routing::MemberRoute;
use crate::services::api::{orders, report_error, use_api_client};
use crate::state::session::use_session_context;
use crate::utils::display::order_tone;
use crate::utils::format::{format_date, format_money, format_quantity};

#[component]
pub fn MemberOrdersPage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let notice = RwSignal::new(None::<Notice>);

    let placed = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move { orders::list_orders(&client).await }
        }
    });

    let cancel = move |order: Order| {
        let client = client.clone();
        spawn_local(async move {
            match orders::update_status(&client, &order, OrderStatus::Cancelled, false).await {
                Ok(_) => {
                    notice.set(Some(Notice::success("Order cancelled")));
                    placed.refetch();
                }
                Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
            }
        });
    };

    view! {
        <section class="page orders-page">
            <h1>"My orders"</h1>
            <Flash notice=notice/>
            {move || {
                let cancel = cancel.clone();
                loaded(
                    placed.get(),
                    move |mut list| {
                        if list.is_empty() {
                            return view! { <p class="empty">"You have not ordered anything yet"</p> }.into_any();
                        }
                        list.sort_by(|a, b| b.created_at.cmp(&a.created_at));
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Order"</th>
                                        <th>"Crop"</th>
                                        <th>"Farmer"</th>
                                        <th>"Quantity"</th>
                                        <th>"Total"</th>
                                        <th>"Placed"</th>
                                        <th>"Status"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|order| {
                                            let href = MemberRoute::OrderDetail { id: order.id.to_string() }.path();
                                            let cancellable = order.status.buyer_can_cancel();
                                            let cancel = cancel.clone();
                                            let row = order.clone();
                                            view! {
                                                <tr>
                                                    <td class="mono"><A href=href>{short_reference(order.id.as_str(), 6, 4)}</A></td>
                                                    <td>{order.crop_name.clone().unwrap_or_default()}</td>
                                                    <td>{order.farmer_name.clone().unwrap_or_default()}</td>
                                                    <td>{format_quantity(order.quantity, order.unit.as_deref().unwrap_or("kg"))}</td>
                                                    <td>{format_money(order.total_amount, "KES")}</td>
                                                    <td>{order.created_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                                    <td><StatusPill tone=order_tone(order.status) label=order.status.label()/></td>
                                                    <td>
                                                        {cancellable.then(move || view! {
                                                            <button class="btn btn-ghost btn-small" on:click=move |_| cancel(row.clone())>
                                                                "Cancel"
                                                            </button>
                                                        })}
                                                    </td>
                                                </tr>
                                            }
                                        })
                                        .collect_view()}
                                </tbody>
                            </table>
                        }
                            .into_any()
                    },
                )
            }}
        </section>
    }
}
