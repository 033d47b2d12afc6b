//! Orders received by a seller (farmer or cooperative owner), with the
//! status moves the order lifecycle allows.

use leptos::prelude::*;
use leptos::task::spawn_local;
use shared::dto::{Order, OrderStatus};
use shared::utils::short_reference;

use crate::components::{loaded, Flash, Notice, StatusPill};
use crate::error::AppError;
use crate::services::api::{orders, report_error, use_api_client};
use crate::state::session::use_session_context;
use crate::utils::display::order_tone;
use crate::utils::format::{format_date, format_money, format_quantity};

/// Open orders first, then the rest; newest first within each group.
pub fn sort_for_seller(orders: &mut [Order]) {
    orders.sort_by(|a, b| {
        b.status
            .is_open()
            .cmp(&a.status.is_open())
            .then_with(|| b.created_at.cmp(&a.created_at))
    });
}

#[component]
pub fn SellerOrders(#[prop(into)] title: String) -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let notice = RwSignal::new(None::<Notice>);

    let received = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let mut list = orders::list_orders(&client).await?;
                sort_for_seller(&mut list);
                Ok::<_, AppError>(list)
            }
        }
    });

    let advance = move |order: Order, next: OrderStatus| {
        let client = client.clone();
        spawn_local(async move {
            match orders::update_status(&client, &order, next, true).await {
                Ok(_) => {
                    notice.set(Some(Notice::success(format!("Order marked {}", next.label().to_lowercase()))));
                    received.refetch();
                }
                Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
            }
        });
    };

    view! {
        <section class="page orders-page">
            <h1>{title}</h1>
            <Flash notice=notice/>
            {move || {
                let advance = advance.clone();
                loaded(
                    received.get(),
                    move |list| {
                        if list.is_empty() {
                            return view! { <p class="empty">"No orders yet"</p> }.into_any();
                        }
                        view! {
                            <table class="table">
                                <thead>
                                    <tr>
                                        <th>"Order"</th>
                                        <th>"Crop"</th>
                                        <th>"Buyer"</th>
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
                                            let actions = order
                                                .status
                                                .seller_transitions()
                                                .iter()
                                                .map(|next| {
                                                    let next = *next;
                                                    let order = order.clone();
                                                    let advance = advance.clone();
                                                    view! {
                                                        <button class="btn btn-small" on:click=move |_| advance(order.clone(), next)>
                                                            {next.label()}
                                                        </button>
                                                    }
                                                })
                                                .collect_view();
                                            view! {
                                                <tr>
                                                    <td class="mono">{short_reference(order.id.as_str(), 6, 4)}</td>
                                                    <td>{order.crop_name.clone().unwrap_or_default()}</td>
                                                    <td>{order.buyer_name.clone().unwrap_or_default()}</td>
                                                    <td>{format_quantity(order.quantity, order.unit.as_deref().unwrap_or("kg"))}</td>
                                                    <td>{format_money(order.total_amount, "KES")}</td>
                                                    <td>{order.created_at.as_deref().map(format_date).unwrap_or_default()}</td>
                                                    <td><StatusPill tone=order_tone(order.status) label=order.status.label()/></td>
                                                    <td class="actions">{actions}</td>
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

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::Id;

    fn order(id: i64, status: OrderStatus, created_at: &str) -> Order {
        Order {
            id: Id::from(id),
            crop_name: None,
            quantity: 1.0,
            unit: None,
            total_amount: 100.0,
            status,
            buyer_name: None,
            farmer_name: None,
            delivery_address: None,
            created_at: Some(created_at.to_string()),
        }
    }

    #[test]
    fn test_open_orders_come_first() {
        let mut list = vec![
            order(1, OrderStatus::Delivered, "2026-05-03"),
            order(2, OrderStatus::Pending, "2026-05-01"),
            order(3, OrderStatus::Shipped, "2026-05-02"),
            order(4, OrderStatus::Cancelled, "2026-05-04"),
        ];
        sort_for_seller(&mut list);
        let ids: Vec<&str> = list.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, ["3", "2", "4", "1"]);
    }
}
