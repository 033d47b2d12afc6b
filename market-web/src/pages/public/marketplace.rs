//! Marketplace: every open listing, searchable by crop, farmer or location.
//! Logged-in buyers can order straight from a listing card.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use shared::dto::PlaceOrderRequest;
use shared::normalize::{normalize_crop, Crop};
use shared::role::Role;

use crate::components::{loaded, Flash, Notice};
use crate::error::AppError;
use crate::routing::{login_redirect, PublicRoute};
use crate::services::api::{crops, orders, report_error, use_api_client};
use crate::state::session::use_session_context;
use crate::utils::format::{format_money, format_quantity};

/// Listings whose crop name, farmer name or location contains `needle`,
/// ignoring case. A blank needle keeps everything.
pub fn filter_crops(crops: &[Crop], needle: &str) -> Vec<Crop> {
    let needle = needle.trim().to_lowercase();
    crops
        .iter()
        .filter(|crop| {
            needle.is_empty()
                || crop.name.to_lowercase().contains(&needle)
                || crop.farmer_name.to_lowercase().contains(&needle)
                || crop
                    .location
                    .as_deref()
                    .is_some_and(|l| l.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

#[component]
pub fn MarketplacePage() -> impl IntoView {
    let session = use_session_context();
    let client = use_api_client();
    let search = RwSignal::new(String::new());
    let notice = RwSignal::new(None::<Notice>);

    let listings = LocalResource::new({
        let client = client.clone();
        move || {
            let client = client.clone();
            async move {
                let records = crops::list_crops(&client).await?;
                Ok::<_, AppError>(records.iter().map(normalize_crop).collect::<Vec<Crop>>())
            }
        }
    });

    let place_order = move |crop: Crop, quantity: String| {
        let quantity: f64 = match quantity.trim().parse() {
            Ok(q) => q,
            Err(_) => {
                notice.set(Some(Notice::error("Quantity must be a number")));
                return;
            }
        };
        if quantity > crop.quantity {
            notice.set(Some(Notice::error(format!(
                "Only {} available",
                format_quantity(crop.quantity, &crop.unit)
            ))));
            return;
        }
        let request = PlaceOrderRequest {
            crop_id: crop.id.clone(),
            quantity,
            delivery_address: None,
        };
        let client = client.clone();
        spawn_local(async move {
            match orders::place_order(&client, &request).await {
                Ok(_) => {
                    notice.set(Some(Notice::success(format!("Ordered {}", crop.name))));
                    listings.refetch();
                }
                Err(e) => notice.set(Some(Notice::error(report_error(&e, &session)))),
            }
        });
    };

    view! {
        <section class="page marketplace-page">
            <div class="page-header">
                <h1>"Marketplace"</h1>
                <input
                    class="search"
                    type="search"
                    placeholder="Search crops, farmers or places"
                    prop:value=move || search.get()
                    on:input=move |ev| search.set(event_target_value(&ev))
                />
            </div>
            <Flash notice=notice/>
            {move || {
                let place_order = place_order.clone();
                loaded(
                    listings.get(),
                    move |all| {
                        let shown = filter_crops(&all, &search.get());
                        if shown.is_empty() {
                            return view! { <p class="empty">"No listings match your search"</p> }.into_any();
                        }
                        let role = session.role();
                        view! {
                            <div class="crop-grid">
                                {shown
                                    .into_iter()
                                    .map(|crop| {
                                        let action = order_action(role, crop.clone(), place_order.clone());
                                        view! {
                                            <article class="card crop-card">
                                                <h3>{crop.name.clone()}</h3>
                                                <p class="muted">{crop.farmer_name.clone()}</p>
                                                {crop.location.clone().map(|l| view! { <p class="muted">{l}</p> })}
                                                <p class="price">
                                                    {format!("{} / {}", format_money(crop.price_per_unit, "KES"), crop.unit)}
                                                </p>
                                                <p>{format!("{} available", format_quantity(crop.quantity, &crop.unit))}</p>
                                                {crop.description.clone().map(|d| view! { <p class="description">{d}</p> })}
                                                {action}
                                            </article>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        }
                            .into_any()
                    },
                )
            }}
        </section>
    }
}

fn order_action<F>(role: Option<Role>, crop: Crop, place_order: F) -> AnyView
where
    F: Fn(Crop, String) + Clone + 'static,
{
    match role {
        Some(Role::Buyer) => {
            let quantity = RwSignal::new(String::from("1"));
            view! {
                <div class="order-row">
                    <input
                        type="number"
                        min="0"
                        step="any"
                        prop:value=move || quantity.get()
                        on:input=move |ev| quantity.set(event_target_value(&ev))
                    />
                    <button class="btn btn-small" on:click=move |_| place_order(crop.clone(), quantity.get_untracked())>
                        "Order"
                    </button>
                </div>
            }
                .into_any()
        }
        Some(_) => view! { <p class="muted">"Ordering is open to buyer accounts"</p> }.into_any(),
        None => view! {
            <A href=login_redirect(PublicRoute::Marketplace.path()) attr:class="btn btn-ghost btn-small">
                "Log in to order"
            </A>
        }
            .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::dto::Id;

    fn crop(id: i64, name: &str, farmer: &str, location: Option<&str>) -> Crop {
        Crop {
            id: Id::from(id),
            name: name.to_string(),
            farmer_name: farmer.to_string(),
            quantity: 10.0,
            unit: "kg".to_string(),
            price_per_unit: 50.0,
            location: location.map(str::to_string),
            harvest_date: None,
            description: None,
        }
    }

    #[test]
    fn test_filter_matches_name_farmer_and_location() {
        let all = vec![
            crop(1, "Maize", "Wanjiru Kamau", Some("Nakuru")),
            crop(2, "Beans", "Otieno Ouma", Some("Kisumu")),
            crop(3, "Sorghum", "Amina Hassan", None),
        ];
        let names = |needle: &str| -> Vec<String> {
            filter_crops(&all, needle).into_iter().map(|c| c.name).collect()
        };
        assert_eq!(names("maize"), ["Maize"]);
        assert_eq!(names("OUMA"), ["Beans"]);
        assert_eq!(names("nakuru"), ["Maize"]);
        assert_eq!(names("  "), ["Maize", "Beans", "Sorghum"]);
        assert!(names("cassava").is_empty());
    }
}
